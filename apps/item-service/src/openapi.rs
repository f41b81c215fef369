//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the item service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Service",
        version = "0.1.0",
        description = "Item catalog over interchangeable storage backends"
    ),
    nest(
        (path = "/items", api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;
