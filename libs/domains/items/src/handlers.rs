use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ErrorResponse, ItemError, ItemResult};
use crate::extract::{ItemIdPath, SearchQuery, ValidatedJson};
use crate::models::{CreateItem, Item, ItemSearchCondition, ItemUpdateDto};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item),
    components(schemas(Item, CreateItem, ItemUpdateDto, ItemSearchCondition, ErrorResponse)),
    tags(
        (name = "Items", description = "Item catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router, meant to be nested under `/items`
pub fn router<R: ItemRepository + ?Sized + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items::<R>).post(create_item::<R>))
        .route("/{id}", get(get_item::<R>).put(update_item::<R>))
        .with_state(shared_service)
}

/// Search items by name fragment and maximum price
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    params(ItemSearchCondition),
    responses(
        (status = 200, description = "Items matching every given filter", body = Vec<Item>),
        (status = 400, description = "Unparsable query parameter", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn list_items<R: ItemRepository + ?Sized>(
    State(service): State<Arc<ItemService<R>>>,
    SearchQuery(condition): SearchQuery<ItemSearchCondition>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.find_items(condition).await?;
    Ok(Json(items))
}

/// Register a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item saved with its assigned id", body = Item),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn create_item<R: ItemRepository + ?Sized>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.save(input.into()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Id is not a number", body = ErrorResponse),
        (status = 404, description = "No item with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn get_item<R: ItemRepository + ?Sized>(
    State(service): State<Arc<ItemService<R>>>,
    ItemIdPath(id): ItemIdPath,
) -> ItemResult<Json<Item>> {
    let item = service
        .find_by_id(id)
        .await?
        .ok_or(ItemError::NotFound(id))?;
    Ok(Json(item))
}

/// Overwrite name, price and quantity of an item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = ItemUpdateDto,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, description = "Id is not a number or validation failed", body = ErrorResponse),
        (status = 404, description = "No item with this id", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
async fn update_item<R: ItemRepository + ?Sized>(
    State(service): State<Arc<ItemService<R>>>,
    ItemIdPath(id): ItemIdPath,
    ValidatedJson(input): ValidatedJson<ItemUpdateDto>,
) -> ItemResult<StatusCode> {
    service.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}
