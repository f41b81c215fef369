//! Items Domain
//!
//! Item catalog with three interchangeable storage backends behind one
//! repository contract.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pure delegation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────────────────────────────┐
//! │ Repository                          │
//! │  memory │ sql (Statement) │ orm     │
//! └──────┬──────────────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, update DTO, search condition
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{InMemoryItemRepository, ItemService, handlers};
//!
//! let service = ItemService::new(InMemoryItemRepository::new());
//! let router = axum::Router::new().nest("/items", handlers::router(service));
//! # let _: axum::Router = router;
//! ```

pub mod entity;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod orm;
pub mod repository;
pub mod seed;
pub mod service;
pub mod sql;

// Re-export commonly used types
pub use error::{ErrorResponse, ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemId, ItemSearchCondition, ItemUpdateDto};
pub use orm::OrmItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
pub use sql::SqlItemRepository;
