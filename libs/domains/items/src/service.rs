//! Item Service - boundary between callers and the selected repository

use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{Item, ItemId, ItemSearchCondition, ItemUpdateDto};
use crate::repository::ItemRepository;

/// Item service delegating every operation to the repository unchanged
///
/// `R` may be unsized so a backend picked at startup can be shared as
/// `Arc<dyn ItemRepository>`.
pub struct ItemService<R: ItemRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService owning the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

impl<R: ItemRepository + ?Sized> ItemService<R> {
    /// Create a new ItemService over an already shared repository
    pub fn from_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, item), fields(item_name = %item.item_name))]
    pub async fn save(&self, item: Item) -> ItemResult<Item> {
        self.repository.save(item).await
    }

    #[instrument(skip(self, update_param))]
    pub async fn update(&self, id: ItemId, update_param: ItemUpdateDto) -> ItemResult<()> {
        self.repository.update(id, update_param).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_items(&self, condition: ItemSearchCondition) -> ItemResult<Vec<Item>> {
        self.repository.find_all(condition).await
    }
}

impl<R: ItemRepository + ?Sized> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
