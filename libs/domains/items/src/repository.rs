use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemId, ItemSearchCondition, ItemUpdateDto};

/// Repository trait for Item persistence
///
/// Every backend (in-memory, raw SQL, ORM) implements this contract and must be
/// indistinguishable from [`InMemoryItemRepository`] through it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a new item, assigning a fresh id (any id already on `item` is ignored)
    async fn save(&self, item: Item) -> ItemResult<Item>;

    /// Overwrite name, price and quantity of an existing item
    ///
    /// Fails with [`ItemError::NotFound`] when `id` is not stored.
    async fn update(&self, id: ItemId, update_param: ItemUpdateDto) -> ItemResult<()>;

    /// Get an item by id; `Ok(None)` when absent
    async fn find_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// List items matching every present predicate of `condition`
    async fn find_all(&self, condition: ItemSearchCondition) -> ItemResult<Vec<Item>>;
}

/// Items and the id sequence, guarded together so that id assignment and
/// insertion happen as one step
#[derive(Debug, Default)]
struct MemoryStore {
    items: HashMap<ItemId, Item>,
    sequence: ItemId,
}

/// In-memory implementation of ItemRepository
///
/// Clones share the same store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<MemoryStore>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every item. Test isolation only; the id sequence keeps counting.
    pub async fn clear_store(&self) {
        self.store.write().await.items.clear();
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn save(&self, mut item: Item) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        store.sequence += 1;
        item.id = store.sequence;
        store.items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, "Saved item");
        Ok(item)
    }

    async fn update(&self, id: ItemId, update_param: ItemUpdateDto) -> ItemResult<()> {
        let mut store = self.store.write().await;

        let item = store.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;
        item.apply_update(update_param);

        tracing::info!(item_id = id, "Updated item");
        Ok(())
    }

    async fn find_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn find_all(&self, condition: ItemSearchCondition) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;

        let result = store
            .items
            .values()
            .filter(|item| condition.matches(item))
            .cloned()
            .collect();

        Ok(result)
    }
}
