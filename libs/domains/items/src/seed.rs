use crate::error::ItemResult;
use crate::models::Item;
use crate::repository::ItemRepository;

/// Save the two demo items `itemA` and `itemB`
pub async fn init_test_data<R: ItemRepository + ?Sized>(repository: &R) -> ItemResult<()> {
    tracing::info!("test data init");
    repository.save(Item::new("itemA", 10000, 10)).await?;
    repository.save(Item::new("itemB", 20000, 20)).await?;
    Ok(())
}
