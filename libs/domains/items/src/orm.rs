use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Select, TransactionTrait,
};
use tracing::instrument;

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, ItemId, ItemSearchCondition, ItemUpdateDto, contains_pattern},
    repository::ItemRepository,
};

/// PostgreSQL implementation of ItemRepository over the Sea-ORM entity
#[derive(Clone)]
pub struct OrmItemRepository {
    db: DatabaseConnection,
}

impl OrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `find_all` query with a filter only for the predicates that are present
pub(crate) fn search_query(condition: &ItemSearchCondition) -> Select<entity::Entity> {
    let mut query = entity::Entity::find();

    if let Some(name) = condition.name_fragment() {
        query = query.filter(entity::Column::ItemName.like(contains_pattern(name)));
    }

    if let Some(max_price) = condition.max_price {
        query = query.filter(entity::Column::Price.lte(max_price));
    }

    query.order_by_asc(entity::Column::Id)
}

#[async_trait]
impl ItemRepository for OrmItemRepository {
    #[instrument(skip(self, item))]
    async fn save(&self, item: Item) -> ItemResult<Item> {
        let active_model: entity::ActiveModel = item.into();

        let model = active_model.insert(&self.db).await?;

        tracing::info!(item_id = model.id, "Saved item");
        Ok(model.into())
    }

    #[instrument(skip(self, update_param))]
    async fn update(&self, id: ItemId, update_param: ItemUpdateDto) -> ItemResult<()> {
        let txn = self.db.begin().await?;

        let Some(model) = entity::Entity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Err(ItemError::NotFound(id));
        };

        let mut active_model = model.into_active_model();
        active_model.item_name = Set(update_param.item_name);
        active_model.price = Set(update_param.price);
        active_model.quantity = Set(update_param.quantity);

        // Loaded models are detached; nothing is written until this call.
        active_model.update(&txn).await?;
        txn.commit().await?;

        tracing::info!(item_id = id, "Updated item");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;

        Ok(model.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, condition: ItemSearchCondition) -> ItemResult<Vec<Item>> {
        let models = search_query(&condition).all(&self.db).await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, QueryTrait};

    fn model(id: i64, name: &str, price: i32, quantity: i32) -> entity::Model {
        entity::Model {
            id,
            item_name: name.to_string(),
            price,
            quantity,
        }
    }

    fn find_all_sql(condition: &ItemSearchCondition) -> String {
        search_query(condition)
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    fn logged_sql(db: DatabaseConnection) -> String {
        format!("{:?}", db.into_transaction_log())
    }

    #[test]
    fn test_empty_condition_has_no_where_clause() {
        let sql = find_all_sql(&ItemSearchCondition::default());

        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with(r#"ORDER BY "item"."id" ASC"#));
    }

    #[test]
    fn test_empty_name_has_no_where_clause() {
        assert!(!find_all_sql(&ItemSearchCondition::by_name("")).contains("WHERE"));
    }

    #[test]
    fn test_single_predicate_filters_only_that_column() {
        let sql = find_all_sql(&ItemSearchCondition::new(None, Some(10000)));

        assert!(sql.contains(r#"WHERE "item"."price" <= 10000"#));
        assert!(!sql.contains("item_name"));
        assert!(!sql.contains("TRUE"));
    }

    #[tokio::test]
    async fn test_find_all_without_predicates_runs_unfiltered_select() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "itemA", 10000, 10), model(2, "itemB", 20000, 20)]])
            .into_connection();
        let repo = OrmItemRepository::new(db.clone());

        let items = repo.find_all(ItemSearchCondition::by_name("")).await.unwrap();

        assert_eq!(items.len(), 2);
        assert!(!logged_sql(db).contains("WHERE"));
    }

    #[test]
    fn test_both_predicates_are_combined_with_and() {
        let sql = find_all_sql(&ItemSearchCondition::new(Some("itemA"), Some(10000)));

        assert!(sql.contains(r#""item"."item_name" LIKE '%itemA%'"#));
        assert!(sql.contains(r#"AND "item"."price" <= 10000"#));
    }

    #[tokio::test]
    async fn test_save_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "itemA", 10000, 10)]])
            .into_connection();
        let repo = OrmItemRepository::new(db);

        let saved = repo.save(Item::new("itemA", 10000, 10)).await.unwrap();

        assert_eq!(saved, Item { id: 1, ..Item::new("itemA", 10000, 10) });
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = OrmItemRepository::new(db.clone());

        let result = repo.update(9, ItemUpdateDto::new("item2", 20000, 30)).await;

        assert!(matches!(result, Err(ItemError::NotFound(9))));
        let log = logged_sql(db);
        assert!(!log.contains("UPDATE"));
        assert!(!log.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_update_writes_loaded_model_back_in_one_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![model(1, "item1", 10000, 10)],
                vec![model(1, "item2", 20000, 30)],
            ])
            .into_connection();
        let repo = OrmItemRepository::new(db.clone());

        repo.update(1, ItemUpdateDto::new("item2", 20000, 30))
            .await
            .unwrap();

        // Lookup and write-back share one transaction.
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let statements = format!("{:?}", log[0]);
        assert!(statements.contains("SELECT"));
        assert!(statements.contains("UPDATE"));
        assert!(statements.contains("COMMIT"));
    }

    #[tokio::test]
    async fn test_find_by_id_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "itemB", 20000, 20)]])
            .into_connection();
        let repo = OrmItemRepository::new(db);

        let found = repo.find_by_id(3).await.unwrap().unwrap();

        assert_eq!(found.item_name, "itemB");
        assert_eq!(found.quantity, 20);
    }
}
