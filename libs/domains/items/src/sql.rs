use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, FromQueryResult, Statement, Value};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemId, ItemSearchCondition, ItemUpdateDto, contains_pattern};
use crate::repository::ItemRepository;

const SELECT_COLUMNS: &str = "SELECT id, item_name, price, quantity FROM item";

/// PostgreSQL implementation of ItemRepository with hand-written SQL
#[derive(Clone)]
pub struct SqlItemRepository {
    db: DatabaseConnection,
}

impl SqlItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Helper struct for deserializing item rows from the database
#[derive(Debug, FromQueryResult)]
struct ItemRow {
    id: i64,
    item_name: String,
    price: i32,
    quantity: i32,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            item_name: row.item_name,
            price: row.price,
            quantity: row.quantity,
        }
    }
}

/// Build the `find_all` query: one placeholder per present predicate,
/// joined with AND, in id order
pub(crate) fn find_all_statement(condition: &ItemSearchCondition) -> Statement {
    let mut predicates = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    if let Some(name) = condition.name_fragment() {
        values.push(contains_pattern(name).into());
        predicates.push(format!("item_name LIKE ${}", values.len()));
    }

    if let Some(max_price) = condition.max_price {
        values.push(max_price.into());
        predicates.push(format!("price <= ${}", values.len()));
    }

    let mut sql = SELECT_COLUMNS.to_string();
    if !predicates.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&predicates.join(" AND "));
    }
    sql.push_str(" ORDER BY id");

    Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
}

#[async_trait]
impl ItemRepository for SqlItemRepository {
    #[instrument(skip(self, item))]
    async fn save(&self, item: Item) -> ItemResult<Item> {
        let sql = r#"
            INSERT INTO item (item_name, price, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, item_name, price, quantity
        "#;

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                item.item_name.into(),
                item.price.into(),
                item.quantity.into(),
            ],
        );

        let row = ItemRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .ok_or_else(|| ItemError::Internal("Insert returned no row".to_string()))?;

        tracing::info!(item_id = row.id, "Saved item");
        Ok(row.into())
    }

    #[instrument(skip(self, update_param))]
    async fn update(&self, id: ItemId, update_param: ItemUpdateDto) -> ItemResult<()> {
        let sql = "UPDATE item SET item_name = $1, price = $2, quantity = $3 WHERE id = $4";

        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            sql,
            [
                update_param.item_name.into(),
                update_param.price.into(),
                update_param.quantity.into(),
                id.into(),
            ],
        );

        let result = self.db.execute_raw(stmt).await?;
        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(item_id = id, "Updated item");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = $1");

        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, [id.into()]);

        let row = ItemRow::find_by_statement(stmt).one(&self.db).await?;

        Ok(row.map(Into::into))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, condition: ItemSearchCondition) -> ItemResult<Vec<Item>> {
        let stmt = find_all_statement(&condition);
        tracing::debug!(sql = %stmt.sql, "Searching items");

        let rows = ItemRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
