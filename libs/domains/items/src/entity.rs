use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the item table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub item_name: String,
    pub price: i32,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            item_name: model.item_name,
            price: model.price,
            quantity: model.quantity,
        }
    }
}

// The database assigns the id, so whatever the caller put there is dropped.
impl From<crate::models::Item> for ActiveModel {
    fn from(item: crate::models::Item) -> Self {
        ActiveModel {
            id: NotSet,
            item_name: Set(item.item_name),
            price: Set(item.price),
            quantity: Set(item.quantity),
        }
    }
}
