use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Identifier assigned by the store when an item is saved
pub type ItemId = i64;

/// Item entity
///
/// `id` is owned by the store: it is `0` until `save` assigns one and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier
    pub id: ItemId,
    /// Display name, also the search field
    pub item_name: String,
    /// Unit price
    pub price: i32,
    /// Quantity in stock
    pub quantity: i32,
}

impl Item {
    /// Create an item that has not been saved yet
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: 0,
            item_name: item_name.into(),
            price,
            quantity,
        }
    }

    /// Overwrite the mutable fields, keeping `id`
    pub fn apply_update(&mut self, update: ItemUpdateDto) {
        self.item_name = update.item_name;
        self.price = update.price;
        self.quantity = update.quantity;
    }
}

/// Request payload for creating an item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 10))]
    pub item_name: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl From<CreateItem> for Item {
    fn from(input: CreateItem) -> Self {
        Item::new(input.item_name, input.price, input.quantity)
    }
}

/// New values for an existing item
///
/// The validation rules only apply at the HTTP boundary; repositories accept
/// any value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemUpdateDto {
    #[validate(length(min = 1, max = 10))]
    pub item_name: String,
    #[validate(range(min = 0))]
    pub price: i32,
    #[validate(range(min = 0))]
    pub quantity: i32,
}

impl ItemUpdateDto {
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            item_name: item_name.into(),
            price,
            quantity,
        }
    }
}

/// Search filter for `find_all`
///
/// Both fields are optional and combined with AND. A missing or empty
/// `item_name` puts no constraint on the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemSearchCondition {
    /// Substring the item name must contain (case-sensitive)
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub item_name: Option<String>,
    /// Inclusive upper bound on price
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub max_price: Option<i32>,
}

impl ItemSearchCondition {
    pub fn new(item_name: Option<&str>, max_price: Option<i32>) -> Self {
        Self {
            item_name: item_name.map(str::to_string),
            max_price,
        }
    }

    pub fn by_name(item_name: &str) -> Self {
        Self::new(Some(item_name), None)
    }

    pub fn by_max_price(max_price: i32) -> Self {
        Self::new(None, Some(max_price))
    }

    /// Name fragment to match, `None` when the name puts no constraint
    pub fn name_fragment(&self) -> Option<&str> {
        self.item_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Whether `item` satisfies every present predicate
    pub fn matches(&self, item: &Item) -> bool {
        let name_ok = self
            .name_fragment()
            .is_none_or(|name| item.item_name.contains(name));
        let price_ok = self.max_price.is_none_or(|max| item.price <= max);
        name_ok && price_ok
    }
}

/// Build a LIKE pattern matching `fragment` anywhere, with LIKE wildcards in
/// the fragment escaped (backslash is the PostgreSQL default escape).
pub fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Query strings send `?max_price=` for an empty form field, JSON sends numbers
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + std::str::FromStr,
    T::Err: std::fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Text(String),
        Value(T),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Value(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.is_empty() => Ok(None),
        Some(Raw::Text(text)) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}
