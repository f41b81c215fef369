//! Shared test utilities for the item catalog
//!
//! - `TestDatabase`: PostgreSQL container with the schema applied (feature: "postgres")
//! - `TestDataBuilder`: deterministic item fixtures (always available)
//! - `assertions`: custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let name = builder.name("item", 1);
//!     let price = builder.price(1);
//! }
//! ```

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Longest name the `item.item_name` column accepts
pub const MAX_ITEM_NAME_LEN: usize = 10;

/// Builder for test data with deterministic randomization
///
/// The same test name always yields the same names and prices, so a failing
/// test reproduces exactly.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_save_item");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Item name that fits the column, e.g. `item-3f2-1`
    ///
    /// ```
    /// use test_utils::{MAX_ITEM_NAME_LEN, TestDataBuilder};
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// assert!(builder.name("item", 1).len() <= MAX_ITEM_NAME_LEN);
    /// ```
    pub fn name(&self, prefix: &str, n: u32) -> String {
        let name = format!("{}-{:03x}-{}", prefix, self.seed % 0x1000, n);
        name.chars().take(MAX_ITEM_NAME_LEN).collect()
    }

    /// Price between 1000 and 50000, a multiple of 1000
    pub fn price(&self, n: u32) -> i32 {
        let step = (self.seed.wrapping_add(u64::from(n)) % 50) as i32;
        1000 * (step + 1)
    }

    /// Quantity between 1 and 100
    pub fn quantity(&self, n: u32) -> i32 {
        (self.seed.wrapping_mul(31).wrapping_add(u64::from(n)) % 100) as i32 + 1
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert both slices hold the same elements, ignoring order
    pub fn assert_unordered_eq<T: PartialEq + Debug>(actual: &[T], expected: &[T], context: &str) {
        assert_eq!(
            actual.len(),
            expected.len(),
            "{}: expected {:?}, got {:?}",
            context,
            expected,
            actual
        );

        let mut unmatched: Vec<&T> = expected.iter().collect();
        for element in actual {
            match unmatched.iter().position(|candidate| *candidate == element) {
                Some(index) => {
                    unmatched.swap_remove(index);
                }
                None => panic!(
                    "{}: unexpected element {:?}; expected {:?}, got {:?}",
                    context, element, expected, actual
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::assertions::*;
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.name("item", 1), builder2.name("item", 1));
        assert_eq!(builder1.price(1), builder2.price(1));
        assert_eq!(builder1.quantity(1), builder2.quantity(1));
    }

    #[test]
    fn test_data_builder_from_name() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.name("item", 2), builder2.name("item", 2));
    }

    #[test]
    fn test_names_fit_item_column() {
        let builder = TestDataBuilder::new(u64::MAX);

        for n in 0..20 {
            assert!(builder.name("item", n).len() <= MAX_ITEM_NAME_LEN);
        }
    }

    #[test]
    fn test_generated_amounts_are_in_range() {
        let builder = TestDataBuilder::from_test_name("ranges");

        for n in 0..100 {
            assert!((1000..=50000).contains(&builder.price(n)));
            assert!((1..=100).contains(&builder.quantity(n)));
        }
    }

    #[test]
    fn test_assert_unordered_eq_ignores_order() {
        assert_unordered_eq(&[1, 2, 2, 3], &[3, 2, 1, 2], "numbers");
    }

    #[test]
    #[should_panic(expected = "unexpected element")]
    fn test_assert_unordered_eq_counts_duplicates() {
        assert_unordered_eq(&[1, 1, 2], &[1, 2, 2], "numbers");
    }
}
