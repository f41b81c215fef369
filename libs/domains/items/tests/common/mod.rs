//! Behaviour every ItemRepository must share
//!
//! Each check expects an empty store and leaves data behind, so callers give
//! every check a fresh (or truncated) repository.

#![allow(dead_code)]

use domain_items::*;
use test_utils::assertions::*;

/// Save the three items used by the search checks, returning them with ids
pub async fn save_search_fixture<R: ItemRepository + ?Sized>(repo: &R) -> [Item; 3] {
    let a1 = repo.save(Item::new("itemA-1", 10000, 10)).await.unwrap();
    let a2 = repo.save(Item::new("itemA-2", 20000, 20)).await.unwrap();
    let b1 = repo.save(Item::new("itemB-1", 30000, 30)).await.unwrap();
    [a1, a2, b1]
}

pub async fn save_then_find_round_trips<R: ItemRepository + ?Sized>(repo: &R) {
    let saved = repo.save(Item::new("itemA", 10000, 10)).await.unwrap();

    let found = assert_some(repo.find_by_id(saved.id).await.unwrap(), "saved item");

    assert_eq!(found, saved);
    assert_ne!(saved.id, 0, "save must assign an id");
}

pub async fn ids_are_distinct<R: ItemRepository + ?Sized>(repo: &R) {
    let mut ids = Vec::new();
    for n in 0..10 {
        ids.push(repo.save(Item::new(format!("item{n}"), 1000, 1)).await.unwrap().id);
    }

    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

pub async fn update_is_visible<R: ItemRepository + ?Sized>(repo: &R) {
    let saved = repo.save(Item::new("item1", 10000, 10)).await.unwrap();

    repo.update(saved.id, ItemUpdateDto::new("item2", 20000, 30))
        .await
        .unwrap();

    let found = assert_some(repo.find_by_id(saved.id).await.unwrap(), "updated item");
    assert_eq!(found.id, saved.id);
    assert_eq!(found.item_name, "item2");
    assert_eq!(found.price, 20000);
    assert_eq!(found.quantity, 30);
}

pub async fn update_missing_is_not_found<R: ItemRepository + ?Sized>(repo: &R) {
    let saved = repo.save(Item::new("itemA", 10000, 10)).await.unwrap();
    let missing = saved.id + 1000;

    let result = repo
        .update(missing, ItemUpdateDto::new("item2", 20000, 30))
        .await;

    assert!(matches!(result, Err(ItemError::NotFound(id)) if id == missing));
    assert!(repo.find_by_id(missing).await.unwrap().is_none());
    assert_eq!(
        repo.find_all(ItemSearchCondition::default()).await.unwrap(),
        vec![saved]
    );
}

pub async fn find_by_id_absent_is_none<R: ItemRepository + ?Sized>(repo: &R) {
    assert!(repo.find_by_id(12345).await.unwrap().is_none());
}

pub async fn find_all_applies_conjunctive_filter<R: ItemRepository + ?Sized>(repo: &R) {
    let [a1, a2, b1] = save_search_fixture(repo).await;

    let cases = [
        (ItemSearchCondition::default(), vec![a1.clone(), a2.clone(), b1.clone()]),
        (ItemSearchCondition::by_name(""), vec![a1.clone(), a2.clone(), b1.clone()]),
        (ItemSearchCondition::by_name("itemA"), vec![a1.clone(), a2.clone()]),
        (ItemSearchCondition::by_name("itemB"), vec![b1.clone()]),
        (ItemSearchCondition::by_max_price(10000), vec![a1.clone()]),
        (ItemSearchCondition::new(Some("itemA"), Some(10000)), vec![a1.clone()]),
    ];

    for (condition, expected) in cases {
        let actual = repo.find_all(condition.clone()).await.unwrap();
        assert_unordered_eq(&actual, &expected, &format!("{:?}", condition));
    }
}

pub async fn find_all_name_match_is_literal_and_case_sensitive<R: ItemRepository + ?Sized>(
    repo: &R,
) {
    let plain = repo.save(Item::new("itemA-1", 10000, 10)).await.unwrap();
    let percent = repo.save(Item::new("50%off", 5000, 1)).await.unwrap();
    let underscore = repo.save(Item::new("a_b", 100, 1)).await.unwrap();

    let upper = repo.find_all(ItemSearchCondition::by_name("ITEMA")).await.unwrap();
    assert!(upper.is_empty(), "name match must be case-sensitive");

    let by_percent = repo.find_all(ItemSearchCondition::by_name("%")).await.unwrap();
    assert_eq!(by_percent, vec![percent]);

    let by_underscore = repo.find_all(ItemSearchCondition::by_name("_")).await.unwrap();
    assert_eq!(by_underscore, vec![underscore]);

    let middle = repo.find_all(ItemSearchCondition::by_name("emA-")).await.unwrap();
    assert_eq!(middle, vec![plain]);
}

pub async fn find_all_without_match_is_empty<R: ItemRepository + ?Sized>(repo: &R) {
    save_search_fixture(repo).await;

    let found = repo
        .find_all(ItemSearchCondition::new(Some("itemC"), Some(1)))
        .await
        .unwrap();

    assert!(found.is_empty());
}

pub async fn reads_are_idempotent<R: ItemRepository + ?Sized>(repo: &R) {
    let [a1, ..] = save_search_fixture(repo).await;
    let condition = ItemSearchCondition::by_name("item");

    let first = repo.find_all(condition.clone()).await.unwrap();
    let second = repo.find_all(condition).await.unwrap();
    assert_eq!(first, second);

    assert_eq!(
        repo.find_by_id(a1.id).await.unwrap(),
        repo.find_by_id(a1.id).await.unwrap()
    );
}
