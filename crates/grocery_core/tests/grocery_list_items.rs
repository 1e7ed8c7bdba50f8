use grocery_core::{
    GroceryListItem, GroceryListItemRepository, GroceryListItemService,
    SqliteGroceryListItemRepository, Store,
};
use std::collections::HashSet;

#[test]
fn construction_seeds_five_items() {
    let store = Store::in_memory().unwrap();
    let repo = SqliteGroceryListItemRepository::try_new(&store).unwrap();

    let items = repo.get_all().unwrap();
    assert_eq!(items.len(), 5);

    let second = repo.get(2).unwrap().unwrap();
    assert_eq!(second.grocery_list_id, 1);
    assert_eq!(second.product_id, 2);
    assert_eq!(second.amount, 1);
}

#[test]
fn list_filter_returns_exactly_the_matching_items() {
    let store = Store::in_memory().unwrap();
    let repo = SqliteGroceryListItemRepository::try_new(&store).unwrap();

    let on_list_one = repo.get_all_on_grocery_list_id(1).unwrap();
    assert_eq!(on_list_one.len(), 3);
    assert!(on_list_one.iter().all(|item| item.grocery_list_id == 1));

    // Order is unspecified; compare as a set of (product, amount) pairs.
    let pairs: HashSet<(i64, i64)> = on_list_one
        .iter()
        .map(|item| (item.product_id, item.amount))
        .collect();
    assert_eq!(pairs, HashSet::from([(1, 3), (2, 1), (3, 4)]));

    let on_list_two = repo.get_all_on_grocery_list_id(2).unwrap();
    assert_eq!(on_list_two.len(), 2);
}

#[test]
fn unknown_list_yields_an_empty_sequence() {
    let store = Store::in_memory().unwrap();
    let repo = SqliteGroceryListItemRepository::try_new(&store).unwrap();

    assert!(repo.get_all_on_grocery_list_id(42).unwrap().is_empty());
}

#[test]
fn add_assigns_id_and_roundtrips() {
    let store = Store::in_memory().unwrap();
    let repo = SqliteGroceryListItemRepository::try_new(&store).unwrap();

    let mut item = GroceryListItem::new(2, 3, 6);
    let id = repo.add(&mut item).unwrap();
    assert!(id > 0);
    assert_eq!(item.id, id);

    let loaded = repo.get(id).unwrap().unwrap();
    assert_eq!(loaded, item);
}

#[test]
fn duplicate_list_product_pairs_are_not_deduplicated() {
    let store = Store::in_memory().unwrap();
    let repo = SqliteGroceryListItemRepository::try_new(&store).unwrap();

    let mut first = GroceryListItem::new(1, 1, 2);
    let mut second = GroceryListItem::new(1, 1, 5);
    repo.add(&mut first).unwrap();
    repo.add(&mut second).unwrap();

    let matching = repo
        .get_all_on_grocery_list_id(1)
        .unwrap()
        .into_iter()
        .filter(|item| item.product_id == 1)
        .count();
    // One seed row plus the two added above.
    assert_eq!(matching, 3);
}

#[test]
fn update_and_delete_by_id() {
    let store = Store::in_memory().unwrap();
    let repo = SqliteGroceryListItemRepository::try_new(&store).unwrap();

    let mut item = GroceryListItem::new(2, 3, 1);
    let id = repo.add(&mut item).unwrap();

    item.amount = 9;
    repo.update(&item).unwrap();
    assert_eq!(repo.get(id).unwrap().unwrap().amount, 9);

    repo.delete(&item).unwrap();
    assert!(repo.get(id).unwrap().is_none());

    // Miss on update/delete stays a silent no-op.
    repo.update(&item).unwrap();
    repo.delete(&item).unwrap();
}

#[test]
fn service_forwards_repository_calls() {
    let store = Store::in_memory().unwrap();
    let repo = SqliteGroceryListItemRepository::try_new(&store).unwrap();
    let service = GroceryListItemService::new(repo);

    assert_eq!(service.items_on_list(1).unwrap().len(), 3);

    let mut item = GroceryListItem::new(3, 4, 2);
    let id = service.add(&mut item).unwrap();
    assert_eq!(service.items_on_list(3).unwrap().len(), 1);

    service.delete(&item).unwrap();
    assert!(service.get(id).unwrap().is_none());
}
