use chrono::NaiveDate;
use grocery_core::{GroceryListItem, Product};
use rust_decimal_macros::dec;

#[test]
fn new_product_starts_unpersisted() {
    let product = Product::new(
        "Eieren",
        50,
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
        dec!(3.25),
    );

    assert_eq!(product.id, 0);
    assert!(!product.is_persisted());
}

#[test]
fn new_item_starts_unpersisted() {
    let item = GroceryListItem::new(1, 2, 3);

    assert_eq!(item.id, 0);
    assert_eq!(item.grocery_list_id, 1);
    assert_eq!(item.product_id, 2);
    assert_eq!(item.amount, 3);
}

#[test]
fn product_serde_roundtrip_keeps_date_and_price() {
    let product = Product {
        id: 7,
        name: "Kaas".to_string(),
        stock: 100,
        shelf_life: NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
        price: dec!(7.98),
    };

    let json = serde_json::to_string(&product).unwrap();
    assert!(json.contains("\"2025-09-30\""));

    let back: Product = serde_json::from_str(&json).unwrap();
    assert_eq!(back, product);
}

#[test]
fn item_serde_roundtrip() {
    let item = GroceryListItem {
        id: 5,
        grocery_list_id: 2,
        product_id: 2,
        amount: 5,
    };

    let json = serde_json::to_string(&item).unwrap();
    let back: GroceryListItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
}
