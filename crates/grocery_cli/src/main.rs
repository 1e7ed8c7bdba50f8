//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `grocery_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use grocery_core::{
    GroceryListItemRepository, ProductRepository, SqliteGroceryListItemRepository,
    SqliteProductRepository, Store,
};

fn main() {
    println!("grocery_core version={}", grocery_core::core_version());

    if let Err(err) = smoke() {
        eprintln!("smoke check failed: {err}");
        std::process::exit(1);
    }
}

fn smoke() -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::in_memory()?;

    let products = SqliteProductRepository::try_new(&store)?;
    println!("seeded products={}", products.get_all()?.len());

    let items = SqliteGroceryListItemRepository::try_new(&store)?;
    println!("seeded grocery list items={}", items.get_all()?.len());

    Ok(())
}
