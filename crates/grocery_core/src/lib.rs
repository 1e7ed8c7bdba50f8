//! Core data-access logic for the grocery inventory app.
//! This crate is the single source of truth for persistence behavior.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{BatchStatement, DbError, DbResult, Store};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::grocery_list_item::{GroceryListItem, GroceryListItemId};
pub use model::product::{Product, ProductId};
pub use repo::grocery_list_item_repo::{
    GroceryListItemRepository, SqliteGroceryListItemRepository,
};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};
pub use repo::{RepoError, RepoResult};
pub use service::grocery_list_service::GroceryListItemService;
pub use service::product_service::ProductService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
