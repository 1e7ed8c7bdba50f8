//! Domain entities persisted by the repository layer.
//!
//! # Responsibility
//! - Define the plain data shapes shared with the service boundary.
//!
//! # Invariants
//! - `id == 0` means "not yet persisted"; the store assigns real ids.
//! - Ids are unique and immutable once assigned by insertion.

pub mod grocery_list_item;
pub mod product;
