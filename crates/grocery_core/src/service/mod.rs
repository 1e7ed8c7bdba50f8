//! Service façade at the interface boundary toward callers.
//!
//! # Responsibility
//! - Forward calls 1:1 to a repository implementation.
//! - Keep callers decoupled from storage details.

pub mod grocery_list_service;
pub mod product_service;
