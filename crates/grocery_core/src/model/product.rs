//! Product domain model.
//!
//! # Invariants
//! - `shelf_life` is a pure calendar date; no time-of-day or timezone.
//! - `price` is fixed-point currency with two fractional digits; it must
//!   round-trip through the store without floating rounding.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Store-assigned product identifier. `0` marks an unpersisted entity.
pub type ProductId = i64;

/// One stocked product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Non-empty display name. Duplicate names are permitted.
    pub name: String,
    /// May be zero; non-negativity is a caller concern, not enforced here.
    pub stock: i64,
    pub shelf_life: NaiveDate,
    pub price: Decimal,
}

impl Product {
    /// Creates an unpersisted product (`id = 0`).
    ///
    /// The store assigns the real id when the product is added through a
    /// repository.
    pub fn new(name: impl Into<String>, stock: i64, shelf_life: NaiveDate, price: Decimal) -> Self {
        Self {
            id: 0,
            name: name.into(),
            stock,
            shelf_life,
            price,
        }
    }

    /// Returns whether the store has assigned an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
