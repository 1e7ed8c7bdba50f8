//! Grocery-list item domain model.

use serde::{Deserialize, Serialize};

use crate::model::product::ProductId;

/// Store-assigned item identifier. `0` marks an unpersisted entity.
pub type GroceryListItemId = i64;

/// One product-on-one-list record.
///
/// `(grocery_list_id, product_id)` pairs are not required to be unique;
/// the repository does not deduplicate items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryListItem {
    pub id: GroceryListItemId,
    /// Reference to a grocery list. The list entity itself lives outside
    /// this crate.
    pub grocery_list_id: i64,
    pub product_id: ProductId,
    /// Quantity on the list; expected positive, not enforced here.
    pub amount: i64,
}

impl GroceryListItem {
    /// Creates an unpersisted item (`id = 0`).
    pub fn new(grocery_list_id: i64, product_id: ProductId, amount: i64) -> Self {
        Self {
            id: 0,
            grocery_list_id,
            product_id,
            amount,
        }
    }
}
