//! Grocery-list item use-case service.

use crate::model::grocery_list_item::{GroceryListItem, GroceryListItemId};
use crate::repo::grocery_list_item_repo::GroceryListItemRepository;
use crate::repo::RepoResult;

/// Façade over a grocery-list item repository implementation.
pub struct GroceryListItemService<R: GroceryListItemRepository> {
    repo: R,
}

impl<R: GroceryListItemRepository> GroceryListItemService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all(&self) -> RepoResult<Vec<GroceryListItem>> {
        self.repo.get_all()
    }

    /// Returns the items on one grocery list; empty when the list is
    /// unknown or has no items.
    pub fn items_on_list(&self, grocery_list_id: i64) -> RepoResult<Vec<GroceryListItem>> {
        self.repo.get_all_on_grocery_list_id(grocery_list_id)
    }

    pub fn get(&self, id: GroceryListItemId) -> RepoResult<Option<GroceryListItem>> {
        self.repo.get(id)
    }

    pub fn add(&self, item: &mut GroceryListItem) -> RepoResult<GroceryListItemId> {
        self.repo.add(item)
    }

    pub fn update(&self, item: &GroceryListItem) -> RepoResult<()> {
        self.repo.update(item)
    }

    pub fn delete(&self, item: &GroceryListItem) -> RepoResult<()> {
        self.repo.delete(item)
    }
}
