//! Grocery-list item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own the `GroceryListItem` table: creation, idempotent seeding, CRUD
//!   and the per-list query.
//!
//! # Invariants
//! - All four columns map verbatim; there are no derived values.
//! - An unknown list id yields an empty sequence, not an error.

use crate::db::{BatchStatement, Store};
use crate::model::grocery_list_item::{GroceryListItem, GroceryListItemId};
use crate::repo::RepoResult;
use rusqlite::types::Value;
use rusqlite::{params, Row};

const ITEM_SELECT_SQL: &str = "SELECT
    Id,
    GroceryListId,
    ProductId,
    Amount
FROM GroceryListItem";

const CREATE_ITEM_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS GroceryListItem (
    Id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    GroceryListId INTEGER NOT NULL,
    ProductId INTEGER NOT NULL,
    Amount INTEGER NOT NULL
);";

const ITEM_SEED_SQL: &str = "INSERT INTO GroceryListItem (Id, GroceryListId, ProductId, Amount)
 VALUES (?1, ?2, ?3, ?4)
 ON CONFLICT(Id) DO NOTHING;";

// References grocery lists 1 and 2 and products 1 through 3 from the
// product seed.
const ITEM_SEEDS: &[(i64, i64, i64, i64)] = &[
    (1, 1, 1, 3),
    (2, 1, 2, 1),
    (3, 1, 3, 4),
    (4, 2, 1, 2),
    (5, 2, 2, 5),
];

/// Repository interface for grocery-list item operations.
pub trait GroceryListItemRepository {
    /// Returns every item in store scan order.
    fn get_all(&self) -> RepoResult<Vec<GroceryListItem>>;
    /// Returns every item belonging to `grocery_list_id`.
    fn get_all_on_grocery_list_id(&self, grocery_list_id: i64) -> RepoResult<Vec<GroceryListItem>>;
    /// Gets one item by id; `None` when no row matches.
    fn get(&self, id: GroceryListItemId) -> RepoResult<Option<GroceryListItem>>;
    /// Inserts a new row, assigns the store id in place and returns it.
    fn add(&self, item: &mut GroceryListItem) -> RepoResult<GroceryListItemId>;
    /// Overwrites the row matching `item.id`; no-op when absent.
    fn update(&self, item: &GroceryListItem) -> RepoResult<()>;
    /// Removes the row matching `item.id`; no-op when absent.
    fn delete(&self, item: &GroceryListItem) -> RepoResult<()>;
}

/// SQLite-backed grocery-list item repository.
pub struct SqliteGroceryListItemRepository<'store> {
    store: &'store Store,
}

impl<'store> SqliteGroceryListItemRepository<'store> {
    /// Ensures the `GroceryListItem` table exists and seeds the baseline
    /// rows in one conflict-ignore transaction.
    pub fn try_new(store: &'store Store) -> RepoResult<Self> {
        store.create_table(CREATE_ITEM_TABLE_SQL)?;
        store.run_batch(&seed_statements())?;
        Ok(Self { store })
    }
}

impl GroceryListItemRepository for SqliteGroceryListItemRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<GroceryListItem>> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL};"))?;
            let mut rows = stmt.query([])?;
            let mut items = Vec::new();
            while let Some(row) = rows.next()? {
                items.push(parse_item_row(row)?);
            }
            Ok(items)
        })
    }

    fn get_all_on_grocery_list_id(&self, grocery_list_id: i64) -> RepoResult<Vec<GroceryListItem>> {
        self.store.with_connection(|conn| {
            let mut stmt =
                conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE GroceryListId = ?1;"))?;
            let mut rows = stmt.query(params![grocery_list_id])?;
            let mut items = Vec::new();
            while let Some(row) = rows.next()? {
                items.push(parse_item_row(row)?);
            }
            Ok(items)
        })
    }

    fn get(&self, id: GroceryListItemId) -> RepoResult<Option<GroceryListItem>> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE Id = ?1;"))?;
            let mut rows = stmt.query(params![id])?;
            if let Some(row) = rows.next()? {
                return Ok(Some(parse_item_row(row)?));
            }
            Ok(None)
        })
    }

    fn add(&self, item: &mut GroceryListItem) -> RepoResult<GroceryListItemId> {
        let id = self.store.with_connection(|conn| {
            let id: i64 = conn.query_row(
                "INSERT INTO GroceryListItem (GroceryListId, ProductId, Amount)
                 VALUES (?1, ?2, ?3)
                 RETURNING Id;",
                params![item.grocery_list_id, item.product_id, item.amount],
                |row| row.get(0),
            )?;
            Ok::<_, crate::repo::RepoError>(id)
        })?;

        item.id = id;
        Ok(id)
    }

    fn update(&self, item: &GroceryListItem) -> RepoResult<()> {
        self.store.with_connection(|conn| {
            // Missing id is a silent no-op; the affected-row count is not
            // checked.
            conn.execute(
                "UPDATE GroceryListItem
                 SET GroceryListId = ?1, ProductId = ?2, Amount = ?3
                 WHERE Id = ?4;",
                params![item.grocery_list_id, item.product_id, item.amount, item.id],
            )?;
            Ok(())
        })
    }

    fn delete(&self, item: &GroceryListItem) -> RepoResult<()> {
        self.store.with_connection(|conn| {
            conn.execute(
                "DELETE FROM GroceryListItem WHERE Id = ?1;",
                params![item.id],
            )?;
            Ok(())
        })
    }
}

fn seed_statements() -> Vec<BatchStatement> {
    ITEM_SEEDS
        .iter()
        .map(|(id, grocery_list_id, product_id, amount)| BatchStatement {
            sql: ITEM_SEED_SQL,
            params: vec![
                Value::Integer(*id),
                Value::Integer(*grocery_list_id),
                Value::Integer(*product_id),
                Value::Integer(*amount),
            ],
        })
        .collect()
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<GroceryListItem> {
    Ok(GroceryListItem {
        id: row.get("Id")?,
        grocery_list_id: row.get("GroceryListId")?,
        product_id: row.get("ProductId")?,
        amount: row.get("Amount")?,
    })
}
