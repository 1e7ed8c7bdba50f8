//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Own the `Product` table: creation, idempotent seeding and CRUD.
//! - Normalize stored dates back to date-only and keep prices exact.
//!
//! # Invariants
//! - Read paths reject corrupt persisted values instead of masking them.
//! - Updating or deleting an unknown id is a silent no-op.

use crate::db::{BatchStatement, Store};
use crate::model::product::{Product, ProductId};
use crate::repo::{RepoError, RepoResult};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, Row};
use rust_decimal::Decimal;

// ShelfLife may physically carry a time component; date() strips it.
// Price is surfaced as text so the decimal parses without touching f64.
const PRODUCT_SELECT_SQL: &str = "SELECT
    Id,
    Name,
    Stock,
    date(ShelfLife) AS ShelfLife,
    CAST(Price AS TEXT) AS Price
FROM Product";

const CREATE_PRODUCT_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS Product (
    Id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL,
    Stock INTEGER NOT NULL,
    ShelfLife DATE NOT NULL,
    Price DECIMAL(10,2) NOT NULL
);";

const PRODUCT_SEED_SQL: &str = "INSERT INTO Product (Id, Name, Stock, ShelfLife, Price)
 VALUES (?1, ?2, ?3, ?4, ?5)
 ON CONFLICT(Id) DO NOTHING;";

const PRODUCT_SEEDS: &[(i64, &str, i64, &str, &str)] = &[
    (1, "Melk", 300, "2025-09-25", "0.95"),
    (2, "Kaas", 100, "2025-09-30", "7.98"),
    (3, "Brood", 400, "2025-09-12", "2.19"),
    (4, "Cornflakes", 0, "2025-12-31", "1.48"),
];

/// Repository interface for product CRUD operations.
pub trait ProductRepository {
    /// Returns every product in store scan order.
    fn get_all(&self) -> RepoResult<Vec<Product>>;
    /// Gets one product by id; `None` when no row matches.
    fn get(&self, id: ProductId) -> RepoResult<Option<Product>>;
    /// Inserts a new row, assigns the store id in place and returns it.
    fn add(&self, product: &mut Product) -> RepoResult<ProductId>;
    /// Overwrites the row matching `product.id`; no-op when absent.
    fn update(&self, product: &Product) -> RepoResult<()>;
    /// Removes the row matching `product.id`; no-op when absent.
    fn delete(&self, product: &Product) -> RepoResult<()>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'store> {
    store: &'store Store,
}

impl<'store> SqliteProductRepository<'store> {
    /// Ensures the `Product` table exists and seeds the baseline rows.
    ///
    /// Seeding runs in one transaction with conflict-ignore semantics, so
    /// repeated construction never duplicates or overwrites existing rows.
    pub fn try_new(store: &'store Store) -> RepoResult<Self> {
        store.create_table(CREATE_PRODUCT_TABLE_SQL)?;
        store.run_batch(&seed_statements())?;
        Ok(Self { store })
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Product>> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{PRODUCT_SELECT_SQL};"))?;
            let mut rows = stmt.query([])?;
            let mut products = Vec::new();
            while let Some(row) = rows.next()? {
                products.push(parse_product_row(row)?);
            }
            Ok(products)
        })
    }

    fn get(&self, id: ProductId) -> RepoResult<Option<Product>> {
        self.store.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{PRODUCT_SELECT_SQL} WHERE Id = ?1;"))?;
            let mut rows = stmt.query(params![id])?;
            if let Some(row) = rows.next()? {
                return Ok(Some(parse_product_row(row)?));
            }
            Ok(None)
        })
    }

    fn add(&self, product: &mut Product) -> RepoResult<ProductId> {
        let id = self.store.with_connection(|conn| {
            let id: i64 = conn.query_row(
                "INSERT INTO Product (Name, Stock, ShelfLife, Price)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING Id;",
                params![
                    product.name.as_str(),
                    product.stock,
                    product.shelf_life.format("%Y-%m-%d").to_string(),
                    product.price.to_string(),
                ],
                |row| row.get(0),
            )?;
            Ok::<_, RepoError>(id)
        })?;

        product.id = id;
        Ok(id)
    }

    fn update(&self, product: &Product) -> RepoResult<()> {
        self.store.with_connection(|conn| {
            // Affected-row count is intentionally not inspected: a missing
            // id is treated as success, so callers cannot detect "nothing
            // changed" through an error.
            conn.execute(
                "UPDATE Product
                 SET Name = ?1, Stock = ?2, ShelfLife = ?3, Price = ?4
                 WHERE Id = ?5;",
                params![
                    product.name.as_str(),
                    product.stock,
                    product.shelf_life.format("%Y-%m-%d").to_string(),
                    product.price.to_string(),
                    product.id,
                ],
            )?;
            Ok(())
        })
    }

    fn delete(&self, product: &Product) -> RepoResult<()> {
        self.store.with_connection(|conn| {
            conn.execute("DELETE FROM Product WHERE Id = ?1;", params![product.id])?;
            Ok(())
        })
    }
}

fn seed_statements() -> Vec<BatchStatement> {
    PRODUCT_SEEDS
        .iter()
        .map(|(id, name, stock, shelf_life, price)| BatchStatement {
            sql: PRODUCT_SEED_SQL,
            params: vec![
                Value::Integer(*id),
                Value::Text((*name).to_string()),
                Value::Integer(*stock),
                Value::Text((*shelf_life).to_string()),
                Value::Text((*price).to_string()),
            ],
        })
        .collect()
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    let shelf_life_text: String = row.get("ShelfLife")?;
    let shelf_life = NaiveDate::parse_from_str(&shelf_life_text, "%Y-%m-%d").map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date value `{shelf_life_text}` in Product.ShelfLife"
        ))
    })?;

    let price_text: String = row.get("Price")?;
    let price = price_text.parse::<Decimal>().map_err(|_| {
        RepoError::InvalidData(format!("invalid price value `{price_text}` in Product.Price"))
    })?;

    Ok(Product {
        id: row.get("Id")?,
        name: row.get("Name")?,
        stock: row.get("Stock")?,
        shelf_life,
        price,
    })
}
