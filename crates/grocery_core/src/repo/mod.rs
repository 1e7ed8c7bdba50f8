//! Repository layer: one component per table, built on the `Store`
//! capability.
//!
//! # Responsibility
//! - Translate between domain entities and persisted rows.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every query is parameterized; no value is spliced into SQL text.
//! - "Not found" is an absent result, never an error.
//! - Construction-time storage faults (table creation, seeding) are fatal.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::db::DbError;

pub mod grocery_list_item_repo;
pub mod product_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage fault or corrupt persisted state surfaced by a repository.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
