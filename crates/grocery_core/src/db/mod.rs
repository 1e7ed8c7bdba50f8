//! SQLite storage capability for the grocery core.
//!
//! # Responsibility
//! - Own connection lifecycle for file and in-memory stores.
//! - Expose the schema-creation and transactional-batch primitives that
//!   repositories are built on.
//!
//! # Invariants
//! - A connection is owned by exactly one operation and is closed on every
//!   exit path.
//! - Batch execution is all-or-nothing.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod store;

pub use store::{BatchStatement, Store};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
