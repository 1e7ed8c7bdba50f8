//! Store capability object.
//!
//! # Responsibility
//! - Open a fresh connection per operation and guarantee its release.
//! - Provide idempotent table creation and all-or-nothing batch inserts.
//!
//! # Invariants
//! - File stores never retain a connection between operations.
//! - An in-memory store stays alive for the lifetime of the `Store` value
//!   while per-operation connections come and go.
//! - `run_batch` commits either every statement or none.

use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

static MEMORY_STORE_SEQ: AtomicU64 = AtomicU64::new(0);

/// One parameterized statement inside a transactional batch.
#[derive(Debug, Clone)]
pub struct BatchStatement {
    pub sql: &'static str,
    pub params: Vec<Value>,
}

enum StoreKind {
    File(PathBuf),
    Memory {
        uri: String,
        // Pins the shared-cache database: SQLite drops an in-memory
        // database when its last connection closes.
        _keepalive: Connection,
    },
}

/// Capability handle injected into every repository.
///
/// Repositories hold a `&Store` instead of inheriting connection plumbing;
/// each call acquires its own connection through [`Store::with_connection`].
pub struct Store {
    kind: StoreKind,
}

impl Store {
    /// Opens a file-backed store, creating the database file if absent.
    ///
    /// # Side effects
    /// - Verifies the path is reachable by opening a connection once.
    /// - Emits `store_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let started_at = Instant::now();
        info!("event=store_open module=db status=start mode=file");

        match Connection::open(path.as_ref()) {
            Ok(_) => {
                info!(
                    "event=store_open module=db status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self {
                    kind: StoreKind::File(path.as_ref().to_path_buf()),
                })
            }
            Err(err) => {
                error!(
                    "event=store_open module=db status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Opens a private in-memory store.
    ///
    /// Every call returns an isolated database; data lives as long as the
    /// returned `Store` value.
    pub fn in_memory() -> DbResult<Self> {
        let seq = MEMORY_STORE_SEQ.fetch_add(1, Ordering::Relaxed);
        let uri = format!(
            "file:grocery-mem-{}-{seq}?mode=memory&cache=shared",
            std::process::id()
        );
        let keepalive = open_shared_uri(&uri)?;
        info!("event=store_open module=db status=ok mode=memory");
        Ok(Self {
            kind: StoreKind::Memory {
                uri,
                _keepalive: keepalive,
            },
        })
    }

    /// Executes an idempotent `CREATE TABLE IF NOT EXISTS` statement.
    ///
    /// Malformed DDL or an unreachable store propagates as a storage fault
    /// and is fatal to repository construction.
    pub fn create_table(&self, ddl: &str) -> DbResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(ddl)?;
        Ok(())
    }

    /// Runs `op` against a freshly opened connection.
    ///
    /// The connection is closed on every exit path, including when `op`
    /// fails midway through reading rows.
    pub fn with_connection<T, E>(&self, op: impl FnOnce(&Connection) -> Result<T, E>) -> Result<T, E>
    where
        E: From<DbError>,
    {
        let conn = self.connect()?;
        op(&conn)
    }

    /// Executes every statement inside a single transaction.
    ///
    /// Commits only when all statements succeed; the first failure rolls
    /// the whole batch back and propagates, so no partial state is ever
    /// visible. Safe to retry with idempotent statements.
    pub fn run_batch(&self, statements: &[BatchStatement]) -> DbResult<()> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        for statement in statements {
            tx.execute(statement.sql, params_from_iter(statement.params.iter()))?;
        }
        tx.commit()?;
        info!(
            "event=run_batch module=db status=ok statements={}",
            statements.len()
        );
        Ok(())
    }

    fn connect(&self) -> DbResult<Connection> {
        let conn = match &self.kind {
            StoreKind::File(path) => Connection::open(path)?,
            StoreKind::Memory { uri, .. } => open_shared_uri(uri)?,
        };
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

fn open_shared_uri(uri: &str) -> DbResult<Connection> {
    let conn = Connection::open_with_flags(
        uri,
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI,
    )?;
    Ok(conn)
}
