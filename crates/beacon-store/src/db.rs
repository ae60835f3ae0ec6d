//! SQLite client with scoped statement execution.
//!
//! The [`SqliteClient`] owns one `rusqlite::Connection` opened in
//! serialized (full-mutex) mode and exposes a single entry point:
//! prepare a statement, run a caller-supplied closure against it, and
//! finalize the native handle on every exit path. The closure works
//! through a [`StatementExecutor`], so the prepared statement never
//! escapes its scope.

use std::ffi::CString;
use std::path::Path;
use std::ptr;
use std::sync::{Mutex, PoisonError};

use rusqlite::{Connection, OpenFlags, ffi};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::statement::{FinalizeGuard, StatementExecutor};

/// Thread-safe handle to one on-disk SQLite database.
///
/// The connection is opened once at construction and closed implicitly
/// when the client is dropped. The engine serializes concurrent calls
/// (full-mutex open mode); the `Mutex` mirrors that contract on the Rust
/// side so the client is `Send + Sync`. This layer adds no queueing or
/// async dispatch and no retry or timeout policy. Every call blocks
/// until the engine responds; anything else belongs to the caller.
///
/// # Example
///
/// ```ignore
/// let client = SqliteClient::open("data/events.db")?;
/// client.execute_statement("CREATE TABLE IF NOT EXISTS events (k BLOB PRIMARY KEY, v BLOB)")?;
///
/// client.execute("INSERT INTO events (k, v) VALUES (?, ?)", |executor| {
///     executor.bind_row(&BlobRow::new(key, value))?;
///     executor.run_step()
/// })?;
/// ```
#[derive(Debug)]
pub struct SqliteClient {
    conn: Mutex<Connection>,
}

impl SqliteClient {
    /// Open (or create) the database file at `path`.
    ///
    /// The file is opened read-write-create in serialized mode, so the
    /// native engine guards a shared handle against concurrent-call data
    /// races internally. Fails immediately, without retry, with
    /// [`StoreError::DatabaseCantBeOpen`] if the engine reports anything
    /// but success.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "opening database");

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_FULL_MUTEX;

        let conn = Connection::open_with_flags(path, flags)
            .map_err(|_| StoreError::DatabaseCantBeOpen)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `sql` to completion and discard the result.
    ///
    /// For DDL and parameterless mutations.
    pub fn execute_statement(&self, sql: &str) -> StoreResult<()> {
        self.execute(sql, |executor| executor.run_step())
    }

    /// Prepare `sql`, run `body` against it, and finalize the statement.
    ///
    /// A failed prepare (malformed SQL, a missing table or column)
    /// surfaces as [`StoreError::StatementPreparationFailed`]. Whatever
    /// `body` returns, value or error, is propagated unchanged after the
    /// native statement handle has been released; finalization runs on
    /// every exit path.
    pub fn execute<T, F>(&self, sql: &str, body: F) -> StoreResult<T>
    where
        F: FnOnce(&mut StatementExecutor<'_>) -> StoreResult<T>,
    {
        debug!(sql, "preparing statement");

        let conn = self.conn.lock().unwrap_or_else(PoisonError::into_inner);

        let sql = CString::new(sql).map_err(|_| StoreError::StatementPreparationFailed)?;
        let mut stmt: *mut ffi::sqlite3_stmt = ptr::null_mut();

        let rc = unsafe {
            ffi::sqlite3_prepare_v2(conn.handle(), sql.as_ptr(), -1, &mut stmt, ptr::null_mut())
        };

        if rc != ffi::SQLITE_OK || stmt.is_null() {
            return Err(StoreError::StatementPreparationFailed);
        }

        // Finalizes when it leaves scope, after the executor is gone.
        let _guard = FinalizeGuard::new(stmt);
        let mut executor = StatementExecutor::new(stmt, &conn);

        body(&mut executor)
    }
}

// ── tests ────────────────────────────────────────────────────────────
