//! Scoped execution surface over one live prepared statement.
//!
//! A [`StatementExecutor`] is only ever handed to the closure passed to
//! [`SqliteClient::execute`](crate::db::SqliteClient::execute) and is
//! valid for exactly that scope. Finalization is not its job: the owning
//! client releases the native handle on every exit path, so the executor
//! can never be used after finalize by construction.

use std::marker::PhantomData;

use rusqlite::{Connection, ffi};

use crate::error::{StoreError, StoreResult};
use crate::row::{Bindable, Row};

/// Executes one prepared statement: step, bind, extract.
///
/// Per-instance state machine: created → (optional bind) → stepped
/// (done or row available) → extracted, repeatable while rows remain.
/// All operations block the calling thread until the engine responds.
pub struct StatementExecutor<'conn> {
    stmt: *mut ffi::sqlite3_stmt,
    _conn: PhantomData<&'conn Connection>,
}

impl<'conn> StatementExecutor<'conn> {
    pub(crate) fn new(stmt: *mut ffi::sqlite3_stmt, _conn: &'conn Connection) -> Self {
        Self {
            stmt,
            _conn: PhantomData,
        }
    }

    /// The underlying statement handle, for the binding protocol.
    pub(crate) fn raw(&self) -> *mut ffi::sqlite3_stmt {
        self.stmt
    }

    /// Advance the statement once, expecting full completion.
    ///
    /// For INSERT/UPDATE/DELETE and DDL. Any other status, including an
    /// unexpected result row, is a [`StoreError::StepExecutionFailed`].
    pub fn run_step(&mut self) -> StoreResult<()> {
        match unsafe { ffi::sqlite3_step(self.stmt) } {
            ffi::SQLITE_DONE => Ok(()),
            _ => Err(StoreError::StepExecutionFailed),
        }
    }

    /// Advance the statement once and report whether a result row is now
    /// available.
    ///
    /// Returns `false` when the result set is exhausted; exhaustion is a
    /// normal outcome, not an error.
    pub fn run_query(&mut self) -> bool {
        unsafe { ffi::sqlite3_step(self.stmt) == ffi::SQLITE_ROW }
    }

    /// Encode both columns of `row` into bound parameters 1 and 2.
    ///
    /// Call before the first [`run_step`](Self::run_step) or
    /// [`run_query`](Self::run_query).
    pub fn bind_row<A: Bindable, B: Bindable>(&mut self, row: &Row<A, B>) -> StoreResult<()> {
        row.first.bind(self, 1)?;
        row.second.bind(self, 2)
    }

    /// Encode a single byte buffer into bound parameter 1, for
    /// one-parameter statements such as delete-by-key.
    pub fn bind_value(&mut self, value: &[u8]) -> StoreResult<()> {
        crate::row::bind_blob(self, 1, value)
    }

    /// Decode both result columns at the current row.
    ///
    /// Returns `None` as soon as either column is null or unreadable.
    /// `None` is the "no row" signal, distinct from an engine error.
    pub fn extract_row<A: Bindable, B: Bindable>(&self) -> Option<Row<A, B>> {
        let first = A::column(self, 0)?;
        let second = B::column(self, 1)?;

        Some(Row { first, second })
    }
}

/// Releases the native statement handle when dropped.
///
/// Created by the client right after a successful prepare, before the
/// caller's closure runs, so the handle is finalized exactly once on
/// every exit path, including panics.
pub(crate) struct FinalizeGuard(*mut ffi::sqlite3_stmt);

impl FinalizeGuard {
    pub(crate) fn new(stmt: *mut ffi::sqlite3_stmt) -> Self {
        Self(stmt)
    }
}

impl Drop for FinalizeGuard {
    fn drop(&mut self) {
        unsafe {
            ffi::sqlite3_finalize(self.0);
        }
    }
}
