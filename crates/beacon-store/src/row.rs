//! The binding protocol and the two-column row codec.
//!
//! [`Bindable`] is the capability contract a storable column type
//! implements: decode itself from a result column, encode itself into a
//! bound parameter. [`Row`] pairs two bindable values in column order
//! and is the unit of write/read for the whole layer.

use std::ffi::{c_int, c_void};

use rusqlite::ffi;

use crate::error::{StoreError, StoreResult};
use crate::statement::StatementExecutor;

// ---------------------------------------------------------------------------
// Binding protocol
// ---------------------------------------------------------------------------

/// A value with a defined mapping to and from a native statement's
/// columns and parameters.
///
/// Indices follow SQLite's conventions: result columns are zero-based,
/// bound parameters are one-based. Decoding a null or unreadable column
/// yields `None`, never an error; callers must not conflate absence with
/// failure. Encoding always hands SQLite its own copy of the bytes
/// (`SQLITE_TRANSIENT`), so the engine never retains a reference into
/// caller-owned memory past the call.
pub trait Bindable: Sized {
    /// Decode a value from the result column at `index` (zero-based).
    fn column(executor: &StatementExecutor<'_>, index: c_int) -> Option<Self>;

    /// Encode this value into the bound parameter at `index` (one-based).
    fn bind(&self, executor: &StatementExecutor<'_>, index: c_int) -> StoreResult<()>;
}

/// Encode `bytes` into the bound parameter at `index` as a BLOB,
/// copying into the engine.
pub(crate) fn bind_blob(
    executor: &StatementExecutor<'_>,
    index: c_int,
    bytes: &[u8],
) -> StoreResult<()> {
    let stmt = executor.raw();

    let rc = unsafe {
        if bytes.is_empty() {
            // A null data pointer would bind SQL NULL; bind a true
            // zero-length blob instead so empty payloads round-trip.
            ffi::sqlite3_bind_zeroblob(stmt, index, 0)
        } else {
            ffi::sqlite3_bind_blob(
                stmt,
                index,
                bytes.as_ptr().cast::<c_void>(),
                bytes.len() as c_int,
                ffi::SQLITE_TRANSIENT(),
            )
        }
    };

    if rc == ffi::SQLITE_OK {
        Ok(())
    } else {
        Err(StoreError::QueryFailed)
    }
}

/// Opaque binary payload, stored as a native BLOB.
impl Bindable for Vec<u8> {
    fn column(executor: &StatementExecutor<'_>, index: c_int) -> Option<Self> {
        let stmt = executor.raw();

        unsafe {
            if ffi::sqlite3_column_type(stmt, index) == ffi::SQLITE_NULL {
                return None;
            }

            let pointer = ffi::sqlite3_column_blob(stmt, index);
            let length = ffi::sqlite3_column_bytes(stmt, index);

            if pointer.is_null() {
                // SQLite returns a null pointer for zero-length blobs.
                (length == 0).then(Vec::new)
            } else {
                Some(std::slice::from_raw_parts(pointer.cast::<u8>(), length as usize).to_vec())
            }
        }
    }

    fn bind(&self, executor: &StatementExecutor<'_>, index: c_int) -> StoreResult<()> {
        bind_blob(executor, index, self)
    }
}

/// 64-bit signed integer, stored as a native INTEGER. Exact width, no
/// range coercion.
impl Bindable for i64 {
    fn column(executor: &StatementExecutor<'_>, index: c_int) -> Option<Self> {
        let stmt = executor.raw();

        unsafe {
            if ffi::sqlite3_column_type(stmt, index) == ffi::SQLITE_NULL {
                return None;
            }

            Some(ffi::sqlite3_column_int64(stmt, index))
        }
    }

    fn bind(&self, executor: &StatementExecutor<'_>, index: c_int) -> StoreResult<()> {
        let rc = unsafe { ffi::sqlite3_bind_int64(executor.raw(), index, *self) };

        if rc == ffi::SQLITE_OK {
            Ok(())
        } else {
            Err(StoreError::QueryFailed)
        }
    }
}

// ---------------------------------------------------------------------------
// Row codec
// ---------------------------------------------------------------------------

/// A two-column row, parameterized over any two bindable types in column
/// order: `first` is column 0, `second` is column 1.
///
/// Rows own plain copies of their data: the bytes are copied out of
/// native buffers before the statement is finalized and never alias
/// statement-owned memory. Used both as the bind source for mutation
/// parameter lists and as the decode target for SELECT result rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<A, B> {
    /// Column 0.
    pub first: A,
    /// Column 1.
    pub second: B,
}

impl<A: Bindable, B: Bindable> Row<A, B> {
    /// Pair two values into a row.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

/// Pure key/value pair of binary payloads.
pub type BlobRow = Row<Vec<u8>, Vec<u8>>;

/// Binary key paired with an integer value.
pub type BlobIntRow = Row<Vec<u8>, i64>;
