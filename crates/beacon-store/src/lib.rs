//! # beacon-store
//!
//! SQLite persistence core for the Beacon SDK.
//!
//! Sits directly on the engine's low-level statement API: one client
//! owns one serialized-mode connection, prepares and finalizes
//! statements with guaranteed cleanup, and moves data through a typed
//! two-column binding protocol (blob/blob, blob/integer) so call sites
//! never touch native buffers themselves.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  SqliteClient   (connection, scoped execute)  │
//! ├──────────────────────────────────────────────┤
//! │  StatementExecutor  (step / bind / extract)   │
//! ├──────────────────────────────────────────────┤
//! │  Bindable + Row     (blob, i64 marshalling)   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Quick start
//!
//! ```ignore
//! use beacon_store::{BlobRow, SqliteClient};
//!
//! let client = SqliteClient::open("data/events.db")?;
//! client.execute_statement("CREATE TABLE IF NOT EXISTS events (k BLOB PRIMARY KEY, v BLOB)")?;
//!
//! client.execute("INSERT INTO events (k, v) VALUES (?, ?)", |executor| {
//!     executor.bind_row(&BlobRow::new(key, value))?;
//!     executor.run_step()
//! })?;
//!
//! let stored: Option<BlobRow> = client.execute("SELECT k, v FROM events", |executor| {
//!     executor.run_query();
//!     Ok(executor.extract_row())
//! })?;
//! ```

pub mod db;
pub mod error;
pub mod row;
pub mod statement;

// ── re-exports ───────────────────────────────────────────────────────

pub use db::SqliteClient;
pub use error::{StoreError, StoreResult};
pub use row::{Bindable, BlobIntRow, BlobRow, Row};
pub use statement::StatementExecutor;
