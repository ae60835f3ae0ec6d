//! # beacon-net
//!
//! Network-facing helpers for the Beacon SDK: a pure classifier that
//! folds transport-layer failures into a coarse error taxonomy with
//! stable numeric codes, and the ISO-8601 date decoding used for API
//! payloads.
//!
//! Both modules are stateless and independent of the storage core.

pub mod classify;
pub mod coders;

// ── re-exports ───────────────────────────────────────────────────────

pub use classify::{CategorisedNetworkError, ConnectionFailure, TransportFailure, classify};
pub use coders::{DateParseError, parse_date};
