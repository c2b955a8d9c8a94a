//! Bar sources — CSV import and synthetic generation.
//!
//! The simulator treats bars as opaque values; content validation happens
//! here, at the loading boundary, before anything is registered.

pub mod ingest;
pub mod synthetic;

pub use ingest::{load_csv, DataError};
pub use synthetic::synthetic_bars;
