//! BarTape Core — historical market-data replay engine.
//!
//! This crate contains the heart of the replay feed:
//! - Domain types (bars, securities)
//! - Tick-by-tick market simulator with snapshot serialization
//! - Bar sources (CSV import, synthetic generation)

pub mod data;
pub mod domain;
pub mod feed;
