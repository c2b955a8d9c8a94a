//! Replay feed — the market simulator and its snapshot wire format.
//!
//! The simulator owns every registered [`crate::domain::Security`] and
//! drives time forward one discrete tick per `advance` call:
//!
//! 1. Select the securities that have a bar at the current tick index
//! 2. Update each selected security's observed price to that bar's close
//! 3. Emit one tagged update per selected security
//! 4. Increment the tick, then serialize the updates as a JSON array
//!
//! There is no wall-clock pacing: callers pull ticks as fast as they like
//! and use `has_data` to detect exhaustion.

pub mod simulator;
pub mod snapshot;

pub use simulator::{FeedError, MarketSimulator};
pub use snapshot::{AggregateUpdate, EventType};
