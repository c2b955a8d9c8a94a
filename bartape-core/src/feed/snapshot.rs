//! Snapshot wire format for per-tick updates.

use crate::domain::Bar;
use serde::{Deserialize, Serialize};

/// Event-type tag carried by every snapshot entry.
///
/// `"AM"` is the upstream push-feed tag for minute aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "AM")]
    MinuteAggregate,
}

/// One security's update at a single tick: the bar at that index with the
/// event tag and ticker spliced in alongside the bar's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateUpdate {
    #[serde(flatten)]
    pub bar: Bar,
    pub ev: EventType,
    pub sym: String,
}
