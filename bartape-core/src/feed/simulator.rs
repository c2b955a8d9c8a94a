//! Market simulator — discrete time-stepped replay of registered bar
//! histories.

use crate::domain::{Bar, Security, Ticker};
use crate::feed::snapshot::{AggregateUpdate, EventType};
use std::collections::HashMap;
use thiserror::Error;

/// Structured errors surfaced by the simulator.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("ticker must be non-empty")]
    EmptyTicker,

    #[error("unknown ticker: {ticker}")]
    UnknownTicker { ticker: String },

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Replays historical per-minute bars for a set of securities as a
/// discrete feed, one logical tick per `advance` call.
///
/// The simulator is a pure in-memory state machine: no I/O, no pacing, no
/// interior locking. A caller sharing one instance across tasks must
/// serialize access itself.
pub struct MarketSimulator {
    securities: HashMap<Ticker, Security>,
    /// Index of the next bar to consume.
    tick: usize,
    /// Longest bar history across all ever-registered securities.
    /// Monotonic: re-registering with a shorter history never lowers it.
    horizon: usize,
}

impl MarketSimulator {
    pub fn new() -> Self {
        Self {
            securities: HashMap::new(),
            tick: 0,
            horizon: 0,
        }
    }

    /// Register a security under its ticker.
    ///
    /// Re-registering a ticker replaces the prior record wholesale,
    /// including its observed price (last write wins). An empty bar
    /// history is accepted; such a security simply never contributes to a
    /// snapshot.
    pub fn register(
        &mut self,
        ticker: impl Into<String>,
        bars: Vec<Bar>,
    ) -> Result<(), FeedError> {
        let ticker = ticker.into();
        if ticker.is_empty() {
            return Err(FeedError::EmptyTicker);
        }
        self.horizon = self.horizon.max(bars.len());
        self.securities
            .insert(ticker.clone(), Security::new(ticker, bars));
        Ok(())
    }

    /// Consume one tick: update the observed price of every security that
    /// has a bar at the current index and return the serialized snapshot.
    ///
    /// Securities without a bar at this index are omitted from the payload,
    /// never padded with stale data. The tick advances by exactly one per
    /// call regardless of how many securities contributed. Advancing past
    /// exhaustion is permitted and yields an empty array; `has_data` is the
    /// caller's gate, not an internal guard.
    pub fn advance(&mut self) -> Result<String, FeedError> {
        let t = self.tick;
        let mut updates = Vec::new();
        for security in self.securities.values_mut() {
            let Some(bar) = security.bar(t).cloned() else {
                continue;
            };
            security.record_close(bar.close_price);
            updates.push(AggregateUpdate {
                bar,
                ev: EventType::MinuteAggregate,
                sym: security.ticker().to_string(),
            });
        }
        self.tick += 1;
        Ok(serde_json::to_string(&updates)?)
    }

    /// True while at least one registered security still has an unconsumed
    /// bar.
    pub fn has_data(&self) -> bool {
        self.tick < self.horizon
    }

    /// Last observed close for a ticker.
    ///
    /// `Ok(None)` means the security is registered but no tick has produced
    /// data for it yet — a legitimate state, distinct from the
    /// `UnknownTicker` error for a ticker that was never registered.
    pub fn price(&self, ticker: &str) -> Result<Option<f64>, FeedError> {
        self.securities
            .get(ticker)
            .map(Security::current_price)
            .ok_or_else(|| FeedError::UnknownTicker {
                ticker: ticker.to_string(),
            })
    }

    /// Index of the next bar to consume.
    pub fn tick(&self) -> usize {
        self.tick
    }

    /// Longest bar history across all ever-registered securities.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn security(&self, ticker: &str) -> Option<&Security> {
        self.securities.get(ticker)
    }

    /// Registered tickers, in no particular order.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.securities.keys().map(String::as_str)
    }

    pub fn security_count(&self) -> usize {
        self.securities.len()
    }
}

impl Default for MarketSimulator {
    fn default() -> Self {
        Self::new()
    }
}
