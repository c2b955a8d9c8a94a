//! Security — one ticker's bar history and its last observed price.

use crate::domain::Bar;

/// Immutable identity and bar history for a single security, plus the one
/// mutable field the simulator maintains: the close of the most recently
/// consumed bar.
#[derive(Debug, Clone)]
pub struct Security {
    ticker: String,
    bars: Vec<Bar>,
    current_price: Option<f64>,
}

impl Security {
    /// A freshly registered security has no observed price until the first
    /// tick at which it contributes a bar.
    pub fn new(ticker: impl Into<String>, bars: Vec<Bar>) -> Self {
        Self {
            ticker: ticker.into(),
            bars,
            current_price: None,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Bar at a tick offset, or `None` past the end of this security's
    /// history. Out-of-range lookups are a normal part of the replay loop,
    /// not an error.
    pub fn bar(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    /// Close of the most recently consumed bar. `None` until the first tick
    /// that produced data for this security; frozen at the last available
    /// close once its history is exhausted.
    pub fn current_price(&self) -> Option<f64> {
        self.current_price
    }

    pub(crate) fn record_close(&mut self, price: f64) {
        self.current_price = Some(price);
    }
}
