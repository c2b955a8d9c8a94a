//! Bar — the fundamental market data unit.

use serde::{Deserialize, Serialize};

/// OHLCV bar for a single security over one minute.
///
/// Serialized field names (`openPrice`, `closePrice`, ...) follow the
/// upstream aggregate wire format and are shared by loader input and
/// snapshot output. The simulator reads only `close_price`; every other
/// field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub volume: f64,
    /// Bar start time, epoch milliseconds.
    pub timestamp: i64,
}

impl Bar {
    /// Basic OHLC sanity check: high bounds the range, low bounds it from
    /// below, prices positive.
    ///
    /// The simulator never calls this; validation belongs to the loading
    /// layer.
    pub fn is_sane(&self) -> bool {
        self.high_price >= self.low_price
            && self.high_price >= self.open_price
            && self.high_price >= self.close_price
            && self.low_price <= self.open_price
            && self.low_price <= self.close_price
            && self.open_price > 0.0
            && self.close_price > 0.0
    }
}
