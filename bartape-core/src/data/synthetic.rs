//! Seeded synthetic minute bars for demos and tests.

use crate::domain::Bar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MINUTE_MILLIS: i64 = 60_000;

/// Generate a random-walk minute-bar history. Deterministic for a given
/// seed, and every bar passes [`Bar::is_sane`].
pub fn synthetic_bars(seed: u64, count: usize, start_price: f64, start_timestamp: i64) -> Vec<Bar> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut close = start_price;
    (0..count)
        .map(|i| {
            let open = close;
            let drift: f64 = rng.gen_range(-0.003..0.003);
            close = (open * (1.0 + drift)).max(0.01);
            let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.001));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.001));
            Bar {
                open_price: open,
                high_price: high,
                low_price: low,
                close_price: close,
                volume: rng.gen_range(1_000.0..50_000.0_f64).round(),
                timestamp: start_timestamp + i as i64 * MINUTE_MILLIS,
            }
        })
        .collect()
}
