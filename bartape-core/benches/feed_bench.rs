//! Criterion benchmarks for the replay hot path.
//!
//! Benchmarks:
//! 1. Full feed drain (register + advance to exhaustion), single symbol
//! 2. Multi-symbol drain (the realistic case)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bartape_core::data::synthetic_bars;
use bartape_core::domain::Bar;
use bartape_core::feed::MarketSimulator;

fn make_universe(num_symbols: usize, bar_count: usize) -> Vec<(String, Vec<Bar>)> {
    (0..num_symbols)
        .map(|i| {
            (
                format!("SYM{i}"),
                synthetic_bars(i as u64, bar_count, 100.0 + i as f64 * 10.0, 0),
            )
        })
        .collect()
}

fn drain(universe: &[(String, Vec<Bar>)]) -> usize {
    let mut feed = MarketSimulator::new();
    for (ticker, bars) in universe {
        feed.register(ticker.clone(), bars.clone()).unwrap();
    }
    let mut payload_bytes = 0;
    while feed.has_data() {
        payload_bytes += feed.advance().unwrap().len();
    }
    payload_bytes
}

fn bench_single_symbol_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_drain");

    for &bar_count in &[390, 1_950, 9_750] {
        let universe = make_universe(1, bar_count);
        group.bench_with_input(
            BenchmarkId::new("single_symbol", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| drain(black_box(&universe)));
            },
        );
    }

    group.finish();
}

fn bench_multi_symbol_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_drain_multi");

    // One trading day of minute bars across a growing universe.
    for &num_symbols in &[10, 50, 100] {
        let universe = make_universe(num_symbols, 390);
        group.bench_with_input(
            BenchmarkId::new("symbols_390_bars", num_symbols),
            &num_symbols,
            |b, _| {
                b.iter(|| drain(black_box(&universe)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_symbol_drain, bench_multi_symbol_drain);
criterion_main!(benches);
