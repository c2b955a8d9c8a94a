//! BarTape CLI — replay recorded or synthetic bar histories as a feed.
//!
//! Commands:
//! - `replay` — load `TICKER=path.csv` sources (or a TOML config) and
//!   stream one snapshot JSON array per line to stdout
//! - `synth` — generate a seeded synthetic universe and stream it
//!
//! stdout carries only snapshot payloads; the completion summary goes to
//! stderr so the stream stays machine-readable.

use anyhow::{bail, Context, Result};
use bartape_core::data::{load_csv, synthetic_bars};
use bartape_core::feed::MarketSimulator;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bartape", about = "BarTape CLI — historical market-data replay feed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay CSV bar histories as a snapshot-per-line feed.
    Replay {
        /// Sources as TICKER=path.csv pairs (e.g. AAPL=data/aapl.csv).
        sources: Vec<String>,

        /// TOML config file with [[securities]] entries (ticker, path).
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Replay a seeded synthetic universe.
    Synth {
        /// Tickers to generate.
        #[arg(long, value_delimiter = ',', default_value = "ALPHA,BRAVO")]
        symbols: Vec<String>,

        /// Bars per symbol. Defaults to one trading day of minutes.
        #[arg(long, default_value_t = 390)]
        bars: usize,

        /// RNG seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

/// TOML shape for `replay --config`.
#[derive(Debug, Deserialize)]
struct ReplayConfig {
    #[serde(default)]
    securities: Vec<SecuritySource>,
}

#[derive(Debug, Deserialize)]
struct SecuritySource {
    ticker: String,
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Replay { sources, config } => run_replay(sources, config),
        Commands::Synth {
            symbols,
            bars,
            seed,
        } => run_synth(symbols, bars, seed),
    }
}

fn run_replay(sources: Vec<String>, config: Option<PathBuf>) -> Result<()> {
    let mut entries = Vec::new();

    if let Some(path) = config {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let parsed: ReplayConfig =
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
        entries.extend(parsed.securities);
    }

    for source in sources {
        let Some((ticker, path)) = source.split_once('=') else {
            bail!("malformed source '{source}': expected TICKER=path.csv");
        };
        entries.push(SecuritySource {
            ticker: ticker.to_string(),
            path: PathBuf::from(path),
        });
    }

    if entries.is_empty() {
        bail!("no securities: pass TICKER=path.csv sources or --config");
    }

    let mut feed = MarketSimulator::new();
    for entry in entries {
        let bars = load_csv(&entry.path)
            .with_context(|| format!("loading {} for {}", entry.path.display(), entry.ticker))?;
        feed.register(entry.ticker, bars)?;
    }

    drain(&mut feed)
}

fn run_synth(symbols: Vec<String>, bars: usize, seed: u64) -> Result<()> {
    if symbols.is_empty() {
        bail!("no symbols to generate");
    }

    let mut feed = MarketSimulator::new();
    for (i, symbol) in symbols.into_iter().enumerate() {
        let history = synthetic_bars(
            seed.wrapping_add(i as u64),
            bars,
            50.0 + i as f64 * 25.0,
            0,
        );
        feed.register(symbol, history)?;
    }

    drain(&mut feed)
}

/// Pull snapshots until exhaustion, one JSON array per stdout line.
fn drain(feed: &mut MarketSimulator) -> Result<()> {
    let mut ticks = 0usize;
    while feed.has_data() {
        println!("{}", feed.advance()?);
        ticks += 1;
    }
    eprintln!(
        "replay complete: {ticks} ticks across {} securities",
        feed.security_count()
    );
    Ok(())
}
