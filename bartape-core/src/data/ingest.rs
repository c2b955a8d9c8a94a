//! CSV bar import with wire-contract headers.

use crate::domain::Bar;
use chrono::DateTime;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Structured error types for bar loading.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("csv read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("bad timestamp '{value}' at row {row}")]
    BadTimestamp { row: usize, value: String },

    #[error("insane bar at row {row}: {reason}")]
    InsaneBar { row: usize, reason: String },
}

/// One CSV row, column names matching the snapshot wire contract.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    open_price: f64,
    high_price: f64,
    low_price: f64,
    close_price: f64,
    volume: f64,
    timestamp: String,
}

/// Load a bar history from a headered CSV file.
///
/// Timestamps are accepted as epoch milliseconds or RFC 3339. Rows that
/// fail the OHLC sanity check are rejected here so the engine never sees
/// malformed data.
pub fn load_csv(path: &Path) -> Result<Vec<Bar>, DataError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut bars = Vec::new();
    for (row, record) in reader.deserialize::<CsvRow>().enumerate() {
        let record = record?;
        let timestamp =
            parse_timestamp(&record.timestamp).ok_or_else(|| DataError::BadTimestamp {
                row,
                value: record.timestamp.clone(),
            })?;
        let bar = Bar {
            open_price: record.open_price,
            high_price: record.high_price,
            low_price: record.low_price,
            close_price: record.close_price,
            volume: record.volume,
            timestamp,
        };
        if !bar.is_sane() {
            return Err(DataError::InsaneBar {
                row,
                reason: "OHLC ordering violated or non-positive price".into(),
            });
        }
        bars.push(bar);
    }
    Ok(bars)
}

fn parse_timestamp(value: &str) -> Option<i64> {
    if let Ok(millis) = value.parse::<i64>() {
        return Some(millis);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_epoch_and_rfc3339_timestamps() {
        let file = write_csv(
            "openPrice,highPrice,lowPrice,closePrice,volume,timestamp\n\
             100.0,105.0,98.0,103.0,50000,1704205800000\n\
             103.0,104.0,101.0,102.0,40000,2024-01-02T14:31:00+00:00\n",
        );

        let bars = load_csv(file.path()).unwrap();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].timestamp, 1_704_205_800_000);
        assert_eq!(bars[1].timestamp, 1_704_205_860_000);
        assert_eq!(bars[1].close_price, 102.0);
    }

    #[test]
    fn rejects_bad_timestamp() {
        let file = write_csv(
            "openPrice,highPrice,lowPrice,closePrice,volume,timestamp\n\
             100.0,105.0,98.0,103.0,50000,yesterday\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, DataError::BadTimestamp { row: 0, .. }));
    }

    #[test]
    fn rejects_insane_bar() {
        // High below low.
        let file = write_csv(
            "openPrice,highPrice,lowPrice,closePrice,volume,timestamp\n\
             100.0,95.0,98.0,103.0,50000,1704205800000\n",
        );

        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, DataError::InsaneBar { row: 0, .. }));
    }

    #[test]
    fn empty_file_yields_empty_history() {
        let file = write_csv("openPrice,highPrice,lowPrice,closePrice,volume,timestamp\n");
        let bars = load_csv(file.path()).unwrap();
        assert!(bars.is_empty());
    }
}
