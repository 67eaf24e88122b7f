// src/test_util.rs

use crate::{PriceRecord, PriceSeries};

pub fn record(open: f64, high: f64, low: f64, close: f64, volume: f64) -> PriceRecord {
    PriceRecord::new(open, high, low, close, volume)
}

/// Convenience: record with OHLC all equal to `close` and unit volume.
pub fn rec(close: f64) -> PriceRecord {
    record(close, close, close, close, 1.0)
}

/// Series of [`rec`] records, one per close price.
pub fn series_of(closes: &[f64]) -> PriceSeries {
    closes.iter().copied().map(rec).collect()
}
