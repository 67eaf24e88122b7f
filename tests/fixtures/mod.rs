#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use proptest::prelude::*;
use quantedge_feed::PriceRecord;
use serde::{Deserialize, de::DeserializeOwned};
use tempfile::TempDir;

/// OHLCV bar parsed from the Binance fixture through serde.
///
/// Read independently of the crate's loader so the two can be compared.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl From<&RefBar> for PriceRecord {
    fn from(bar: &RefBar) -> Self {
        PriceRecord::new(bar.open, bar.high, bar.low, bar.close, bar.volume)
    }
}

pub const OHLCV_PATH: &str = "tests/fixtures/data/btcusdt-1h.csv";

/// Load reference OHLCV bars from Binance.
pub fn load_reference_ohlcvs() -> Vec<RefBar> {
    load_records(OHLCV_PATH, "invalid OHLCV record")
}

/// Writes `contents` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard is dropped.
pub fn write_source(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write price source");
    (dir, path)
}

/// Renders records as a CSV document with the canonical header.
pub fn render_csv(records: &[PriceRecord]) -> String {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(["open", "high", "low", "close", "volume"])
        .expect("write header");
    for record in records {
        writer.serialize(record).expect("serialize record");
    }
    String::from_utf8(writer.into_inner().expect("flush csv")).expect("utf-8 csv")
}

/// Reads a rendered CSV document back through serde, bypassing the loader.
pub fn deserialize_csv(csv: &str) -> Vec<PriceRecord> {
    let mut rdr = csv::Reader::from_reader(csv.as_bytes());
    rdr.deserialize().map(|r| r.expect("invalid price record")).collect()
}

/// Arbitrary finite records, negative values included.
pub fn price_record() -> impl Strategy<Value = PriceRecord> {
    (
        -1.0e6f64..1.0e6,
        -1.0e6f64..1.0e6,
        -1.0e6f64..1.0e6,
        -1.0e6f64..1.0e6,
        0.0f64..1.0e9,
    )
        .prop_map(|(o, h, l, c, v)| PriceRecord::new(o, h, l, c, v))
}

pub fn price_records(max_len: usize) -> impl Strategy<Value = Vec<PriceRecord>> {
    prop::collection::vec(price_record(), 0..=max_len)
}

fn load_records<D>(path: impl AsRef<Path>, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let path = path.as_ref();
    let mut rdr = csv::Reader::from_path(path)
        .unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
