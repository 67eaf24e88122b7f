//! OHLCV price ingestion and trailing-window replay for backtests.
//!
//! A CSV price source is loaded once, all-or-nothing, into an immutable
//! [`PriceSeries`] ([`load_series`]). A [`WindowStream`] then replays the
//! series as overlapping [`Window`]s of the latest `n` records, one step per
//! [`advance`](WindowStream::advance), until it is exhausted.
//!
//! ```no_run
//! use quantedge_feed::{StreamConfig, WindowStream, load_series};
//! use std::num::NonZero;
//!
//! # fn main() -> Result<(), quantedge_feed::LoadError> {
//! let series = load_series("data/btcusdt-1h.csv")?;
//! let mut stream = WindowStream::new(series, StreamConfig::new(NonZero::new(20).unwrap()));
//!
//! while let Some(window) = stream.advance() {
//!     // window[0] is the oldest record, window.latest() the newest
//!     # let _ = window;
//! }
//! # Ok(())
//! # }
//! ```

mod column;
mod config;
mod error;
mod loader;
mod ohlcv;
mod price_record;
mod price_series;
mod window_stream;

pub use crate::column::Column;
pub use crate::config::{DEFAULT_WINDOW_LENGTH, StreamConfig, StreamConfigBuilder};
pub use crate::error::{LoadError, StreamError};
pub use crate::loader::{CsvSource, Rows, load_series, load_stream, parse_row, read_series};
pub use crate::ohlcv::{Ohlcv, Price};
pub use crate::price_record::PriceRecord;
pub use crate::price_series::PriceSeries;
pub use crate::window_stream::{Window, WindowStream};

#[cfg(test)]
mod test_util;
