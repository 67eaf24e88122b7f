use serde::{Deserialize, Serialize};

use crate::{Ohlcv, Price};

/// One OHLCV observation read from a price source.
///
/// Values are stored exactly as parsed. No range checks are applied:
/// negative prices or a zero volume pass through untouched.
///
/// # Example
///
/// ```
/// use quantedge_feed::{Ohlcv, PriceRecord};
///
/// let r = PriceRecord::new(1.0, 2.0, 0.5, 1.5, 100.0);
/// assert_eq!(r.close(), 1.5);
/// ```
#[derive(PartialEq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PriceRecord {
    open: Price,
    high: Price,
    low: Price,
    close: Price,
    volume: f64,
}

impl PriceRecord {
    /// Record with the given values, stored as is.
    #[must_use]
    pub const fn new(open: Price, high: Price, low: Price, close: Price, volume: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Builds a record from values in [`Column::ALL`](crate::Column::ALL)
    /// order.
    #[must_use]
    pub const fn from_values(values: [f64; 5]) -> Self {
        let [open, high, low, close, volume] = values;
        Self::new(open, high, low, close, volume)
    }
}

impl Ohlcv for PriceRecord {
    #[inline]
    fn open(&self) -> Price {
        self.open
    }

    #[inline]
    fn high(&self) -> Price {
        self.high
    }

    #[inline]
    fn low(&self) -> Price {
        self.low
    }

    #[inline]
    fn close(&self) -> Price {
        self.close
    }

    #[inline]
    fn volume(&self) -> f64 {
        self.volume
    }
}
