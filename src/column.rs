use crate::{Ohlcv, Price};

use std::fmt::{Debug, Display};

/// One of the five columns every price source must carry.
///
/// Declaration order is the required column order of the CSV header and of
/// every data row.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Column {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    Close,
    /// Traded volume.
    Volume,
}

impl Column {
    /// All columns in the required source order.
    pub const ALL: [Column; 5] = [
        Self::Open,
        Self::High,
        Self::Low,
        Self::Close,
        Self::Volume,
    ];

    /// Number of columns in a source row.
    pub const COUNT: usize = Self::ALL.len();

    /// Lowercase header token for this column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
        }
    }

    /// Whether a header cell names this column. Case-insensitive, no trimming.
    #[must_use]
    pub fn matches(self, token: &str) -> bool {
        token.eq_ignore_ascii_case(self.name())
    }

    /// Reads this column's value from a bar.
    #[inline]
    pub fn extract(self, ohlcv: &impl Ohlcv) -> Price {
        match self {
            Self::Open => ohlcv.open(),
            Self::High => ohlcv.high(),
            Self::Low => ohlcv.low(),
            Self::Close => ohlcv.close(),
            Self::Volume => ohlcv.volume(),
        }
    }

    pub(crate) fn expected_header() -> String {
        Self::ALL.map(Self::name).join(",")
    }
}

impl Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
