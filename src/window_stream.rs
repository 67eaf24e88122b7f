use std::{
    fmt::{Debug, Display},
    iter::FusedIterator,
    num::NonZero,
    ops::Deref,
    sync::Arc,
};

use tracing::{debug, trace};

use crate::{PriceRecord, PriceSeries, StreamConfig, StreamError};

/// The most recent `length` records as of one replay step, oldest first.
///
/// A window is a view into the shared series storage, not a copy. It stays
/// valid after the stream advances or is dropped, and its contents never
/// change.
#[derive(Clone)]
pub struct Window {
    records: Arc<[PriceRecord]>,
    start: usize,
    end: usize,
}

impl Window {
    /// Series index of the oldest record in the window.
    #[inline]
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Series index one past the newest record in the window.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Newest record in the window.
    #[inline]
    #[must_use]
    pub fn latest(&self) -> &PriceRecord {
        // start < end for every window the stream hands out
        &self.records[self.end - 1]
    }

    /// Records in the window, oldest first.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[PriceRecord] {
        &self.records[self.start..self.end]
    }
}

impl Deref for Window {
    type Target = [PriceRecord];

    #[inline]
    fn deref(&self) -> &[PriceRecord] {
        self.as_slice()
    }
}

impl PartialEq for Window {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("records", &self.as_slice())
            .finish()
    }
}

/// Forward-only replay of a [`PriceSeries`] as overlapping trailing windows.
///
/// Each [`advance`](WindowStream::advance) returns the `length` records
/// ending at the cursor, then moves the cursor one record forward. A series
/// of `n` records yields `n - length + 1` windows, or none at all when
/// `n < length`. Once exhausted, the stream stays exhausted.
///
/// Streams only read the series, so any number of them can replay clones of
/// the same series independently.
///
/// # Example
///
/// ```
/// use quantedge_feed::{PriceRecord, PriceSeries, StreamConfig, WindowStream};
/// use std::num::NonZero;
///
/// let series: PriceSeries = (1..=3)
///     .map(f64::from)
///     .map(|p| PriceRecord::new(p, p, p, p, 100.0))
///     .collect();
///
/// let mut stream = WindowStream::new(series, StreamConfig::new(NonZero::new(2).unwrap()));
///
/// assert_eq!(stream.advance().map(|w| (w.start(), w.end())), Some((0, 2)));
/// assert_eq!(stream.advance().map(|w| (w.start(), w.end())), Some((1, 3)));
/// assert!(stream.advance().is_none());
/// assert!(stream.advance().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct WindowStream {
    series: PriceSeries,
    length: usize,
    /// One past the newest record of the next window.
    cursor: usize,
}

impl WindowStream {
    /// Stream over `series` with the first window ending at record
    /// `config.length()`.
    #[must_use]
    pub fn new(series: PriceSeries, config: StreamConfig) -> Self {
        Self {
            series,
            length: config.length(),
            cursor: config.length(),
        }
    }

    /// Like [`new`](WindowStream::new) with a window length known only at
    /// runtime.
    ///
    /// # Errors
    ///
    /// [`StreamError::InvalidWindowLength`] if `length` is zero.
    pub fn with_length(series: PriceSeries, length: usize) -> Result<Self, StreamError> {
        let length = NonZero::new(length).ok_or(StreamError::InvalidWindowLength(length))?;

        Ok(Self::new(series, StreamConfig::new(length)))
    }

    /// Returns the next window, or `None` once the series is exhausted.
    pub fn advance(&mut self) -> Option<Window> {
        if self.cursor > self.series.len() {
            return None;
        }

        let end = self.cursor;
        let start = end - self.length;
        self.cursor += 1;

        trace!(start, end, "window delivered");
        if end == self.series.len() {
            debug!(windows = self.delivered(), "price series replay complete");
        }

        Some(Window {
            records: self.series.shared(),
            start,
            end,
        })
    }

    /// Number of records in every window.
    #[inline]
    #[must_use]
    pub fn window_length(&self) -> usize {
        self.length
    }

    /// Series index one past the newest record of the next window.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of windows still to be delivered.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        (self.series.len() + 1).saturating_sub(self.cursor)
    }

    /// Whether every window has been delivered.
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// The series being replayed.
    #[inline]
    #[must_use]
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    fn delivered(&self) -> usize {
        self.cursor - self.length
    }
}

impl Iterator for WindowStream {
    type Item = Window;

    #[inline]
    fn next(&mut self) -> Option<Window> {
        self.advance()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WindowStream {}

impl FusedIterator for WindowStream {}

impl Display for WindowStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WindowStream({}, {}/{})",
            self.length,
            self.delivered(),
            self.delivered() + self.remaining()
        )
    }
}
