use std::{fmt::Display, num::NonZero};

/// Window length used when none is configured.
pub const DEFAULT_WINDOW_LENGTH: NonZero<usize> = NonZero::new(5).unwrap();

/// Configuration for a [`WindowStream`](crate::WindowStream).
///
/// # Example
///
/// ```
/// use quantedge_feed::StreamConfig;
/// use std::num::NonZero;
///
/// let config = StreamConfig::new(NonZero::new(20).unwrap());
/// assert_eq!(config.length(), 20);
/// assert_eq!(StreamConfig::default().length(), 5);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct StreamConfig {
    length: NonZero<usize>,
}

impl StreamConfig {
    /// Stream delivering windows of `length` records.
    #[must_use]
    pub fn new(length: NonZero<usize>) -> Self {
        Self::builder().length(length).build()
    }

    /// Returns a new builder with default values.
    #[must_use]
    pub fn builder() -> StreamConfigBuilder {
        StreamConfigBuilder::new()
    }

    /// Window length (number of records).
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.get()
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Display for StreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StreamConfig({})", self.length)
    }
}

/// Builder for [`StreamConfig`].
///
/// Defaults: length = [`DEFAULT_WINDOW_LENGTH`].
pub struct StreamConfigBuilder {
    length: NonZero<usize>,
}

impl StreamConfigBuilder {
    fn new() -> Self {
        Self {
            length: DEFAULT_WINDOW_LENGTH,
        }
    }

    /// Sets the window length.
    #[must_use]
    pub fn length(mut self, length: NonZero<usize>) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn build(self) -> StreamConfig {
        StreamConfig {
            length: self.length,
        }
    }
}
