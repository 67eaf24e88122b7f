/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead.
pub type Price = f64;

/// OHLCV bar accessors.
///
/// [`PriceRecord`](crate::PriceRecord) implements this, and so can your own
/// candle type: window consumers written against `&impl Ohlcv` work with
/// either.
///
/// # Example
///
/// ```
/// use quantedge_feed::{Ohlcv, Price};
///
/// struct MyKline {
///     o: f64, h: f64, l: f64, c: f64, v: f64,
/// }
///
/// impl Ohlcv for MyKline {
///     fn open(&self) -> Price { self.o }
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn volume(&self) -> f64 { self.v }
/// }
/// ```
pub trait Ohlcv {
    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing price of the bar.
    fn close(&self) -> Price;

    /// Trade volume during the bar.
    fn volume(&self) -> f64;
}
