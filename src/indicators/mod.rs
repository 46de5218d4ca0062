//! Technical indicator implementations.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use bollinger::BollingerBands;
pub use ema::Ema;
pub use macd::Macd;
pub use rsi::Rsi;
pub use sma::Sma;

use crate::types::{IndicatorSeries, SignalCategory};

/// Trait for implementing technical indicators.
pub trait Indicator: Send + Sync {
    /// Unique identifier for this indicator.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Category this indicator belongs to.
    fn category(&self) -> SignalCategory;

    /// Minimum number of price points required for the first value.
    fn min_periods(&self) -> usize;

    /// Calculate the indicator over closing prices.
    ///
    /// The output is aligned 1:1 with the input; `None` marks indices inside
    /// the warm-up window. Inputs shorter than `min_periods` produce an
    /// all-absent series, never an error.
    fn calculate(&self, closes: &[f64]) -> IndicatorSeries;
}

/// Get the default indicator set for chart overlays.
pub fn standard_set() -> Vec<Box<dyn Indicator>> {
    vec![
        // Trend indicators
        Box::new(Sma::new(20)),
        Box::new(Sma::new(50)),
        Box::new(Sma::new(200)),
        Box::new(Ema::new(12)),
        Box::new(Ema::new(26)),
        Box::new(Macd::default()),
        // Momentum indicators
        Box::new(Rsi::default()),
        // Volatility indicators
        Box::new(BollingerBands::default()),
    ]
}
