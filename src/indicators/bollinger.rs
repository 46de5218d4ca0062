//! Bollinger Bands indicator.

use crate::indicators::Indicator;
use crate::types::{BollingerSeries, IndicatorSeries, SignalCategory};

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA over the configured period
/// - Upper band: middle + multiplier * standard deviation
/// - Lower band: middle - multiplier * standard deviation
///
/// The standard deviation is the population form over the same trailing
/// window as the SMA (squared deviations divided by `period`).
pub struct BollingerBands {
    period: usize,
    multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

impl BollingerBands {
    pub fn new(period: usize, multiplier: f64) -> Self {
        Self { period, multiplier }
    }

    /// Calculate all three bands.
    pub fn calculate_bands(&self, closes: &[f64]) -> BollingerSeries {
        let len = closes.len();
        if self.period == 0 || len < self.period {
            return BollingerSeries::empty(len);
        }

        let mut middle: IndicatorSeries = vec![None; self.period - 1];
        let mut upper: IndicatorSeries = vec![None; self.period - 1];
        let mut lower: IndicatorSeries = vec![None; self.period - 1];

        for i in (self.period - 1)..len {
            let window = &closes[i + 1 - self.period..=i];
            let mean = window.iter().sum::<f64>() / self.period as f64;
            let variance = window
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / self.period as f64;
            let std_dev = variance.sqrt();

            middle.push(Some(mean));
            upper.push(Some(mean + self.multiplier * std_dev));
            lower.push(Some(mean - self.multiplier * std_dev));
        }

        BollingerSeries {
            middle,
            upper,
            lower,
        }
    }
}

impl Indicator for BollingerBands {
    fn id(&self) -> &str {
        "bollinger"
    }

    fn name(&self) -> &str {
        "Bollinger Bands"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Volatility
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, closes: &[f64]) -> IndicatorSeries {
        self.calculate_bands(closes).middle
    }
}
