//! MACD (Moving Average Convergence Divergence) indicator.

use crate::indicators::{Ema, Indicator};
use crate::types::{IndicatorSeries, MacdSeries, SignalCategory};

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD line = EMA(fast) - EMA(slow)
/// - Signal line = EMA(signal) of the MACD line
/// - Histogram = MACD line - signal line
///
/// The signal line EMA is seeded on the contiguous present portion of the
/// MACD line, then re-padded with the same number of leading absents so all
/// three lines stay aligned with the input.
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    /// Calculate all three MACD lines.
    pub fn calculate_macd(&self, closes: &[f64]) -> MacdSeries {
        let len = closes.len();
        if self.fast_period == 0 || self.slow_period == 0 || self.signal_period == 0 {
            return MacdSeries::empty(len);
        }

        let fast_ema = Ema::new(self.fast_period).calculate(closes);
        let slow_ema = Ema::new(self.slow_period).calculate(closes);

        let macd_line: IndicatorSeries = fast_ema
            .iter()
            .zip(&slow_ema)
            .map(|(fast, slow)| match (fast, slow) {
                (Some(f), Some(s)) => Some(f - s),
                _ => None,
            })
            .collect();

        // Strip the leading absent prefix before seeding the signal EMA,
        // then re-pad to preserve alignment.
        let present: Vec<f64> = macd_line.iter().filter_map(|v| *v).collect();
        let mut signal_line: IndicatorSeries = vec![None; len - present.len()];
        signal_line.extend(Ema::new(self.signal_period).calculate(&present));

        let histogram: IndicatorSeries = macd_line
            .iter()
            .zip(&signal_line)
            .map(|(macd, signal)| match (macd, signal) {
                (Some(m), Some(s)) => Some(m - s),
                _ => None,
            })
            .collect();

        MacdSeries {
            macd_line,
            signal_line,
            histogram,
        }
    }
}

impl Indicator for Macd {
    fn id(&self) -> &str {
        "macd"
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Trend
    }

    fn min_periods(&self) -> usize {
        // First histogram value: slow EMA seed plus signal EMA seed
        self.slow_period + self.signal_period - 1
    }

    fn calculate(&self, closes: &[f64]) -> IndicatorSeries {
        self.calculate_macd(closes).histogram
    }
}
