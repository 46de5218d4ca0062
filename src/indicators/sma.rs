//! Simple Moving Average (SMA) indicator.

use crate::indicators::Indicator;
use crate::types::{IndicatorSeries, SignalCategory};

/// SMA (Simple Moving Average) indicator.
///
/// Unweighted mean of the `period` most recent closes. The first value
/// appears at index `period - 1`; a series shorter than `period` is
/// entirely absent.
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Sma {
    fn id(&self) -> &str {
        match self.period {
            20 => "sma20",
            50 => "sma50",
            200 => "sma200",
            _ => "sma",
        }
    }

    fn name(&self) -> &str {
        match self.period {
            20 => "SMA (20)",
            50 => "SMA (50)",
            200 => "SMA (200)",
            _ => "SMA",
        }
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Trend
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn calculate(&self, closes: &[f64]) -> IndicatorSeries {
        if self.period == 0 || closes.len() < self.period {
            return vec![None; closes.len()];
        }

        let mut out: IndicatorSeries = vec![None; self.period - 1];

        // Running sum over the sliding window
        let mut sum: f64 = closes[..self.period].iter().sum();
        out.push(Some(sum / self.period as f64));

        for i in self.period..closes.len() {
            sum += closes[i] - closes[i - self.period];
            out.push(Some(sum / self.period as f64));
        }

        out
    }
}
