//! Exponential Moving Average (EMA) indicator.

use crate::indicators::Indicator;
use crate::types::{IndicatorSeries, SignalCategory};

/// EMA (Exponential Moving Average) indicator.
///
/// Like SMA but gives more weight to recent prices. The seed value at index
/// `period - 1` is the SMA of the first `period` closes; every later index
/// applies the recurrence `ema = (close - prev) * alpha + prev` with
/// `alpha = 2 / (period + 1)`.
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for Ema {
    fn id(&self) -> &str {
        match self.period {
            12 => "ema12",
            26 => "ema26",
            _ => "ema",
        }
    }

    fn name(&self) -> &str {
        match self.period {
            12 => "EMA (12)",
            26 => "EMA (26)",
            _ => "EMA",
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

        let alpha = 2.0 / (self.period as f64 + 1.0);
        let mut out: IndicatorSeries = vec![None; self.period - 1];

        // Seed with the SMA of the first window
        let mut ema: f64 = closes[..self.period].iter().sum::<f64>() / self.period as f64;
        out.push(Some(ema));

        for &close in &closes[self.period..] {
            ema = (close - ema) * alpha + ema;
            out.push(Some(ema));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::Sma;

    #[test]
    fn test_ema_seed_equals_sma() {
        let closes = vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
        let period = 4;
        let ema = Ema::new(period).calculate(&closes);
        let sma = Sma::new(period).calculate(&closes);
        assert_eq!(ema[period - 1], sma[period - 1]);
    }

    #[test]
    fn test_ema_recurrence() {
        let closes = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let out = Ema::new(3).calculate(&closes);
        // Seed: SMA(1,2,3) = 2.0, alpha = 0.5
        assert_eq!(out[2], Some(2.0));
        // (4 - 2) * 0.5 + 2 = 3.0
        assert_eq!(out[3], Some(3.0));
        // (5 - 3) * 0.5 + 3 = 4.0
        assert_eq!(out[4], Some(4.0));
    }

    #[test]
    fn test_ema_warm_up_prefix() {
        let closes: Vec<f64> = (0..20).map(|v| v as f64).collect();
        let out = Ema::new(12).calculate(&closes);
        assert_eq!(out.len(), closes.len());
        for (i, value) in out.iter().enumerate() {
            assert_eq!(value.is_some(), i >= 11, "index {}", i);
        }
    }

    #[test]
    fn test_ema_insufficient_data() {
        let closes = vec![1.0, 2.0, 3.0];
        assert_eq!(Ema::new(5).calculate(&closes), vec![None; 3]);
    }

    #[test]
    fn test_ema_empty_input() {
        assert!(Ema::new(5).calculate(&[]).is_empty());
    }

    #[test]
    fn test_ema_tracks_constant_series() {
        let closes = vec![7.0; 10];
        let out = Ema::new(4).calculate(&closes);
        for value in out.iter().flatten() {
            assert!((value - 7.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_ema_id_and_name() {
        assert_eq!(Ema::new(12).id(), "ema12");
        assert_eq!(Ema::new(26).name(), "EMA (26)");
        assert_eq!(Ema::new(9).id(), "ema");
    }
}
