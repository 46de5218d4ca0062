//! Relative Strength Index (RSI) indicator.

use crate::indicators::Indicator;
use crate::types::{IndicatorSeries, SignalCategory};

/// RSI (Relative Strength Index) indicator.
///
/// Bounded 0-100 momentum oscillator over the first differences of the
/// close series. Seed averages are simple means of the first `period`
/// gains and losses; later values use Wilder smoothing
/// (`avg = (avg * (period - 1) + x) / period`).
///
/// The first `period` output indices are absent; the seed value sits at
/// index `period`. When the average loss is zero RSI is defined as 100
/// rather than undefined.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_loss == 0.0 {
            return 100.0;
        }
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

impl Indicator for Rsi {
    fn id(&self) -> &str {
        "rsi"
    }

    fn name(&self) -> &str {
        "RSI (14)"
    }

    fn category(&self) -> SignalCategory {
        SignalCategory::Momentum
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn calculate(&self, closes: &[f64]) -> IndicatorSeries {
        if self.period == 0 || closes.len() <= self.period {
            return vec![None; closes.len()];
        }

        let mut out: IndicatorSeries = vec![None; self.period];

        // Seed averages over the first `period` differences. A zero change
        // contributes to neither side.
        let mut avg_gain = 0.0;
        let mut avg_loss = 0.0;
        for i in 1..=self.period {
            let change = closes[i] - closes[i - 1];
            if change > 0.0 {
                avg_gain += change;
            } else {
                avg_loss -= change;
            }
        }
        avg_gain /= self.period as f64;
        avg_loss /= self.period as f64;

        out.push(Some(Self::rsi_value(avg_gain, avg_loss)));

        // Wilder smoothing for the remaining differences
        for i in (self.period + 1)..closes.len() {
            let change = closes[i] - closes[i - 1];
            let (gain, loss) = if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            };

            avg_gain = (avg_gain * (self.period - 1) as f64 + gain) / self.period as f64;
            avg_loss = (avg_loss * (self.period - 1) as f64 + loss) / self.period as f64;

            out.push(Some(Self::rsi_value(avg_gain, avg_loss)));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uptrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 100.0 + i as f64 * 1.5).collect()
    }

    fn downtrend(count: usize) -> Vec<f64> {
        (0..count).map(|i| 200.0 - i as f64 * 1.5).collect()
    }

    #[test]
    fn test_rsi_alignment() {
        // First `period` indices absent, seed at index `period`,
        // contiguous values after.
        let closes = uptrend(30);
        let period = 14;
        let out = Rsi::new(period).calculate(&closes);
        assert_eq!(out.len(), closes.len());
        for (i, value) in out.iter().enumerate() {
            assert_eq!(value.is_some(), i >= period, "index {}", i);
        }
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let closes = uptrend(10);
        assert_eq!(Rsi::default().calculate(&closes), vec![None; 10]);
        // Exactly `period` points is still one short of a full difference window
        let closes = uptrend(14);
        assert_eq!(Rsi::default().calculate(&closes), vec![None; 14]);
    }

    #[test]
    fn test_rsi_all_gains_is_100() {
        let closes = uptrend(25);
        let out = Rsi::default().calculate(&closes);
        for value in out.iter().flatten() {
            assert_eq!(*value, 100.0);
        }
    }

    #[test]
    fn test_rsi_all_losses_is_0() {
        let closes = downtrend(25);
        let out = Rsi::default().calculate(&closes);
        for value in out.iter().flatten() {
            assert_eq!(*value, 0.0);
        }
    }

    #[test]
    fn test_rsi_bounded() {
        let closes: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 10.0)
            .collect();
        let out = Rsi::default().calculate(&closes);
        for value in out.iter().flatten() {
            assert!((0.0..=100.0).contains(value), "RSI out of range: {}", value);
        }
    }

    #[test]
    fn test_rsi_hand_computed_seed_and_smoothing() {
        // period 2: diffs of [10, 11, 10.5, 11.5] are [+1, -0.5, +1]
        // seed: avg_gain = 0.5, avg_loss = 0.25 -> rs = 2, rsi = 100 - 100/3
        // next: avg_gain = (0.5 + 1)/2 = 0.75, avg_loss = 0.25/2 = 0.125
        //       rs = 6, rsi = 100 - 100/7
        let closes = vec![10.0, 11.0, 10.5, 11.5];
        let out = Rsi::new(2).calculate(&closes);
        assert_eq!(out[0], None);
        assert_eq!(out[1], None);
        assert!((out[2].unwrap() - (100.0 - 100.0 / 3.0)).abs() < 1e-9);
        assert!((out[3].unwrap() - (100.0 - 100.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_rsi_flat_series_zero_loss_rule() {
        let closes = vec![5.0; 20];
        let out = Rsi::default().calculate(&closes);
        // No losses observed at all: defined as 100
        for value in out.iter().flatten() {
            assert_eq!(*value, 100.0);
        }
    }

    #[test]
    fn test_rsi_min_periods() {
        assert_eq!(Rsi::default().min_periods(), 15);
        assert_eq!(Rsi::new(7).min_periods(), 8);
    }
}
