//! Composite trend signal aggregation.
//!
//! Combines the latest value of each indicator into a single bounded score
//! and discrete trend classification.

use tracing::{debug, trace};

use crate::config::SignalConfig;
use crate::error::Result;
use crate::indicators::{BollingerBands, Indicator, Macd, Rsi, Sma};
use crate::types::{CompositeSignal, SignalBreakdown, TrendLabel};

// RSI sub-score thresholds
const RSI_OVERSOLD: f64 = 30.0;
const RSI_LOW: f64 = 45.0;
const RSI_HIGH: f64 = 55.0;
const RSI_OVERBOUGHT: f64 = 70.0;

/// Aggregates indicator outputs into a [`CompositeSignal`].
///
/// Pure and side-effect free: the same price series and configuration always
/// produce the same score, so instances may be shared across threads freely.
pub struct SignalAggregator {
    config: SignalConfig,
}

impl Default for SignalAggregator {
    fn default() -> Self {
        Self {
            config: SignalConfig::default(),
        }
    }
}

impl SignalAggregator {
    /// Create an aggregator with a validated configuration.
    pub fn new(config: SignalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Evaluate the composite signal for a time-ascending close series.
    ///
    /// Any missing required indicator at the latest index downgrades the
    /// result to the neutral fallback; this is a defined recovery path, not
    /// an error.
    pub fn evaluate(&self, closes: &[f64]) -> CompositeSignal {
        let Some(&price) = closes.last() else {
            trace!("empty close series, returning neutral fallback");
            return CompositeSignal::neutral();
        };
        let last = closes.len() - 1;

        let rsi_series = Rsi::new(self.config.rsi_period).calculate(closes);
        let macd = Macd::new(
            self.config.macd_fast_period,
            self.config.macd_slow_period,
            self.config.macd_signal_period,
        )
        .calculate_macd(closes);
        let fast_sma = Sma::new(self.config.fast_sma_period).calculate(closes);
        let slow_sma = Sma::new(self.config.slow_sma_period).calculate(closes);
        let bands = BollingerBands::new(
            self.config.bollinger_period,
            self.config.bollinger_multiplier,
        )
        .calculate_bands(closes);

        let (Some(rsi), Some(hist), Some(fast), Some(slow), Some(upper), Some(lower)) = (
            rsi_series[last],
            macd.histogram[last],
            fast_sma[last],
            slow_sma[last],
            bands.upper[last],
            bands.lower[last],
        ) else {
            trace!(
                len = closes.len(),
                "indicators still warming up, returning neutral fallback"
            );
            return CompositeSignal::neutral();
        };

        let rsi_score = if rsi < RSI_OVERSOLD {
            -2
        } else if rsi < RSI_LOW {
            -1
        } else if rsi > RSI_OVERBOUGHT {
            2
        } else if rsi > RSI_HIGH {
            1
        } else {
            0
        };

        let macd_score = if hist > 0.0 {
            1
        } else if hist < 0.0 {
            -1
        } else {
            0
        };

        let fast_sma_score = if price > fast { 1 } else { -1 };
        let slow_sma_score = if price > slow { 1 } else { -1 };
        let cross_score = if fast > slow { 1 } else { -1 };

        let bollinger_score = if price <= lower {
            -1
        } else if price >= upper {
            1
        } else {
            0
        };

        let breakdown = SignalBreakdown {
            rsi_score,
            macd_score,
            fast_sma_score,
            slow_sma_score,
            cross_score,
            bollinger_score,
        };
        let score = breakdown.total();
        let label = TrendLabel::from_score(score);

        // Continuous gauge variant: RSI term becomes linear, anchored so the
        // discrete thresholds at 30 and 70 map to -2.0 and +2.0
        let rsi_exact = (rsi - 50.0) / 10.0;
        let exact_score = rsi_exact
            + f64::from(
                macd_score + fast_sma_score + slow_sma_score + cross_score + bollinger_score,
            );

        debug!(score, ?label, ?breakdown, "composite signal computed");

        CompositeSignal {
            score,
            exact_score,
            label,
            breakdown: Some(breakdown),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_neutral_fallback() {
        let aggregator = SignalAggregator::default();
        let signal = aggregator.evaluate(&[]);
        assert_eq!(signal.score, 0);
        assert_eq!(signal.exact_score, 0.0);
        assert_eq!(signal.label, TrendLabel::Neutral);
        assert!(signal.breakdown.is_none());
    }

    #[test]
    fn test_short_series_neutral_fallback() {
        let aggregator = SignalAggregator::default();
        // Shorter than every configured period
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let signal = aggregator.evaluate(&closes);
        assert_eq!(signal.score, 0);
        assert_eq!(signal.label, TrendLabel::Neutral);
        assert!(signal.breakdown.is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SignalConfig {
            rsi_period: 0,
            ..Default::default()
        };
        assert!(SignalAggregator::new(config).is_err());
    }

    #[test]
    fn test_strong_uptrend_scores_overbought() {
        let aggregator = SignalAggregator::default();
        let closes: Vec<f64> = (0..250).map(|i| 100.0 + i as f64).collect();
        let signal = aggregator.evaluate(&closes);

        let breakdown = signal.breakdown.expect("breakdown present");
        // Strictly rising closes: RSI pinned at 100, price above both SMAs,
        // fast above slow, positive histogram
        assert_eq!(breakdown.rsi_score, 2);
        assert_eq!(breakdown.macd_score, 1);
        assert_eq!(breakdown.fast_sma_score, 1);
        assert_eq!(breakdown.slow_sma_score, 1);
        assert_eq!(breakdown.cross_score, 1);
        assert_eq!(signal.label, TrendLabel::Overbought);
        assert!(signal.score >= 3);
    }

    #[test]
    fn test_strong_downtrend_scores_oversold() {
        let aggregator = SignalAggregator::default();
        let closes: Vec<f64> = (0..250).map(|i| 1000.0 - i as f64).collect();
        let signal = aggregator.evaluate(&closes);

        let breakdown = signal.breakdown.expect("breakdown present");
        assert_eq!(breakdown.rsi_score, -2);
        assert_eq!(breakdown.macd_score, -1);
        assert_eq!(breakdown.fast_sma_score, -1);
        assert_eq!(breakdown.slow_sma_score, -1);
        assert_eq!(breakdown.cross_score, -1);
        assert_eq!(signal.label, TrendLabel::Oversold);
        assert!(signal.score <= -3);
    }

    #[test]
    fn test_score_within_bounds() {
        let aggregator = SignalAggregator::default();
        let closes: Vec<f64> = (0..400)
            .map(|i| 100.0 + (i as f64 * 0.15).sin() * 20.0)
            .collect();
        let signal = aggregator.evaluate(&closes);
        assert!((-7..=7).contains(&signal.score));
        if let Some(breakdown) = signal.breakdown {
            assert_eq!(breakdown.total(), signal.score);
        }
    }

    #[test]
    fn test_exact_score_replaces_rsi_term() {
        let aggregator = SignalAggregator::default();
        let closes: Vec<f64> = (0..250)
            .map(|i| 100.0 + (i as f64 * 0.2).sin() * 10.0 + i as f64 * 0.01)
            .collect();
        let signal = aggregator.evaluate(&closes);
        let breakdown = signal.breakdown.expect("breakdown present");

        let integer_terms = f64::from(
            breakdown.macd_score
                + breakdown.fast_sma_score
                + breakdown.slow_sma_score
                + breakdown.cross_score
                + breakdown.bollinger_score,
        );
        let rsi_term = signal.exact_score - integer_terms;
        // The continuous RSI term spans -5.0..=5.0 for RSI in 0..=100
        assert!((-5.0..=5.0).contains(&rsi_term));
    }
}
