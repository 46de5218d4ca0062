use std::env;

use crate::error::{Result, SignalError};

/// Configuration for the composite signal pipeline.
///
/// Defaults match the standard parameterizations: RSI(14), MACD(12/26/9),
/// Bollinger(20, 2.0), and the 50/200 moving-average pair for trend scoring.
#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// RSI lookback period.
    pub rsi_period: usize,
    /// MACD fast EMA period.
    pub macd_fast_period: usize,
    /// MACD slow EMA period.
    pub macd_slow_period: usize,
    /// MACD signal line EMA period.
    pub macd_signal_period: usize,
    /// Bollinger middle band SMA period.
    pub bollinger_period: usize,
    /// Bollinger band width in standard deviations.
    pub bollinger_multiplier: f64,
    /// Fast SMA period for price/trend comparison.
    pub fast_sma_period: usize,
    /// Slow SMA period for price/trend comparison.
    pub slow_sma_period: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bollinger_period: 20,
            bollinger_multiplier: 2.0,
            fast_sma_period: 50,
            slow_sma_period: 200,
        }
    }
}

impl SignalConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            rsi_period: env_usize("OMEN_RSI_PERIOD", defaults.rsi_period),
            macd_fast_period: env_usize("OMEN_MACD_FAST_PERIOD", defaults.macd_fast_period),
            macd_slow_period: env_usize("OMEN_MACD_SLOW_PERIOD", defaults.macd_slow_period),
            macd_signal_period: env_usize("OMEN_MACD_SIGNAL_PERIOD", defaults.macd_signal_period),
            bollinger_period: env_usize("OMEN_BOLLINGER_PERIOD", defaults.bollinger_period),
            bollinger_multiplier: env::var("OMEN_BOLLINGER_MULTIPLIER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bollinger_multiplier),
            fast_sma_period: env_usize("OMEN_FAST_SMA_PERIOD", defaults.fast_sma_period),
            slow_sma_period: env_usize("OMEN_SLOW_SMA_PERIOD", defaults.slow_sma_period),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("rsi_period", self.rsi_period),
            ("macd_fast_period", self.macd_fast_period),
            ("macd_slow_period", self.macd_slow_period),
            ("macd_signal_period", self.macd_signal_period),
            ("bollinger_period", self.bollinger_period),
            ("fast_sma_period", self.fast_sma_period),
            ("slow_sma_period", self.slow_sma_period),
        ];
        for (name, period) in periods {
            if period == 0 {
                return Err(SignalError::InvalidPeriod(format!(
                    "{} must be greater than 0",
                    name
                )));
            }
        }

        if !self.bollinger_multiplier.is_finite() || self.bollinger_multiplier < 0.0 {
            return Err(SignalError::InvalidMultiplier(self.bollinger_multiplier));
        }

        if self.macd_fast_period >= self.macd_slow_period {
            return Err(SignalError::PeriodOrdering(format!(
                "macd_fast_period ({}) must be less than macd_slow_period ({})",
                self.macd_fast_period, self.macd_slow_period
            )));
        }

        if self.fast_sma_period >= self.slow_sma_period {
            return Err(SignalError::PeriodOrdering(format!(
                "fast_sma_period ({}) must be less than slow_sma_period ({})",
                self.fast_sma_period, self.slow_sma_period
            )));
        }

        Ok(())
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
