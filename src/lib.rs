//! Omen - technical indicator and composite trend signal engine
//!
//! Turns a time-ascending close series into standard technical indicators
//! (SMA, EMA, RSI, MACD, Bollinger Bands) and synthesizes them into a single
//! composite trend classification. Every indicator output is aligned 1:1
//! with the input series, with `None` marking warm-up indices.
//!
//! The engine performs no I/O and keeps no state: price acquisition, caching
//! and rendering are the caller's concern.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod indicators;
pub mod types;

// Re-export commonly used types
pub use aggregator::SignalAggregator;
pub use config::SignalConfig;
pub use error::{Result, SignalError};
pub use indicators::{standard_set, BollingerBands, Ema, Indicator, Macd, Rsi, Sma};
pub use types::*;
