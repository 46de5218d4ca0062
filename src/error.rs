use thiserror::Error;

/// Signal engine error types.
///
/// Only configuration can fail. Indicator computation itself never errors:
/// insufficient history is represented structurally as absent values, and
/// degenerate arithmetic is resolved by domain rules.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    #[error("invalid band multiplier: {0} (must be finite and non-negative)")]
    InvalidMultiplier(f64),

    #[error("invalid period ordering: {0}")]
    PeriodOrdering(String),
}

pub type Result<T> = std::result::Result<T, SignalError>;
