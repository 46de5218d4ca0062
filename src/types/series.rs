use serde::{Deserialize, Serialize};

/// Per-index indicator output, aligned 1:1 with the input price series.
///
/// `None` marks an index inside the indicator's warm-up window. Once a value
/// appears, every subsequent index is present.
pub type IndicatorSeries = Vec<Option<f64>>;

/// MACD output lines, each aligned with the input price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdSeries {
    /// Fast EMA minus slow EMA.
    pub macd_line: IndicatorSeries,
    /// EMA of the MACD line.
    pub signal_line: IndicatorSeries,
    /// MACD line minus signal line.
    pub histogram: IndicatorSeries,
}

/// Bollinger band lines, each aligned with the input price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BollingerSeries {
    /// Middle band: SMA over the configured period.
    pub middle: IndicatorSeries,
    /// Middle plus `multiplier` standard deviations.
    pub upper: IndicatorSeries,
    /// Middle minus `multiplier` standard deviations.
    pub lower: IndicatorSeries,
}

impl MacdSeries {
    /// An all-absent result for a series of the given length.
    pub fn empty(len: usize) -> Self {
        Self {
            macd_line: vec![None; len],
            signal_line: vec![None; len],
            histogram: vec![None; len],
        }
    }
}

impl BollingerSeries {
    /// An all-absent result for a series of the given length.
    pub fn empty(len: usize) -> Self {
        Self {
            middle: vec![None; len],
            upper: vec![None; len],
            lower: vec![None; len],
        }
    }
}
