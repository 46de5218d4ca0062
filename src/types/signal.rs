use serde::{Deserialize, Serialize};

/// Category of a technical indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalCategory {
    Trend,
    Momentum,
    Volatility,
}

impl SignalCategory {
    /// Get display name for this category.
    pub fn name(&self) -> &'static str {
        match self {
            SignalCategory::Trend => "Trend",
            SignalCategory::Momentum => "Momentum",
            SignalCategory::Volatility => "Volatility",
        }
    }
}

/// Discrete trend classification derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendLabel {
    /// Score <= -3.
    Oversold,
    /// Score -2 or -1.
    AttractivePrice,
    /// Score 0.
    Neutral,
    /// Score 1 or 2.
    ElevatedPrice,
    /// Score >= 3.
    Overbought,
}

impl TrendLabel {
    /// Map a composite score (-7 to +7) to its label.
    ///
    /// Boundaries are exhaustive and non-overlapping over the whole range.
    pub fn from_score(score: i8) -> Self {
        match score {
            s if s <= -3 => TrendLabel::Oversold,
            s if s < 0 => TrendLabel::AttractivePrice,
            0 => TrendLabel::Neutral,
            s if s < 3 => TrendLabel::ElevatedPrice,
            _ => TrendLabel::Overbought,
        }
    }

    /// Get display label for this classification.
    pub fn label(&self) -> &'static str {
        match self {
            TrendLabel::Oversold => "Oversold - Strong Opportunity",
            TrendLabel::AttractivePrice => "Attractive Price - Consider Entry",
            TrendLabel::Neutral => "Neutral - Await Definition",
            TrendLabel::ElevatedPrice => "Elevated Price - Caution",
            TrendLabel::Overbought => "Overbought - Correction Risk",
        }
    }
}

/// Per-indicator sub-scores behind a composite signal.
///
/// Exposed for explainability: the gauge renderer shows which indicators
/// pushed the score where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalBreakdown {
    /// RSI sub-score (-2 to +2).
    pub rsi_score: i8,
    /// MACD histogram sub-score (-1 to +1).
    pub macd_score: i8,
    /// Price vs fast SMA sub-score (-1 or +1).
    pub fast_sma_score: i8,
    /// Price vs slow SMA sub-score (-1 or +1).
    pub slow_sma_score: i8,
    /// Fast SMA vs slow SMA cross sub-score (-1 or +1).
    pub cross_score: i8,
    /// Bollinger band position sub-score (-1 to +1).
    pub bollinger_score: i8,
}

impl SignalBreakdown {
    /// Sum of all sub-scores.
    pub fn total(&self) -> i8 {
        self.rsi_score
            + self.macd_score
            + self.fast_sma_score
            + self.slow_sma_score
            + self.cross_score
            + self.bollinger_score
    }
}

/// Composite trend signal for a price series.
///
/// Derived from the latest index of each indicator series. When any required
/// indicator is still warming up, the signal defaults to neutral with no
/// breakdown rather than erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeSignal {
    /// Sum of the six sub-scores (-7 to +7).
    pub score: i8,
    /// Continuous analogue of `score`: the RSI sub-score is replaced with
    /// `(rsi - 50) / 10`. Intended for smooth gauge rendering only.
    pub exact_score: f64,
    /// Discrete classification of `score`.
    pub label: TrendLabel,
    /// Per-indicator sub-scores; absent on the neutral fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<SignalBreakdown>,
    /// Unix timestamp (milliseconds) when computed.
    pub timestamp: i64,
}

impl CompositeSignal {
    /// The neutral fallback returned when any required indicator has
    /// insufficient history at the latest index.
    pub fn neutral() -> Self {
        Self {
            score: 0,
            exact_score: 0.0,
            label: TrendLabel::Neutral,
            breakdown: None,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
