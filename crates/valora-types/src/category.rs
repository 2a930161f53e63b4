use serde::{Deserialize, Serialize};

/// Request category derived from user text.
/// Sent to the analysis service as its `prompt_type` token to select an
/// analysis path. Closed set; classification always yields exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Compare,
    Anomalies,
    EnhancedHypothesis,
    Hypothesis,
    ProsCons,
    Score,
    StockTrend,
    Financials,
    Taapi,
    HistoricalFeatures,
    StockData,
    OverallAnalysis,
    /// Designated fallback when no keyword rule matches
    Ratios,
}

impl Category {
    /// Wire token sent as `prompt_type`
    pub fn as_token(&self) -> &'static str {
        match self {
            Category::Compare => "compare",
            Category::Anomalies => "anomalies",
            Category::EnhancedHypothesis => "enhanced_hypothesis",
            Category::Hypothesis => "hypothesis",
            Category::ProsCons => "pros_cons",
            Category::Score => "score",
            Category::StockTrend => "stock_trend",
            Category::Financials => "financials",
            Category::Taapi => "taapi",
            Category::HistoricalFeatures => "historical_features",
            Category::StockData => "stock_data",
            Category::OverallAnalysis => "overall_analysis",
            Category::Ratios => "ratios",
        }
    }

    /// Human-readable name, for status lines and debug output
    pub fn label(&self) -> &'static str {
        match self {
            Category::Compare => "Comparison",
            Category::Anomalies => "Anomaly review",
            Category::EnhancedHypothesis => "Enhanced hypothesis",
            Category::Hypothesis => "Hypothesis test",
            Category::ProsCons => "Pros and cons",
            Category::Score => "Score",
            Category::StockTrend => "Stock trend",
            Category::Financials => "Financials",
            Category::Taapi => "Technical indicators",
            Category::HistoricalFeatures => "Historical features",
            Category::StockData => "Stock data",
            Category::OverallAnalysis => "Overall analysis",
            Category::Ratios => "Ratio summary",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Compare,
            Category::Anomalies,
            Category::EnhancedHypothesis,
            Category::Hypothesis,
            Category::ProsCons,
            Category::Score,
            Category::StockTrend,
            Category::Financials,
            Category::Taapi,
            Category::HistoricalFeatures,
            Category::StockData,
            Category::OverallAnalysis,
            Category::Ratios,
        ]
    }
}
