//! Prompt classification — maps raw user text to a request category.

use valora_types::category::Category;

/// Ordered rule table; the first row whose keyword set matches wins.
/// Keyword sets overlap, so the order is part of the contract:
/// "enhanced hypothesis" must be tested before plain "hypothesis", and
/// "compare"/"vs" before everything else.
const RULES: &[(&[&str], Category)] = &[
    (&["compare", "vs"], Category::Compare),
    (&["anomal"], Category::Anomalies),
    (&["enhanced hypothesis", "signal"], Category::EnhancedHypothesis),
    (&["hypothesis"], Category::Hypothesis),
    (&["pros", "cons"], Category::ProsCons),
    (&["score"], Category::Score),
    (&["trend"], Category::StockTrend),
    (&["financial"], Category::Financials),
    (&["taapi"], Category::Taapi),
    (&["feature"], Category::HistoricalFeatures),
    (&["stock"], Category::StockData),
    (&["overall"], Category::OverallAnalysis),
];

/// Classify free-form user text into a request category.
///
/// Total and pure: case-insensitive substring matching over the rule
/// table, falling back to `Ratios` when nothing matches. Never fails.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *category;
        }
    }
    Category::Ratios
}
