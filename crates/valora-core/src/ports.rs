//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `valora-core` (pure Rust).
//! Implementations live in `valora-platform`. The core never imports
//! platform code; it only depends on these traits.

use async_trait::async_trait;
use valora_types::{category::Category, suggestion::Suggestion, Result};

/// One classified request to the analysis service
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub category: Category,
    /// Raw trimmed input, forwarded as-is; the service resolves tickers
    pub ticker: String,
    pub persona: String,
    pub question: String,
}

#[async_trait(?Send)]
pub trait AnalysisPort {
    /// Exchange one request for the service's reply text.
    ///
    /// Exactly one attempt, no retries, no queuing. Failures come back
    /// as `ChatError`, never as a panic past this boundary.
    async fn send(&self, req: AnalysisRequest) -> Result<String>;
}

#[async_trait(?Send)]
pub trait SuggestionPort {
    /// Fetch the current example-prompt set, server order preserved.
    async fn fetch_suggestions(&self) -> Result<Vec<Suggestion>>;
}
