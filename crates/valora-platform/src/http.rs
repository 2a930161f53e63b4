//! HTTP adapter for the remote analysis service.
//!
//! Speaks the service's JSON contract: `POST /chat` for classified
//! questions, `GET /chat/suggestions` for the example-prompt set.
//! One attempt per call, no retries, no added timeout beyond the
//! client's own defaults.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use valora_core::ports::{AnalysisPort, AnalysisRequest, SuggestionPort};
use valora_types::{config::ChatConfig, suggestion::Suggestion, ChatError, Result};

/// Client for the analysis service
pub struct AnalysisBackend {
    config: ChatConfig,
    client: reqwest::Client,
}

impl AnalysisBackend {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub(crate) fn request_body(req: &AnalysisRequest) -> Value {
        json!({
            "prompt_type": req.category.as_token(),
            "ticker": req.ticker,
            "persona": req.persona,
            "question": req.question,
        })
    }
}

#[async_trait(?Send)]
impl AnalysisPort for AnalysisBackend {
    async fn send(&self, req: AnalysisRequest) -> Result<String> {
        let url = self.config.chat_url();
        let body = Self::request_body(&req);
        log::debug!("POST {} ({})", url, req.category.as_token());

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Unreachable(format!("HTTP {}", status)));
        }

        let data: ChatReply = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        if data.reply.trim().is_empty() {
            return Err(ChatError::MalformedResponse("empty reply".to_string()));
        }

        Ok(data.reply)
    }
}

#[async_trait(?Send)]
impl SuggestionPort for AnalysisBackend {
    async fn fetch_suggestions(&self) -> Result<Vec<Suggestion>> {
        let url = self.config.suggestions_url();
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ChatError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Unreachable(format!("HTTP {}", status)));
        }

        let data: SuggestionsReply = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedResponse(e.to_string()))?;

        Ok(data.suggestions)
    }
}

// ─── Wire types ──────────────────────────────────────────────

#[derive(Deserialize)]
pub(crate) struct ChatReply {
    pub(crate) reply: String,
}

#[derive(Deserialize)]
pub(crate) struct SuggestionsReply {
    #[serde(default)]
    pub(crate) suggestions: Vec<Suggestion>,
}
