use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_PERSONA: &str = "analyst";

/// Client configuration, resolved once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the remote analysis service
    pub base_url: String,
    /// Persona tag forwarded with every request
    pub persona: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

impl ChatConfig {
    /// Apply overrides from the process environment
    /// (`VALORA_BASE_URL`, `VALORA_PERSONA`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("VALORA_BASE_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(persona) = std::env::var("VALORA_PERSONA") {
            if !persona.trim().is_empty() {
                config.persona = persona;
            }
        }
        config
    }

    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url.trim_end_matches('/'))
    }

    pub fn suggestions_url(&self) -> String {
        format!("{}/chat/suggestions", self.base_url.trim_end_matches('/'))
    }
}
