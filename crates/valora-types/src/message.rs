use serde::{Deserialize, Serialize};

/// Author of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// How a message's content should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderHint {
    /// Literal text, shown as-is
    Plain,
    /// Lightweight markup, parsed before display
    Markup,
}

/// A single entry in the conversation log.
/// Immutable once appended; the log is never reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub origin: Origin,
    pub content: String,
    pub render_hint: RenderHint,
}

impl Message {
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            origin: Origin::User,
            content: text.into(),
            render_hint: RenderHint::Plain,
        }
    }

    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            origin: Origin::Assistant,
            content: text.into(),
            render_hint: RenderHint::Markup,
        }
    }

    /// Assistant-authored plain text, used for failure notices
    pub fn notice(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            origin: Origin::Assistant,
            content: text.into(),
            render_hint: RenderHint::Plain,
        }
    }
}
