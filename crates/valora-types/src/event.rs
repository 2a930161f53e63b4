use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Events emitted by the chat engine.
/// A UI layer drains these for reactive updates; they carry no authority
/// over session state, which is read from the engine directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A submission passed validation and a request went out
    SubmissionAccepted { request_id: u64, category: Category },

    /// The service answered and the reply was appended
    ReplyReceived { request_id: u64 },

    /// The request failed; a notice was appended instead
    ReplyFailed { request_id: u64, reason: String },

    /// The suggestion set was replaced
    SuggestionsUpdated { count: usize },

    /// The session was discarded and replaced with a fresh one
    SessionReset { session_id: String },
}
