use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::suggestion::Suggestion;

/// Lifecycle of the single request slot a session owns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// No outstanding request
    Idle,
    /// Exactly one request in flight
    AwaitingResponse,
}

/// One continuous conversation owned by a single mounted chat view.
/// Replaced wholesale on reset; never mutated back to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    /// Monotonic token distinguishing this session from superseded ones.
    /// Results carrying an older epoch are discarded, not applied.
    pub epoch: u64,
    pub messages: Vec<Message>,
    pub status: SessionStatus,
    /// Current unsent input
    pub draft: String,
    pub suggestions: Vec<Suggestion>,
    pub suggestions_visible: bool,
    pub created_at: String,
    next_message_id: u64,
}

impl Session {
    pub fn new(epoch: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            epoch,
            messages: Vec::new(),
            status: SessionStatus::Idle,
            draft: String::new(),
            suggestions: Vec::new(),
            suggestions_visible: true,
            created_at: chrono::Utc::now().to_rfc3339(),
            next_message_id: 0,
        }
    }

    /// Allocate the next message id. Unique and increasing per session.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}
