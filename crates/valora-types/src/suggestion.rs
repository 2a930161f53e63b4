use serde::{Deserialize, Serialize};

/// An example prompt offered before the conversation starts.
/// Fetched as a set; server order is preserved and the set is replaced
/// wholesale on each fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub label: String,
    pub example: String,
}
