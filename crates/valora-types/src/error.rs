use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("could not reach analysis service: {0}")]
    Unreachable(String),

    #[error("malformed reply from analysis service: {0}")]
    MalformedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ChatError {
    fn from(e: serde_json::Error) -> Self {
        ChatError::Serialization(e.to_string())
    }
}
