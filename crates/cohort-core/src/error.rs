use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid case id: {0:?}")]
    InvalidCaseId(String),

    #[error("invalid job id: {0:?}")]
    InvalidJobId(String),
}
