use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("case not found: {id}")]
    NotFound { id: String },

    #[error("job not found: {id}")]
    JobNotFound { id: String },

    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unexpected snapshot shape: expected an object or array, got {0}")]
    UnexpectedShape(&'static str),
}
