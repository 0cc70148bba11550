#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("account serialization failure: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage failure for key `{key}`: {message}")]
    Storage { key: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
