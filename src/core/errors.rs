use thiserror::Error;

#[derive(Error, Debug)]
pub enum VokabelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word and translation must both be non-empty")]
    EmptyEntryField,
}
