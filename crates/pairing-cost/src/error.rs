//! error types for pairing-cost

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read benchmark database: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse benchmark database: {0}")]
    Json(#[from] serde_json::Error),

    #[error("benchmark database has no entry for {key}")]
    MissingKey { key: String },
}
