use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid date: {0}")]
    InvalidDate(#[from] jiff::Error),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unknown risk level: {0}")]
    UnknownRiskLevel(String),
}
