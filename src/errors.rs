use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("store not connected")]
    NotConnected,

    #[error("query timed out")]
    Timeout,

    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("BSON: {0}")]
    Bson(#[from] bson::error::Error),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),
}
