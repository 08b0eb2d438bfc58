use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashError {
    #[error("network error: {0}")]
    Network(String),
    #[error("token symbol {0} is already tracked")]
    DuplicateSymbol(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("score submission failed: {0}")]
    Submission(String),
    #[error("balance aggregation failed: {0}")]
    Aggregation(String),
    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, DashError>;

impl From<reqwest::Error> for DashError {
    fn from(e: reqwest::Error) -> Self {
        DashError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for DashError {
    fn from(e: serde_json::Error) -> Self {
        DashError::Network(e.to_string())
    }
}
