use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("seed parse error: {0}")]
    Seed(#[from] serde_json::Error),
}
