use thiserror::Error;

/// Failures while preparing the stores at startup.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("io error: {0}")]
    Io(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}
