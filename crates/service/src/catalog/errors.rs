use thiserror::Error;

/// Errors raised by catalog reads and review mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("ISBN {0} not found")]
    BookNotFound(String),
    /// Raised for an unknown ISBN too when deleting.
    #[error("Review not found")]
    ReviewNotFound,
    #[error("No books available")]
    Unavailable,
}

impl CatalogError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            CatalogError::Validation(_) => 2001,
            CatalogError::BookNotFound(_) => 2003,
            CatalogError::ReviewNotFound => 2004,
            CatalogError::Unavailable => 2100,
        }
    }
}
