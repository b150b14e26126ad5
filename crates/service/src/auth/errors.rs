use thiserror::Error;

/// Business errors for auth workflows.
///
/// The display text is what clients see in the `message` field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Username and password required")]
    Validation,
    #[error("Username already exists")]
    Conflict,
    /// Same error for unknown user and wrong password.
    #[error("Invalid username or password")]
    Unauthorized,
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation => 1001,
            AuthError::Conflict => 1002,
            AuthError::Unauthorized => 1004,
        }
    }
}
