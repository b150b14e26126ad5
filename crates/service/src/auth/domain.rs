use serde::{Deserialize, Serialize};

/// Registration input. Fields are optional so that a missing field is a
/// validation failure rather than a body parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterInput {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Result of a successful login. Carries no credential of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub username: String,
}
