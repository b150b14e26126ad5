use serde::{Deserialize, Serialize};

/// Body of a review upsert.
///
/// `username` is taken on trust: it is not checked against any login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewInput {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub review: Option<String>,
}

/// Body of a review deletion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteReviewInput {
    #[serde(default)]
    pub username: Option<String>,
}
