use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};

use common::types::Message;
use service::auth::domain::{LoginInput, RegisterInput};

use super::body_or_default;
use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn register(
    State(state): State<ServerState>,
    body: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    state.auth.register(body_or_default(body)).await?;
    Ok((StatusCode::CREATED, Json(Message::new("User registered successfully"))))
}

/// Credential check only; the response carries no token or cookie.
pub async fn login(
    State(state): State<ServerState>,
    body: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<Message>, ApiError> {
    state.auth.login(body_or_default(body)).await?;
    Ok(Json(Message::new("Login successful")))
}
