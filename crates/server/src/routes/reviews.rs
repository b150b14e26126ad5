use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Serialize;

use models::Reviews;
use service::catalog::domain::{DeleteReviewInput, ReviewInput};
use service::catalog::errors::CatalogError;

use super::body_or_default;
use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Serialize)]
pub struct ReviewsOutput {
    pub message: &'static str,
    pub reviews: Reviews,
}

/// `PUT /auth/review/:isbn`: the body's `username` is trusted as-is.
pub async fn put_review(
    State(state): State<ServerState>,
    Path(isbn): Path<String>,
    body: Result<Json<ReviewInput>, JsonRejection>,
) -> Result<Json<ReviewsOutput>, ApiError> {
    let reviews = state
        .catalog
        .upsert_review(&isbn, body_or_default(body))
        .await
        .map_err(|e| match e {
            CatalogError::BookNotFound(_) => ApiError::not_found("Book not found"),
            e => e.into(),
        })?;
    Ok(Json(ReviewsOutput { message: "Review added/updated", reviews }))
}

pub async fn delete_review(
    State(state): State<ServerState>,
    Path(isbn): Path<String>,
    body: Result<Json<DeleteReviewInput>, JsonRejection>,
) -> Result<Json<ReviewsOutput>, ApiError> {
    let reviews = state.catalog.delete_review(&isbn, body_or_default(body)).await?;
    Ok(Json(ReviewsOutput { message: "Review deleted", reviews }))
}
