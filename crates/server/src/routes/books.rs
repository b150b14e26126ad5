use axum::{
    extract::{Path, State},
    Json,
};

use models::book::CatalogListing;
use models::{Book, Reviews};

use crate::errors::ApiError;
use crate::state::ServerState;

/// `GET /`: the whole catalog as an ISBN-keyed object.
pub async fn list_books(State(state): State<ServerState>) -> Result<Json<CatalogListing>, ApiError> {
    Ok(Json(state.catalog.list_all().await?))
}

pub async fn book_by_isbn(
    State(state): State<ServerState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, ApiError> {
    Ok(Json(state.catalog.find_by_isbn(&isbn).await?))
}

pub async fn books_by_author(
    State(state): State<ServerState>,
    Path(author): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.catalog.filter_by_author(&author).await?))
}

pub async fn books_by_title(
    State(state): State<ServerState>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Book>>, ApiError> {
    Ok(Json(state.catalog.filter_by_title(&title).await?))
}

pub async fn reviews_by_isbn(
    State(state): State<ServerState>,
    Path(isbn): Path<String>,
) -> Result<Json<Reviews>, ApiError> {
    Ok(Json(state.catalog.reviews(&isbn).await?))
}
