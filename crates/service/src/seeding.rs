//! Builds the process-wide stores from configuration.

use std::path::Path;

use tracing::info;

use models::{seed, Book, User};

use crate::auth::repository::memory::InMemoryUserRepository;
use crate::catalog::repository::memory::InMemoryCatalogRepository;
use crate::errors::ServiceError;

/// Books from the seed file if one is given, otherwise the built-in catalog.
pub async fn load_books(seed_path: Option<&Path>) -> Result<Vec<Book>, ServiceError> {
    let Some(path) = seed_path else {
        return Ok(seed::builtin_books());
    };
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ServiceError::Io(format!("{}: {e}", path.display())))?;
    let books = seed::parse_seed(&text)?;
    info!(path = %path.display(), books = books.len(), "catalog seed loaded");
    Ok(books)
}

pub async fn catalog_repository(seed_path: Option<&Path>) -> Result<InMemoryCatalogRepository, ServiceError> {
    Ok(InMemoryCatalogRepository::new(load_books(seed_path).await?))
}

pub fn user_repository(seed: impl IntoIterator<Item = User>) -> InMemoryUserRepository {
    InMemoryUserRepository::with_users(seed)
}
