#![cfg(test)]
use std::sync::Arc;

use crate::catalog::{repository::memory::InMemoryCatalogRepository, CatalogService};

/// A fresh catalog holding the built-in seed; no state is shared between tests.
pub fn seeded_catalog() -> CatalogService<InMemoryCatalogRepository> {
    CatalogService::new(Arc::new(InMemoryCatalogRepository::new(models::seed::builtin_books())))
}

pub fn unavailable_catalog() -> CatalogService<InMemoryCatalogRepository> {
    CatalogService::new(Arc::new(InMemoryCatalogRepository::unavailable()))
}
