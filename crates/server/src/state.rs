use std::sync::Arc;

use service::auth::{repository::memory::InMemoryUserRepository, AuthService};
use service::catalog::{repository::memory::InMemoryCatalogRepository, CatalogService};

pub type Catalog = CatalogService<InMemoryCatalogRepository>;
pub type Auth = AuthService<InMemoryUserRepository>;

/// Shared handler state. Cloning is cheap; both stores live behind `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<Catalog>,
    pub auth: Arc<Auth>,
}

impl ServerState {
    pub fn new(catalog: InMemoryCatalogRepository, users: InMemoryUserRepository) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(Arc::new(catalog))),
            auth: Arc::new(AuthService::new(Arc::new(users))),
        }
    }

    /// Built-in catalog and no users.
    pub fn seeded() -> Self {
        Self::new(
            InMemoryCatalogRepository::new(models::seed::builtin_books()),
            InMemoryUserRepository::new(),
        )
    }
}
