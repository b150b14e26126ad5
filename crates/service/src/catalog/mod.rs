//! Catalog access and review mutation.
//!
//! The set of books is fixed once seeded; only each book's reviews change.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;

pub use service::CatalogService;
