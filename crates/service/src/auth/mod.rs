//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration and login against the in-memory user store. No token or
//! session is issued; see [`service::AuthService::login`].

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;

pub use service::AuthService;
