//! Service layer for the book catalog.
//! - `catalog`: book lookup, filtering and per-user reviews.
//! - `auth`: registration and login against the user store.
//! - `seeding`: builds both stores at startup.

pub mod errors;
pub mod auth;
pub mod catalog;
pub mod seeding;
#[cfg(test)]
pub mod test_support;
