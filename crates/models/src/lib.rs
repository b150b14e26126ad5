//! Plain data types for the catalog and the user store, plus the seed data
//! they are populated from at startup.

pub mod errors;
pub mod book;
pub mod user;
pub mod seed;
pub mod validate;

pub use book::{Book, Reviews};
pub use user::User;
