//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, entity structs, and repository implementations
//! for the `artists` and `reviews` tables.  No HTTP or business logic lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
