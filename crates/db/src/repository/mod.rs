//! Repository traits and their implementations.
//!
//! Each entity gets one trait covering the full single-row CRUD surface.
//! Absence is data here: `find_by_id` returns `Option` and the caller
//! decides whether a miss is an error.  `delete_by_id` reports rows
//! affected and never fails on a missing row.

use async_trait::async_trait;

use crate::models::{Artist, Review};
use crate::DbError;

pub mod artists;
pub mod memory;
pub mod reviews;

pub use artists::PgArtistRepository;
pub use reviews::PgReviewRepository;

/// Persistence operations for the `artists` table.
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// All rows, in store order.
    async fn find_all(&self) -> Result<Vec<Artist>, DbError>;

    /// A single row by primary key, `None` on a miss.
    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, DbError>;

    /// Insert when `artist.id` is `None` (the store assigns the id),
    /// update the matching row otherwise.  Returns the persisted state.
    async fn save(&self, artist: Artist) -> Result<Artist, DbError>;

    /// Delete the row if it exists; returns the number of rows removed.
    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError>;
}

/// Persistence operations for the `reviews` table.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// All rows, in store order.
    async fn find_all(&self) -> Result<Vec<Review>, DbError>;

    /// A single row by primary key, `None` on a miss.
    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DbError>;

    /// Insert when `review.id` is `None`, update the matching row otherwise.
    async fn save(&self, review: Review) -> Result<Review, DbError>;

    /// Delete the row if it exists; returns the number of rows removed.
    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError>;
}
