//! Shared application state handed to every handler.

use std::sync::Arc;

use db::repository::{
    ArtistRepository, PgArtistRepository, PgReviewRepository, ReviewRepository,
};
use db::DbPool;

use crate::services::{ArtistService, ReviewService};

/// One service per resource; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub artists: ArtistService,
    pub reviews: ReviewService,
}

impl AppState {
    /// Wire both services over Postgres repositories sharing `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self::with_repositories(
            Arc::new(PgArtistRepository::new(pool.clone())),
            Arc::new(PgReviewRepository::new(pool)),
        )
    }

    /// Wire both services over arbitrary repository implementations.
    /// Tests and local development use this with the in-memory stores.
    pub fn with_repositories(
        artists: Arc<dyn ArtistRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            artists: ArtistService::new(artists),
            reviews: ReviewService::new(reviews),
        }
    }
}
