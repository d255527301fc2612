//! In-memory repositories for tests and local development.
//!
//! Rows live in a `BTreeMap` behind an `Arc<RwLock<_>>`; ids are assigned
//! from a monotonic counter starting at 1, mirroring the `BIGSERIAL`
//! columns.  Data is not persisted and is lost when the store is dropped.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Artist, Review};
use crate::repository::{ArtistRepository, ReviewRepository};
use crate::DbError;

/// In-memory `ArtistRepository`.
#[derive(Debug, Clone)]
pub struct InMemoryArtistRepository {
    rows: Arc<RwLock<BTreeMap<i64, Artist>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryArtistRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryArtistRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl ArtistRepository for InMemoryArtistRepository {
    async fn find_all(&self) -> Result<Vec<Artist>, DbError> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, DbError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn save(&self, mut artist: Artist) -> Result<Artist, DbError> {
        let mut rows = self.rows.write().await;
        let id = match artist.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                artist.id = Some(id);
                id
            }
        };
        rows.insert(id, artist.clone());
        Ok(artist)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&id).map_or(0, |_| 1))
    }
}

/// In-memory `ReviewRepository`.
#[derive(Debug, Clone)]
pub struct InMemoryReviewRepository {
    rows: Arc<RwLock<BTreeMap<i64, Review>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn find_all(&self) -> Result<Vec<Review>, DbError> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DbError> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn save(&self, mut review: Review) -> Result<Review, DbError> {
        let mut rows = self.rows.write().await;
        let id = match review.id {
            Some(id) => id,
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                review.id = Some(id);
                id
            }
        };
        rows.insert(id, review.clone());
        Ok(review)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&id).map_or(0, |_| 1))
    }
}
