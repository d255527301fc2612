//! Review use-case service.

use std::sync::Arc;

use chrono::Utc;
use db::repository::ReviewRepository;

use crate::dto::{ReviewDto, ReviewInput};
use crate::error::ApiError;
use crate::mappers::review;

/// Resource name used in not-found messages.
const RESOURCE: &str = "review";

/// CRUD orchestration for reviews over any `ReviewRepository`.
#[derive(Clone)]
pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(repo: Arc<dyn ReviewRepository>) -> Self {
        Self { repo }
    }

    /// Map the input to a transient entity, stamp its creation time, insert
    /// it, and return the persisted state.  The timestamp is assigned here,
    /// exactly once, not by a store-side default.
    pub async fn create(&self, input: ReviewInput) -> Result<ReviewDto, ApiError> {
        let mut draft = review::to_entity(input);
        draft.created_at = Some(Utc::now());
        let saved = self.repo.save(draft).await?;
        Ok(review::to_dto(saved))
    }

    /// Fetch by id; a miss is a `NotFound`, never a default.
    pub async fn get_by_id(&self, id: i64) -> Result<ReviewDto, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(review::to_dto)
            .ok_or(ApiError::NotFound { resource: RESOURCE, id })
    }

    /// Overwrite the mutable fields of an existing row.  Id and
    /// `created_at` are carried over from the fetched row untouched.
    pub async fn update(&self, id: i64, input: ReviewInput) -> Result<ReviewDto, ApiError> {
        let mut existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound { resource: RESOURCE, id })?;

        existing.rating = input.rating;
        existing.comment = input.comment;

        let updated = self.repo.save(existing).await?;
        Ok(review::to_dto(updated))
    }

    /// Delete-if-exists.  A missing row is not an error, so the affected
    /// count is ignored and a repeat call succeeds identically.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repo.delete_by_id(id).await?;
        Ok(())
    }

    /// All reviews, in store order.
    pub async fn list(&self) -> Result<Vec<ReviewDto>, ApiError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(review::to_dto).collect())
    }
}
