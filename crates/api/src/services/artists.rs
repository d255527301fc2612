//! Artist use-case service.

use std::sync::Arc;

use db::repository::ArtistRepository;

use crate::dto::{ArtistDto, ArtistInput};
use crate::error::ApiError;
use crate::mappers::artist;

/// Resource name used in not-found messages.
const RESOURCE: &str = "artist";

/// CRUD orchestration for artists over any `ArtistRepository`.
#[derive(Clone)]
pub struct ArtistService {
    repo: Arc<dyn ArtistRepository>,
}

impl ArtistService {
    pub fn new(repo: Arc<dyn ArtistRepository>) -> Self {
        Self { repo }
    }

    /// Map the input to a transient entity, insert it, and return the
    /// persisted state with its store-assigned id.
    pub async fn create(&self, input: ArtistInput) -> Result<ArtistDto, ApiError> {
        let draft = artist::to_entity(input);
        let saved = self.repo.save(draft).await?;
        Ok(artist::to_dto(saved))
    }

    /// Fetch by id; a miss is a `NotFound`, never a default.
    pub async fn get_by_id(&self, id: i64) -> Result<ArtistDto, ApiError> {
        self.repo
            .find_by_id(id)
            .await?
            .map(artist::to_dto)
            .ok_or(ApiError::NotFound { resource: RESOURCE, id })
    }

    /// Overwrite the mutable fields of an existing row.  The id is carried
    /// over from the fetched row, so it cannot change.
    pub async fn update(&self, id: i64, input: ArtistInput) -> Result<ArtistDto, ApiError> {
        let mut existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound { resource: RESOURCE, id })?;

        existing.name = input.name;
        existing.genre = input.genre;
        existing.biography = input.biography;

        let updated = self.repo.save(existing).await?;
        Ok(artist::to_dto(updated))
    }

    /// Delete-if-exists.  A missing row is not an error, so the affected
    /// count is ignored and a repeat call succeeds identically.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repo.delete_by_id(id).await?;
        Ok(())
    }

    /// All artists, in store order.
    pub async fn list(&self) -> Result<Vec<ArtistDto>, ApiError> {
        let rows = self.repo.find_all().await?;
        Ok(rows.into_iter().map(artist::to_dto).collect())
    }
}
