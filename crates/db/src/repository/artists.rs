//! Postgres-backed artist repository.

use async_trait::async_trait;

use crate::models::Artist;
use crate::repository::ArtistRepository;
use crate::{DbError, DbPool};

/// `ArtistRepository` over a shared Postgres pool.
#[derive(Debug, Clone)]
pub struct PgArtistRepository {
    pool: DbPool,
}

impl PgArtistRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtistRepository for PgArtistRepository {
    async fn find_all(&self) -> Result<Vec<Artist>, DbError> {
        let rows = sqlx::query_as::<_, Artist>("SELECT id, name, genre, biography FROM artists")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Artist>, DbError> {
        let row = sqlx::query_as::<_, Artist>(
            "SELECT id, name, genre, biography FROM artists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, artist: Artist) -> Result<Artist, DbError> {
        let row = match artist.id {
            None => {
                sqlx::query_as::<_, Artist>(
                    r#"
                    INSERT INTO artists (name, genre, biography)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, genre, biography
                    "#,
                )
                .bind(&artist.name)
                .bind(&artist.genre)
                .bind(&artist.biography)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Artist>(
                    r#"
                    UPDATE artists
                    SET name = $2, genre = $3, biography = $4
                    WHERE id = $1
                    RETURNING id, name, genre, biography
                    "#,
                )
                .bind(id)
                .bind(&artist.name)
                .bind(&artist.genre)
                .bind(&artist.biography)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
