//! Postgres-backed review repository.

use async_trait::async_trait;

use crate::models::Review;
use crate::repository::ReviewRepository;
use crate::{DbError, DbPool};

/// `ReviewRepository` over a shared Postgres pool.
#[derive(Debug, Clone)]
pub struct PgReviewRepository {
    pool: DbPool,
}

impl PgReviewRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn find_all(&self) -> Result<Vec<Review>, DbError> {
        let rows =
            sqlx::query_as::<_, Review>("SELECT id, rating, comment, created_at FROM reviews")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DbError> {
        let row = sqlx::query_as::<_, Review>(
            "SELECT id, rating, comment, created_at FROM reviews WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, review: Review) -> Result<Review, DbError> {
        let row = match review.id {
            None => {
                // `created_at` is stamped by the caller; the NOT NULL column
                // rejects an unstamped insert as a constraint violation.
                sqlx::query_as::<_, Review>(
                    r#"
                    INSERT INTO reviews (rating, comment, created_at)
                    VALUES ($1, $2, $3)
                    RETURNING id, rating, comment, created_at
                    "#,
                )
                .bind(review.rating)
                .bind(&review.comment)
                .bind(review.created_at)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                // `created_at` is deliberately absent from the SET list.
                sqlx::query_as::<_, Review>(
                    r#"
                    UPDATE reviews
                    SET rating = $2, comment = $3
                    WHERE id = $1
                    RETURNING id, rating, comment, created_at
                    "#,
                )
                .bind(id)
                .bind(review.rating)
                .bind(&review.comment)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
