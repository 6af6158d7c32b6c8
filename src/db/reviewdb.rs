use async_trait::async_trait;
use sqlx::Error;
use uuid::Uuid;

use super::db::DBClient;
use crate::models::reviewmodel::{RatingSummary, Review};

#[async_trait]
pub trait ReviewExt {
    /// Inserts a review. The UNIQUE (job_id, reviewer_id) constraint is the
    /// duplicate guard; callers map the unique violation to a conflict.
    async fn create_review(
        &self,
        job_id: Uuid,
        reviewer_id: Uuid,
        reviewee_id: Uuid,
        rating: i32,
        comment: String,
    ) -> Result<Review, Error>;

    async fn get_provider_rating_summary(
        &self,
        provider_id: Uuid,
    ) -> Result<RatingSummary, Error>;

    async fn get_provider_reviews(
        &self,
        provider_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Review>, Error>;
}

#[async_trait]
impl ReviewExt for DBClient {
    async fn create_review(
        &self,
        job_id: Uuid,
        reviewer_id: Uuid,
        reviewee_id: Uuid,
        rating: i32,
        comment: String,
    ) -> Result<Review, Error> {
        sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews
            (job_id, reviewer_id, reviewee_id, rating, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, job_id, reviewer_id, reviewee_id, rating, comment, created_at
            "#,
        )
        .bind(job_id)
        .bind(reviewer_id)
        .bind(reviewee_id)
        .bind(rating)
        .bind(comment)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_provider_rating_summary(
        &self,
        provider_id: Uuid,
    ) -> Result<RatingSummary, Error> {
        sqlx::query_as::<_, RatingSummary>(
            r#"
            SELECT
                COALESCE(ROUND(AVG(rating)::NUMERIC, 2), 0)::FLOAT8 AS avg,
                COUNT(*) AS count
            FROM reviews
            WHERE reviewee_id = $1
            "#,
        )
        .bind(provider_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_provider_reviews(
        &self,
        provider_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Review>, Error> {
        sqlx::query_as::<_, Review>(
            r#"
            SELECT id, job_id, reviewer_id, reviewee_id, rating, comment, created_at
            FROM reviews
            WHERE reviewee_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(provider_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }
}
