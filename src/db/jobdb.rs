use async_trait::async_trait;
use sqlx::{types::BigDecimal, Error};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::jobmodel::Job;

#[async_trait]
pub trait JobExt {
    async fn create_job(
        &self,
        requester_id: Uuid,
        title: String,
        description: String,
        category: String,
        longitude: f64,
        latitude: f64,
    ) -> Result<Job, Error>;

    async fn get_job_by_id(&self, job_id: Uuid) -> Result<Option<Job>, Error>;

    async fn get_jobs_by_requester(&self, requester_id: Uuid) -> Result<Vec<Job>, Error>;

    /// Great-circle search over job locations, nearest first. No status filter:
    /// assigned and completed jobs still appear in results.
    async fn find_nearby_jobs(
        &self,
        category: Option<String>,
        longitude: f64,
        latitude: f64,
        radius_km: f64,
        limit: i64,
    ) -> Result<Vec<Job>, Error>;

    /// Atomically assigns the job to the proposal's provider, flips the
    /// accepted proposal and bulk-rejects every sibling. The job update is
    /// conditional on `status = 'open'`; returns `None` when the job is
    /// missing or no longer open, so a lost race surfaces as a conflict
    /// instead of a double assignment.
    async fn assign_job(
        &self,
        job_id: Uuid,
        proposal_id: Uuid,
        provider_id: Uuid,
    ) -> Result<Option<Job>, Error>;

    /// Conditional on `status = 'assigned'`; finalizes the mock payment from
    /// the accepted bid. Returns `None` when the precondition no longer holds.
    async fn complete_job(&self, job_id: Uuid, amount: BigDecimal) -> Result<Option<Job>, Error>;
}

#[async_trait]
impl JobExt for DBClient {
    async fn create_job(
        &self,
        requester_id: Uuid,
        title: String,
        description: String,
        category: String,
        longitude: f64,
        latitude: f64,
    ) -> Result<Job, Error> {
        sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs
            (requester_id, title, description, category, longitude, latitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING
                id, requester_id, assigned_provider_id, accepted_proposal_id,
                title, description, category,
                longitude, latitude,
                status,
                payment_amount, payment_currency, payment_status, paid_at,
                completed_at, created_at, updated_at
            "#,
        )
        .bind(requester_id)
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(longitude)
        .bind(latitude)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_job_by_id(&self, job_id: Uuid) -> Result<Option<Job>, Error> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT
                id, requester_id, assigned_provider_id, accepted_proposal_id,
                title, description, category,
                longitude, latitude,
                status,
                payment_amount, payment_currency, payment_status, paid_at,
                completed_at, created_at, updated_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_jobs_by_requester(&self, requester_id: Uuid) -> Result<Vec<Job>, Error> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT
                id, requester_id, assigned_provider_id, accepted_proposal_id,
                title, description, category,
                longitude, latitude,
                status,
                payment_amount, payment_currency, payment_status, paid_at,
                completed_at, created_at, updated_at
            FROM jobs
            WHERE requester_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(requester_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn find_nearby_jobs(
        &self,
        category: Option<String>,
        longitude: f64,
        latitude: f64,
        radius_km: f64,
        limit: i64,
    ) -> Result<Vec<Job>, Error> {
        sqlx::query_as::<_, Job>(
            r#"
            SELECT
                id, requester_id, assigned_provider_id, accepted_proposal_id,
                title, description, category,
                longitude, latitude,
                status,
                payment_amount, payment_currency, payment_status, paid_at,
                completed_at, created_at, updated_at
            FROM (
                SELECT j.*,
                    6371.0 * acos(LEAST(1.0, GREATEST(-1.0,
                        cos(radians($2)) * cos(radians(j.latitude))
                            * cos(radians(j.longitude) - radians($1))
                        + sin(radians($2)) * sin(radians(j.latitude))
                    ))) AS distance_km
                FROM jobs j
                WHERE $3::VARCHAR IS NULL OR j.category = $3
            ) nearby
            WHERE distance_km <= $4
            ORDER BY distance_km ASC
            LIMIT $5
            "#,
        )
        .bind(longitude)
        .bind(latitude)
        .bind(category)
        .bind(radius_km)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn assign_job(
        &self,
        job_id: Uuid,
        proposal_id: Uuid,
        provider_id: Uuid,
    ) -> Result<Option<Job>, Error> {
        let mut tx = self.pool.begin().await?;

        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET status = 'assigned'::job_status,
                assigned_provider_id = $2,
                accepted_proposal_id = $3,
                updated_at = NOW()
            WHERE id = $1 AND status = 'open'::job_status
            RETURNING
                id, requester_id, assigned_provider_id, accepted_proposal_id,
                title, description, category,
                longitude, latitude,
                status,
                payment_amount, payment_currency, payment_status, paid_at,
                completed_at, created_at, updated_at
            "#,
        )
        .bind(job_id)
        .bind(provider_id)
        .bind(proposal_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(job) = job else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("UPDATE proposals SET status = 'accepted'::proposal_status WHERE id = $1")
            .bind(proposal_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE proposals SET status = 'rejected'::proposal_status WHERE job_id = $1 AND id <> $2",
        )
        .bind(job_id)
        .bind(proposal_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(job))
    }

    async fn complete_job(&self, job_id: Uuid, amount: BigDecimal) -> Result<Option<Job>, Error> {
        sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET status = 'completed'::job_status,
                completed_at = NOW(),
                payment_amount = $2,
                payment_status = 'paid'::payment_status,
                paid_at = NOW(),
                updated_at = NOW()
            WHERE id = $1 AND status = 'assigned'::job_status
            RETURNING
                id, requester_id, assigned_provider_id, accepted_proposal_id,
                title, description, category,
                longitude, latitude,
                status,
                payment_amount, payment_currency, payment_status, paid_at,
                completed_at, created_at, updated_at
            "#,
        )
        .bind(job_id)
        .bind(amount)
        .fetch_optional(&self.pool)
        .await
    }
}
