use async_trait::async_trait;
use sqlx::{types::BigDecimal, Error};
use uuid::Uuid;

use super::db::DBClient;
use crate::models::jobmodel::{Proposal, ProposalWithJob};

#[async_trait]
pub trait ProposalExt {
    /// Creates a pending proposal. The job's lifecycle status is deliberately
    /// not checked here: a bid against an already-assigned job is allowed and
    /// simply never becomes eligible for acceptance.
    async fn create_proposal(
        &self,
        job_id: Uuid,
        provider_id: Uuid,
        message: String,
        bid_amount: f64,
    ) -> Result<Proposal, Error>;

    async fn get_proposal_by_id(&self, proposal_id: Uuid) -> Result<Option<Proposal>, Error>;

    async fn get_proposals_by_job(&self, job_id: Uuid) -> Result<Vec<Proposal>, Error>;

    async fn get_proposals_by_provider(
        &self,
        provider_id: Uuid,
    ) -> Result<Vec<ProposalWithJob>, Error>;
}

#[async_trait]
impl ProposalExt for DBClient {
    async fn create_proposal(
        &self,
        job_id: Uuid,
        provider_id: Uuid,
        message: String,
        bid_amount: f64,
    ) -> Result<Proposal, Error> {
        let bid_amount_bd = BigDecimal::try_from(bid_amount)
            .map_err(|_| Error::Decode("Invalid bid amount".into()))?;

        sqlx::query_as::<_, Proposal>(
            r#"
            INSERT INTO proposals
            (job_id, provider_id, message, bid_amount)
            VALUES ($1, $2, $3, $4)
            RETURNING id, job_id, provider_id, message, bid_amount, status, created_at
            "#,
        )
        .bind(job_id)
        .bind(provider_id)
        .bind(message)
        .bind(bid_amount_bd)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_proposal_by_id(&self, proposal_id: Uuid) -> Result<Option<Proposal>, Error> {
        sqlx::query_as::<_, Proposal>(
            r#"
            SELECT id, job_id, provider_id, message, bid_amount, status, created_at
            FROM proposals
            WHERE id = $1
            "#,
        )
        .bind(proposal_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_proposals_by_job(&self, job_id: Uuid) -> Result<Vec<Proposal>, Error> {
        sqlx::query_as::<_, Proposal>(
            r#"
            SELECT id, job_id, provider_id, message, bid_amount, status, created_at
            FROM proposals
            WHERE job_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_proposals_by_provider(
        &self,
        provider_id: Uuid,
    ) -> Result<Vec<ProposalWithJob>, Error> {
        sqlx::query_as::<_, ProposalWithJob>(
            r#"
            SELECT
                p.id, p.job_id, p.provider_id, p.message, p.bid_amount,
                p.status, p.created_at,
                j.title AS job_title,
                j.category AS job_category,
                j.status AS job_status,
                j.requester_id AS job_requester_id
            FROM proposals p
            JOIN jobs j ON j.id = p.job_id
            WHERE p.provider_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(provider_id)
        .fetch_all(&self.pool)
        .await
    }
}
