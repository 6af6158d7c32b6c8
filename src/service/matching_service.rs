use std::sync::Arc;

use bigdecimal::BigDecimal;
use uuid::Uuid;

use crate::db::db::DBClient;
use crate::db::jobdb::JobExt;
use crate::db::proposaldb::ProposalExt;
use crate::models::jobmodel::{Job, JobStatus};
use crate::service::error::ServiceError;

/// Orchestrates the job state machine: open -> assigned -> completed.
/// All transition writes go through conditional updates in the store, so two
/// concurrent accepts (or completes) can never both succeed.
#[derive(Debug, Clone)]
pub struct MatchingService {
    db_client: Arc<DBClient>,
}

impl MatchingService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn accept_proposal(
        &self,
        job_id: Uuid,
        proposal_id: Uuid,
        user_id: Uuid,
    ) -> Result<Job, ServiceError> {
        let proposal = self
            .db_client
            .get_proposal_by_id(proposal_id)
            .await?
            .ok_or(ServiceError::ProposalNotFound(proposal_id))?;

        let job = self
            .db_client
            .get_job_by_id(job_id)
            .await?
            .ok_or(ServiceError::JobNotFound(job_id))?;

        if job.requester_id != user_id {
            return Err(ServiceError::NotJobOwner { user_id, job_id });
        }

        if proposal.job_id != job_id {
            return Err(ServiceError::ProposalJobMismatch { proposal_id, job_id });
        }

        if job.status != JobStatus::Open {
            return Err(ServiceError::AlreadyAssigned(job_id));
        }

        let assigned = self
            .db_client
            .assign_job(job_id, proposal_id, proposal.provider_id)
            .await?
            // The conditional update saw a non-open job: a concurrent accept
            // won the race between our status check and the write.
            .ok_or(ServiceError::AlreadyAssigned(job_id))?;

        tracing::info!(
            "job {} assigned to provider {} via proposal {}",
            assigned.id,
            proposal.provider_id,
            proposal_id
        );

        Ok(assigned)
    }

    pub async fn complete_job(&self, job_id: Uuid, user_id: Uuid) -> Result<Job, ServiceError> {
        let job = self
            .db_client
            .get_job_by_id(job_id)
            .await?
            .ok_or(ServiceError::JobNotFound(job_id))?;

        if job.requester_id != user_id {
            return Err(ServiceError::NotJobOwner { user_id, job_id });
        }

        if job.status != JobStatus::Assigned {
            return Err(ServiceError::JobNotAssigned(job_id, job.status));
        }

        // Mock payment: copy the accepted bid. A missing proposal settles as 0.
        let amount = match job.accepted_proposal_id {
            Some(proposal_id) => self
                .db_client
                .get_proposal_by_id(proposal_id)
                .await?
                .map(|p| p.bid_amount)
                .unwrap_or_else(|| BigDecimal::from(0)),
            None => BigDecimal::from(0),
        };

        let completed = self
            .db_client
            .complete_job(job_id, amount)
            .await?
            .ok_or(ServiceError::JobNotAssigned(job_id, job.status))?;

        tracing::info!("job {} completed, payment marked paid", completed.id);

        Ok(completed)
    }
}
