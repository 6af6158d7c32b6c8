use std::sync::Arc;

use uuid::Uuid;

use crate::db::db::DBClient;
use crate::db::jobdb::JobExt;
use crate::db::reviewdb::ReviewExt;
use crate::models::jobmodel::JobStatus;
use crate::models::reviewmodel::{RatingSummary, Review};
use crate::service::error::ServiceError;

pub const DEFAULT_REVIEW_LIST_LIMIT: i64 = 50;

/// Write-once ratings from the requester to the assigned provider, plus
/// public aggregate statistics per provider.
#[derive(Debug, Clone)]
pub struct ReviewService {
    db_client: Arc<DBClient>,
}

impl ReviewService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn submit_review(
        &self,
        job_id: Uuid,
        reviewer_id: Uuid,
        rating: i32,
        comment: String,
    ) -> Result<Review, ServiceError> {
        let job = self
            .db_client
            .get_job_by_id(job_id)
            .await?
            .ok_or(ServiceError::JobNotFound(job_id))?;

        if job.requester_id != reviewer_id {
            return Err(ServiceError::NotJobOwner { user_id: reviewer_id, job_id });
        }

        if job.status != JobStatus::Completed {
            return Err(ServiceError::JobNotCompleted(job_id, job.status));
        }

        let reviewee_id = job
            .assigned_provider_id
            .ok_or(ServiceError::NoProviderAssigned(job_id))?;

        if !(1..=5).contains(&rating) {
            return Err(ServiceError::Validation(
                "Rating must be an integer between 1 and 5".to_string(),
            ));
        }

        // No read-then-write pre-check: the unique constraint on
        // (job_id, reviewer_id) decides, so concurrent duplicates lose too.
        match self
            .db_client
            .create_review(job_id, reviewer_id, reviewee_id, rating, comment)
            .await
        {
            Ok(review) => Ok(review),
            Err(e) if is_unique_violation(&e) => Err(ServiceError::DuplicateReview(job_id)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn provider_summary(&self, provider_id: Uuid) -> Result<RatingSummary, ServiceError> {
        let summary = self
            .db_client
            .get_provider_rating_summary(provider_id)
            .await?;
        Ok(summary)
    }

    pub async fn provider_reviews(
        &self,
        provider_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<Review>, ServiceError> {
        let limit = limit
            .unwrap_or(DEFAULT_REVIEW_LIST_LIMIT)
            .clamp(1, DEFAULT_REVIEW_LIST_LIMIT);
        let reviews = self
            .db_client
            .get_provider_reviews(provider_id, limit)
            .await?;
        Ok(reviews)
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .map(|e| e.is_unique_violation())
        .unwrap_or(false)
}
