use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Review {
    pub id: Uuid,
    pub job_id: Uuid,
    pub reviewer_id: Uuid,
    pub reviewee_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Aggregate over all reviews where the provider is the reviewee.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct RatingSummary {
    pub avg: f64,
    pub count: i64,
}
