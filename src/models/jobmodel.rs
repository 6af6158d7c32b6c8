use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "job_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Open,
    Assigned,
    Completed,
}

impl JobStatus {
    pub fn to_str(&self) -> &str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Assigned => "assigned",
            JobStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn to_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "proposal_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ProposalStatus {
    pub fn to_str(&self) -> &str {
        match self {
            ProposalStatus::Pending => "pending",
            ProposalStatus::Accepted => "accepted",
            ProposalStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub assigned_provider_id: Option<Uuid>,
    pub accepted_proposal_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub longitude: f64,
    pub latitude: f64,
    pub status: JobStatus,
    pub payment_amount: BigDecimal,
    pub payment_currency: String,
    pub payment_status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Proposal {
    pub id: Uuid,
    pub job_id: Uuid,
    pub provider_id: Uuid,
    pub message: String,
    pub bid_amount: BigDecimal,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
}

/// Read-side join of a proposal with display fields of its parent job,
/// used for the provider's "my bids" listing.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProposalWithJob {
    pub id: Uuid,
    pub job_id: Uuid,
    pub provider_id: Uuid,
    pub message: String,
    pub bid_amount: BigDecimal,
    pub status: ProposalStatus,
    pub created_at: DateTime<Utc>,
    pub job_title: String,
    pub job_category: String,
    pub job_status: JobStatus,
    pub job_requester_id: Uuid,
}
