use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use crate::error::{ErrorMessage, HttpError};
use crate::models::jobmodel::JobStatus;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Job not found")]
    JobNotFound(Uuid),

    #[error("Proposal not found")]
    ProposalNotFound(Uuid),

    #[error("Not your job")]
    NotJobOwner { user_id: Uuid, job_id: Uuid },

    #[error("Proposal does not belong to this job")]
    ProposalJobMismatch { proposal_id: Uuid, job_id: Uuid },

    #[error("Job not in assigned state")]
    JobNotAssigned(Uuid, JobStatus),

    #[error("Job not completed")]
    JobNotCompleted(Uuid, JobStatus),

    #[error("No provider assigned")]
    NoProviderAssigned(Uuid),

    #[error("Job already assigned")]
    AlreadyAssigned(Uuid),

    #[error("Review already submitted")]
    DuplicateReview(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::JobNotFound(_) | ServiceError::ProposalNotFound(_) => {
                StatusCode::NOT_FOUND
            }

            ServiceError::NotJobOwner { .. } => StatusCode::FORBIDDEN,

            ServiceError::ProposalJobMismatch { .. } | ServiceError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }

            ServiceError::JobNotAssigned(_, _)
            | ServiceError::JobNotCompleted(_, _)
            | ServiceError::NoProviderAssigned(_) => StatusCode::UNPROCESSABLE_ENTITY,

            ServiceError::AlreadyAssigned(_) | ServiceError::DuplicateReview(_) => {
                StatusCode::CONFLICT
            }

            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(error: ServiceError) -> Self {
        // Storage internals never reach the client; the underlying error
        // only goes to the log.
        if let ServiceError::Database(ref e) = error {
            tracing::error!("database error: {}", e);
            return HttpError::server_error(ErrorMessage::ServerError.to_string());
        }

        HttpError::new(error.to_string(), error.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_taxonomy() {
        let id = Uuid::new_v4();

        assert_eq!(ServiceError::JobNotFound(id).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServiceError::ProposalNotFound(id).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::NotJobOwner { user_id: id, job_id: id }.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::ProposalJobMismatch { proposal_id: id, job_id: id }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::JobNotAssigned(id, JobStatus::Open).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServiceError::AlreadyAssigned(id).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::DuplicateReview(id).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn database_errors_surface_as_generic_500() {
        let http: HttpError = ServiceError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(http.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!http.message.to_lowercase().contains("row"));
    }

    #[test]
    fn owner_check_message_is_stable() {
        let id = Uuid::new_v4();
        let err = ServiceError::NotJobOwner { user_id: id, job_id: id };
        assert_eq!(err.to_string(), "Not your job");
    }
}
