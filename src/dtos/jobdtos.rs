use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const MAX_SEARCH_RESULTS: i64 = 50;
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 5.0;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateJobDto {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: String,

    pub longitude: f64,
    pub latitude: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SearchJobsDto {
    pub category: Option<String>,

    pub lng: f64,
    pub lat: f64,

    #[validate(range(min = 0.001, message = "Radius must be positive"))]
    pub radius_km: Option<f64>,

    #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateProposalDto {
    #[serde(default)]
    pub message: String,

    #[validate(range(min = 0.01, message = "Bid amount must be positive"))]
    pub bid_amount: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AcceptProposalDto {
    pub proposal_id: Uuid,
}

// Response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_job_requires_title_and_category() {
        let dto = CreateJobDto {
            title: "".to_string(),
            description: "".to_string(),
            category: "plumber".to_string(),
            longitude: 77.209,
            latitude: 28.6139,
        };
        assert!(dto.validate().is_err());

        let dto = CreateJobDto {
            title: "Fix kitchen sink".to_string(),
            description: "".to_string(),
            category: "".to_string(),
            longitude: 77.209,
            latitude: 28.6139,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn proposal_bid_must_be_positive() {
        let dto = CreateProposalDto {
            message: "can do".to_string(),
            bid_amount: 0.0,
        };
        assert!(dto.validate().is_err());

        let dto = CreateProposalDto {
            message: "can do".to_string(),
            bid_amount: 500.0,
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn search_limit_is_bounded() {
        let dto = SearchJobsDto {
            category: None,
            lng: 77.0,
            lat: 28.0,
            radius_km: Some(5.0),
            limit: Some(200),
        };
        assert!(dto.validate().is_err());
    }
}
