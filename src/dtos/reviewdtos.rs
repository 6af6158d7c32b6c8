use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Rating bounds are checked by the review service, after the job-existence,
// ownership and status checks, so an out-of-range rating never masks a 404
// or a 422.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateReviewDto {
    pub job_id: Uuid,

    pub rating: i32,

    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct ListReviewsDto {
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_defaults_to_empty() {
        let dto: CreateReviewDto = serde_json::from_str(
            &format!(r#"{{"job_id":"{}","rating":4}}"#, Uuid::new_v4()),
        )
        .unwrap();
        assert_eq!(dto.rating, 4);
        assert_eq!(dto.comment, "");
    }
}
