pub mod error;
pub mod matching_service;
pub mod review_service;
