pub mod jobs;
pub mod reviews;
