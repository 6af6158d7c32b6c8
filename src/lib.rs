pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
pub mod utils;

use std::sync::Arc;

use config::Config;
use db::db::DBClient;
use service::{matching_service::MatchingService, review_service::ReviewService};

#[derive(Debug, Clone)]
pub struct AppState {
    pub env: Config,
    pub db_client: Arc<DBClient>,
    pub matching_service: Arc<MatchingService>,
    pub review_service: Arc<ReviewService>,
}

impl AppState {
    pub fn new(db_client: DBClient, config: Config) -> Self {
        let db_client = Arc::new(db_client);

        let matching_service = Arc::new(MatchingService::new(db_client.clone()));
        let review_service = Arc::new(ReviewService::new(db_client.clone()));

        Self {
            env: config,
            db_client,
            matching_service,
            review_service,
        }
    }
}
