#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

use localpro::config::Config;
use localpro::db::db::DBClient;
use localpro::models::usermodel::UserRole;
use localpro::routes::create_router;
use localpro::utils::token::create_token;
use localpro::AppState;

pub const TEST_JWT_SECRET: &str = "integration-test-jwt-secret";

/// Build a test `Config` with safe defaults. The database URL is unused:
/// tests get their pool from `#[sqlx::test]`.
pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_maxage: 3600,
        port: 0,
    }
}

/// Build the application router over the given pool, mirroring the router
/// construction in `main.rs` so tests exercise the real middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let db_client = DBClient::new(pool);
    let app_state = Arc::new(AppState::new(db_client, test_config()));
    create_router(app_state)
}

/// Mint a bearer token the auth middleware will accept.
pub fn auth_token(user_id: Uuid, role: UserRole) -> String {
    create_token(&user_id, role, TEST_JWT_SECRET.as_bytes(), 3600)
        .expect("token creation should succeed")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// API-level seed helpers. Each builds a fresh app over the shared pool, so
// multi-step scenarios read like a sequence of independent client calls.
// ---------------------------------------------------------------------------

pub async fn api_get(pool: &PgPool, uri: &str, token: &str) -> Response {
    get_auth(build_test_app(pool.clone()), uri, token).await
}

pub async fn api_post(pool: &PgPool, uri: &str, token: &str, body: Value) -> Response {
    post_json_auth(build_test_app(pool.clone()), uri, body, token).await
}

/// Create a job through the API and return its id.
pub async fn seed_job(
    pool: &PgPool,
    requester_token: &str,
    title: &str,
    category: &str,
    lng: f64,
    lat: f64,
) -> Uuid {
    let body = serde_json::json!({
        "title": title,
        "description": "seeded by tests",
        "category": category,
        "longitude": lng,
        "latitude": lat,
    });
    let response = api_post(pool, "/api/jobs", requester_token, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK, "job creation should succeed");
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().parse().unwrap()
}

/// Submit a proposal through the API and return its id.
pub async fn seed_proposal(
    pool: &PgPool,
    provider_token: &str,
    job_id: Uuid,
    bid_amount: f64,
) -> Uuid {
    let body = serde_json::json!({
        "message": "I can take this job",
        "bid_amount": bid_amount,
    });
    let response = api_post(pool, &format!("/api/jobs/{job_id}/claim"), provider_token, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK, "claim should succeed");
    let json = body_json(response).await;
    json["data"]["id"].as_str().unwrap().parse().unwrap()
}

/// Drive a job all the way to completed: claim, accept, complete.
/// Returns the accepted proposal id.
pub async fn seed_completed_job(
    pool: &PgPool,
    requester_token: &str,
    provider_token: &str,
    job_id: Uuid,
    bid_amount: f64,
) -> Uuid {
    let proposal_id = seed_proposal(pool, provider_token, job_id, bid_amount).await;

    let response = api_post(
        pool,
        &format!("/api/jobs/{job_id}/accept"),
        requester_token,
        serde_json::json!({ "proposal_id": proposal_id }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK, "accept should succeed");

    let response = api_post(
        pool,
        &format!("/api/jobs/{job_id}/complete"),
        requester_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK, "complete should succeed");

    proposal_id
}
