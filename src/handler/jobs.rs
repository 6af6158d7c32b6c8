use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    db::{jobdb::JobExt, proposaldb::ProposalExt},
    dtos::jobdtos::*,
    error::HttpError,
    middleware::{check_role, AuthUser},
    models::usermodel::UserRole,
    utils::geo,
    AppState,
};

pub fn jobs_handler() -> Router {
    Router::new()
        .route("/", post(create_job))
        .route("/", get(search_jobs))
        .route("/me/requester", get(my_jobs))
        .route("/me/provider", get(my_proposals))
        .route("/:job_id", get(get_job_details))
        .route("/:job_id/claim", post(claim_job))
        .route("/:job_id/accept", post(accept_proposal))
        .route("/:job_id/proposals", get(get_job_proposals))
        .route("/:job_id/complete", post(complete_job))
}

pub async fn create_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateJobDto>,
) -> Result<impl IntoResponse, HttpError> {
    check_role(&auth, UserRole::Requester)?;

    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    geo::validate_point(body.longitude, body.latitude).map_err(HttpError::bad_request)?;

    let job = app_state
        .db_client
        .create_job(
            auth.user_id,
            body.title,
            body.description,
            body.category,
            body.longitude,
            body.latitude,
        )
        .await
        .map_err(|e| {
            tracing::error!("failed to create job: {}", e);
            HttpError::server_error("Failed to create job")
        })?;

    Ok(Json(ApiResponse::success("Job created successfully", job)))
}

pub async fn search_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(_auth): Extension<AuthUser>,
    Query(params): Query<SearchJobsDto>,
) -> Result<impl IntoResponse, HttpError> {
    params
        .validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    geo::validate_point(params.lng, params.lat).map_err(HttpError::bad_request)?;

    let radius_km = params.radius_km.unwrap_or(DEFAULT_SEARCH_RADIUS_KM);
    let limit = params
        .limit
        .unwrap_or(MAX_SEARCH_RESULTS)
        .clamp(1, MAX_SEARCH_RESULTS);

    let jobs = app_state
        .db_client
        .find_nearby_jobs(params.category, params.lng, params.lat, radius_km, limit)
        .await
        .map_err(|e| {
            tracing::error!("job search failed: {}", e);
            HttpError::server_error("Job search failed")
        })?;

    Ok(Json(ApiResponse::success("Jobs retrieved successfully", jobs)))
}

pub async fn get_job_details(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let job = app_state
        .db_client
        .get_job_by_id(job_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to load job {}: {}", job_id, e);
            HttpError::server_error("Failed to load job")
        })?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    Ok(Json(ApiResponse::success(
        "Job details retrieved successfully",
        job,
    )))
}

pub async fn claim_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
    Json(body): Json<CreateProposalDto>,
) -> Result<impl IntoResponse, HttpError> {
    check_role(&auth, UserRole::Provider)?;

    body.validate()
        .map_err(|e| HttpError::bad_request(e.to_string()))?;

    // The job must exist, but its status is not checked: a bid against an
    // already-assigned job is allowed and simply never wins.
    app_state
        .db_client
        .get_job_by_id(job_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to load job {}: {}", job_id, e);
            HttpError::server_error("Failed to load job")
        })?
        .ok_or_else(|| HttpError::not_found("Job not found"))?;

    let proposal = app_state
        .db_client
        .create_proposal(job_id, auth.user_id, body.message, body.bid_amount)
        .await
        .map_err(|e| {
            tracing::error!("failed to create proposal: {}", e);
            HttpError::server_error("Failed to create proposal")
        })?;

    Ok(Json(ApiResponse::success(
        "Proposal submitted successfully",
        proposal,
    )))
}

pub async fn accept_proposal(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
    Json(body): Json<AcceptProposalDto>,
) -> Result<impl IntoResponse, HttpError> {
    check_role(&auth, UserRole::Requester)?;

    let job = app_state
        .matching_service
        .accept_proposal(job_id, body.proposal_id, auth.user_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ApiResponse::success(
        "Proposal accepted successfully",
        job,
    )))
}

pub async fn get_job_proposals(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let proposals = app_state
        .db_client
        .get_proposals_by_job(job_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to list proposals for job {}: {}", job_id, e);
            HttpError::server_error("Failed to list proposals")
        })?;

    Ok(Json(ApiResponse::success(
        "Proposals retrieved successfully",
        proposals,
    )))
}

pub async fn my_jobs(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    check_role(&auth, UserRole::Requester)?;

    let jobs = app_state
        .db_client
        .get_jobs_by_requester(auth.user_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to list jobs for requester {}: {}", auth.user_id, e);
            HttpError::server_error("Failed to list jobs")
        })?;

    Ok(Json(ApiResponse::success("Jobs retrieved successfully", jobs)))
}

pub async fn my_proposals(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, HttpError> {
    check_role(&auth, UserRole::Provider)?;

    let proposals = app_state
        .db_client
        .get_proposals_by_provider(auth.user_id)
        .await
        .map_err(|e| {
            tracing::error!("failed to list proposals for provider {}: {}", auth.user_id, e);
            HttpError::server_error("Failed to list proposals")
        })?;

    Ok(Json(ApiResponse::success(
        "Proposals retrieved successfully",
        proposals,
    )))
}

pub async fn complete_job(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Path(job_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    check_role(&auth, UserRole::Requester)?;

    let job = app_state
        .matching_service
        .complete_job(job_id, auth.user_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ApiResponse::success(
        "Job completed successfully",
        job,
    )))
}
