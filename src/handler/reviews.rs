use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::{
    dtos::jobdtos::ApiResponse,
    dtos::reviewdtos::*,
    error::HttpError,
    middleware::{auth, check_role, AuthUser},
    models::usermodel::UserRole,
    AppState,
};

pub fn review_handler() -> Router {
    let protected = Router::new()
        .route("/", post(submit_review))
        .layer(middleware::from_fn(auth));

    // Summary and listing are public: anyone may look up a provider's rating.
    let public = Router::new()
        .route("/provider/:provider_id", get(get_provider_summary))
        .route("/provider/:provider_id/list", get(list_provider_reviews));

    protected.merge(public)
}

pub async fn submit_review(
    Extension(app_state): Extension<Arc<AppState>>,
    Extension(auth): Extension<AuthUser>,
    Json(body): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, HttpError> {
    check_role(&auth, UserRole::Requester)?;

    let review = app_state
        .review_service
        .submit_review(body.job_id, auth.user_id, body.rating, body.comment)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ApiResponse::success(
        "Review submitted successfully",
        review,
    )))
}

pub async fn get_provider_summary(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(provider_id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let summary = app_state
        .review_service
        .provider_summary(provider_id)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ApiResponse::success(
        "Rating summary retrieved successfully",
        summary,
    )))
}

pub async fn list_provider_reviews(
    Extension(app_state): Extension<Arc<AppState>>,
    Path(provider_id): Path<Uuid>,
    Query(params): Query<ListReviewsDto>,
) -> Result<impl IntoResponse, HttpError> {
    let reviews = app_state
        .review_service
        .provider_reviews(provider_id, params.limit)
        .await
        .map_err(HttpError::from)?;

    Ok(Json(ApiResponse::success(
        "Reviews retrieved successfully",
        reviews,
    )))
}
