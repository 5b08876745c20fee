use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        common_dto::{MessageResponse, OwnerQuery},
        job_dto::{CreateJobPayload, UpdateJobPayload},
    },
    error::Result,
    middleware::auth::{ensure_owner_or_admin, Claims},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    params(OwnerQuery),
    responses((status = 200, description = "Job postings"))
)]
#[axum::debug_handler]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<impl IntoResponse> {
    let jobs = match query.user_id.as_deref().filter(|u| !u.is_empty()) {
        Some(user_id) => state.job_service.list_by_user(user_id).await?,
        None => state.job_service.list().await?,
    };
    Ok(Json(jobs))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job found"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse> {
    Ok(Json(state.job_service.get_by_id(&id).await?))
}

#[utoipa::path(
    post,
    path = "/api/jobs",
    request_body = CreateJobPayload,
    responses(
        (status = 201, description = "Job created"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateJobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(&claims.sub, payload).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    put,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Job ID")),
    request_body = UpdateJobPayload,
    responses(
        (status = 200, description = "Job updated"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateJobPayload>,
) -> Result<impl IntoResponse> {
    let existing = state.job_service.get_by_id(&id).await?;
    ensure_owner_or_admin(
        &state,
        &claims,
        existing.user_id.as_deref(),
        "Forbidden: You can only update your own jobs",
    )
    .await?;
    payload.validate()?;
    let job = state.job_service.update(&id, payload).await?;
    Ok(Json(job))
}

#[utoipa::path(
    delete,
    path = "/api/jobs/{id}",
    params(("id" = String, Path, description = "Job ID")),
    responses(
        (status = 200, description = "Job deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let existing = state.job_service.get_by_id(&id).await?;
    ensure_owner_or_admin(
        &state,
        &claims,
        existing.user_id.as_deref(),
        "Forbidden: You can only delete your own jobs",
    )
    .await?;
    state.job_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Job deleted successfully")))
}
