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
        rfq_dto::CreateRfqPayload,
    },
    error::Result,
    middleware::auth::{ensure_owner_or_admin, Claims},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/rfqs",
    params(OwnerQuery),
    responses((status = 200, description = "Requests for quotation"))
)]
#[axum::debug_handler]
pub async fn list_rfqs(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<impl IntoResponse> {
    let user_id = query.user_id.as_deref().filter(|u| !u.is_empty());
    Ok(Json(state.rfq_service.list(user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/rfqs/{id}",
    params(("id" = String, Path, description = "RFQ ID")),
    responses(
        (status = 200, description = "RFQ found"),
        (status = 404, description = "RFQ not found")
    )
)]
#[axum::debug_handler]
pub async fn get_rfq(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse> {
    Ok(Json(state.rfq_service.get_by_id(&id).await?))
}

#[utoipa::path(
    post,
    path = "/api/rfqs",
    request_body = CreateRfqPayload,
    responses(
        (status = 201, description = "RFQ submitted"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_rfq(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreateRfqPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let rfq = state.rfq_service.create(&claims.sub, payload).await?;
    Ok((StatusCode::CREATED, Json(rfq)))
}

#[utoipa::path(
    delete,
    path = "/api/rfqs/{id}",
    params(("id" = String, Path, description = "RFQ ID")),
    responses(
        (status = 200, description = "RFQ deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "RFQ not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_rfq(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let existing = state.rfq_service.get_by_id(&id).await?;
    ensure_owner_or_admin(
        &state,
        &claims,
        existing.user_id.as_deref(),
        "Forbidden: You can only delete your own requests",
    )
    .await?;
    state.rfq_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("RFQ deleted successfully")))
}
