use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{common_dto::MessageResponse, content_dto::CreateContentPayload},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/tenders/filenames",
    responses((status = 200, description = "Markdown filenames, sorted"))
)]
#[axum::debug_handler]
pub async fn list_tender_filenames(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.tenders.store.list_filenames().await?))
}

#[utoipa::path(
    get,
    path = "/api/tenders/content/{filename}",
    params(("filename" = String, Path, description = "Markdown filename")),
    responses(
        (status = 200, description = "Raw Markdown"),
        (status = 404, description = "Tender file not found")
    )
)]
#[axum::debug_handler]
pub async fn get_tender_content(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse> {
    let content = state.tenders.store.read_raw(&filename).await?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], content))
}

#[utoipa::path(
    post,
    path = "/api/tenders",
    responses(
        (status = 201, description = "Tender created", body = MessageResponse),
        (status = 400, description = "Filename and content are required")
    )
)]
#[axum::debug_handler]
pub async fn create_tender(
    State(state): State<AppState>,
    Json(payload): Json<CreateContentPayload>,
) -> Result<impl IntoResponse> {
    let (Some(filename), Some(content)) = (
        payload.filename.filter(|f| !f.is_empty()),
        payload.content.filter(|c| !c.is_empty()),
    ) else {
        return Err(Error::BadRequest("Filename and content are required".into()));
    };
    state.tenders.store.write(&filename, &content).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Tender created successfully")),
    ))
}
