use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{common_dto::MessageResponse, content_dto::CreateContentPayload},
    error::{Error, Result},
    utils::multipart::FormData,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/articles/filenames",
    responses((status = 200, description = "Markdown filenames, sorted"))
)]
#[axum::debug_handler]
pub async fn list_article_filenames(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.articles.store.list_filenames().await?))
}

#[utoipa::path(
    get,
    path = "/api/articles/content/{filename}",
    params(("filename" = String, Path, description = "Markdown filename")),
    responses(
        (status = 200, description = "Raw Markdown"),
        (status = 404, description = "Article file not found")
    )
)]
#[axum::debug_handler]
pub async fn get_article_content(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse> {
    let content = state.articles.store.read_raw(&filename).await?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], content))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    responses(
        (status = 201, description = "Article created", body = MessageResponse),
        (status = 400, description = "Filename and content are required")
    )
)]
#[axum::debug_handler]
pub async fn create_article(
    State(state): State<AppState>,
    Json(payload): Json<CreateContentPayload>,
) -> Result<impl IntoResponse> {
    let (Some(filename), Some(content)) = (
        payload.filename.filter(|f| !f.is_empty()),
        payload.content.filter(|c| !c.is_empty()),
    ) else {
        return Err(Error::BadRequest("Filename and content are required".into()));
    };
    state.articles.store.write(&filename, &content).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Article created successfully")),
    ))
}

#[utoipa::path(
    post,
    path = "/api/articles/upload",
    responses(
        (status = 200, description = "Article uploaded", body = MessageResponse),
        (status = 400, description = "Missing or non-Markdown file")
    )
)]
#[axum::debug_handler]
pub async fn upload_article(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = FormData::read(multipart).await?;
    let file = form
        .file("article")
        .ok_or_else(|| Error::BadRequest("No file uploaded.".into()))?;
    let content = std::str::from_utf8(&file.data)
        .map_err(|_| Error::BadRequest("Article must be UTF-8 text".into()))?;
    state.articles.store.write(&file.file_name, content).await?;
    Ok(Json(MessageResponse::new("Article uploaded successfully.")))
}
