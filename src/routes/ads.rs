use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{common_dto::MessageResponse, content_dto::UpdateAdStatusPayload},
    error::{Error, Result},
    models::ad::AdStatus,
    utils::{multipart::FormData, upload::save_image},
    AppState,
};

async fn banner_url(state: &AppState, form: &FormData) -> Result<Option<String>> {
    match form.file("banner") {
        Some(file) => Ok(Some(
            save_image(&state.banner_uploads(), "banner", &file.file_name, &file.data).await?,
        )),
        None => Ok(None),
    }
}

#[utoipa::path(
    get,
    path = "/api/ads/markdown",
    responses((status = 200, description = "All ads, in file order"))
)]
#[axum::debug_handler]
pub async fn list_ads(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.ad_service.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/ads",
    responses(
        (status = 201, description = "Ad created", body = MessageResponse),
        (status = 400, description = "Title, link, and banner are required")
    )
)]
#[axum::debug_handler]
pub async fn create_ad(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = FormData::read(multipart).await?;
    let (Some(title), Some(link), true) = (
        form.non_empty("title"),
        form.non_empty("link"),
        form.file("banner").is_some(),
    ) else {
        return Err(Error::BadRequest("Title, link, and banner are required.".into()));
    };
    let banner = banner_url(&state, &form)
        .await?
        .ok_or_else(|| Error::BadRequest("Title, link, and banner are required.".into()))?;

    state.ad_service.create(&title, &link, &banner).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Ad created successfully.")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/ads/{id}/status",
    params(("id" = String, Path, description = "Ad ID")),
    responses(
        (status = 200, description = "Updated ad"),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Ad not found")
    )
)]
#[axum::debug_handler]
pub async fn update_ad_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAdStatusPayload>,
) -> Result<impl IntoResponse> {
    let status = payload
        .status
        .as_deref()
        .and_then(AdStatus::parse)
        .ok_or_else(|| Error::BadRequest("Invalid status".into()))?;
    let ad = state.ad_service.set_status(&id, status).await?;
    Ok(Json(ad))
}

#[utoipa::path(
    put,
    path = "/api/ads/{id}",
    params(("id" = String, Path, description = "Ad ID")),
    responses(
        (status = 200, description = "Ad updated", body = MessageResponse),
        (status = 404, description = "Ad not found")
    )
)]
#[axum::debug_handler]
pub async fn update_ad(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = FormData::read(multipart).await?;
    // Unknown ids fail before any banner is written.
    if !state.ad_service.list().await?.iter().any(|ad| ad.id == id) {
        return Err(Error::NotFound("Ad not found.".into()));
    }
    let banner = banner_url(&state, &form).await?;
    state
        .ad_service
        .update(&id, form.non_empty("title"), form.non_empty("link"), banner)
        .await?;
    Ok(Json(MessageResponse::new("Ad updated successfully.")))
}

#[utoipa::path(
    delete,
    path = "/api/ads/{id}",
    params(("id" = String, Path, description = "Ad ID")),
    responses(
        (status = 200, description = "Ad deleted", body = MessageResponse),
        (status = 404, description = "Ad not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_ad(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    state.ad_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Ad deleted successfully.")))
}
