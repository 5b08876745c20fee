use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::catalog_dto::CreateCategoryPayload, error::Result, models::category::build_category_tree,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = 200, description = "Product and service categories with subcategories"))
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.catalog_service.list_categories().await?;
    Ok(Json(build_category_tree(rows)))
}

#[utoipa::path(
    get,
    path = "/api/tender-categories",
    responses((status = 200, description = "Tender categories"))
)]
#[axum::debug_handler]
pub async fn list_tender_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.catalog_service.list_tender_categories().await?))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryPayload,
    responses(
        (status = 200, description = "Category created"),
        (status = 400, description = "Invalid category")
    )
)]
#[axum::debug_handler]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CreateCategoryPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let row = state.catalog_service.create_category(payload).await?;
    Ok(Json(row))
}

#[utoipa::path(get, path = "/api/cities", responses((status = 200, description = "Cities")))]
#[axum::debug_handler]
pub async fn list_cities(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.catalog_service.list_cities().await?))
}

#[utoipa::path(get, path = "/api/company-types", responses((status = 200, description = "Company types")))]
#[axum::debug_handler]
pub async fn list_company_types(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.catalog_service.list_company_types().await?))
}

#[utoipa::path(get, path = "/api/units", responses((status = 200, description = "Units of measure")))]
#[axum::debug_handler]
pub async fn list_units(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(state.catalog_service.list_units().await?))
}
