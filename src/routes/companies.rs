use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        common_dto::{MessageResponse, OwnerQuery},
        company_dto::{CreateCompanyPayload, UpdateCompanyPayload},
        product_dto::ProductResponse,
    },
    error::Result,
    middleware::auth::{ensure_owner_or_admin, Claims},
    utils::{multipart::FormData, upload::save_image},
    AppState,
};

async fn company_logo_url(state: &AppState, form: &FormData) -> Result<Option<String>> {
    match form.file("companyLogo") {
        Some(file) => Ok(Some(
            save_image(&state.image_uploads(), "company", &file.file_name, &file.data).await?,
        )),
        None => Ok(None),
    }
}

#[utoipa::path(
    get,
    path = "/api/companies",
    params(OwnerQuery),
    responses((status = 200, description = "Companies"))
)]
#[axum::debug_handler]
pub async fn list_companies(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<impl IntoResponse> {
    let rows = match query.user_id.as_deref().filter(|u| !u.is_empty()) {
        Some(user_id) => state.company_service.list_by_user(user_id).await?,
        None => state.company_service.list().await?,
    };
    Ok(Json(rows))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    params(("id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company found"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    Ok(Json(state.company_service.get_by_id(&id).await?))
}

#[utoipa::path(
    get,
    path = "/api/companies/{id}/products",
    params(("id" = String, Path, description = "Company ID")),
    responses((status = 200, description = "Products listed by the company"))
)]
#[axum::debug_handler]
pub async fn list_company_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let rows = state.item_service.list_by_company(&id).await?;
    let products: Vec<ProductResponse> = rows.into_iter().map(ProductResponse::from).collect();
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/api/companies",
    responses(
        (status = 201, description = "Company created"),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Authentication required")
    )
)]
#[axum::debug_handler]
pub async fn create_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = FormData::read(multipart).await?;
    let mut payload = CreateCompanyPayload {
        name: form.non_empty("name").unwrap_or_default(),
        type_id: form.non_empty("typeId"),
        company_type: form.non_empty("companyType"),
        address: form.non_empty("address"),
        logo_url: None,
        email: form.non_empty("email"),
        phone: form.non_empty("phone"),
        location: form.non_empty("location"),
        description: form.non_empty("description"),
        website: form.non_empty("website"),
    };
    payload.validate()?;
    payload.logo_url = company_logo_url(&state, &form).await?;

    let company = state.company_service.create(&claims.sub, payload).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    params(("id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company updated"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn update_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let existing = state.company_service.get_by_id(&id).await?;
    ensure_owner_or_admin(
        &state,
        &claims,
        existing.user_id.as_deref(),
        "Forbidden: You can only update your own companies",
    )
    .await?;

    let form = FormData::read(multipart).await?;
    let mut payload = UpdateCompanyPayload {
        name: form.non_empty("name"),
        type_id: form.non_empty("typeId"),
        company_type: form.non_empty("companyType"),
        address: form.non_empty("address"),
        logo_url: None,
        email: form.non_empty("email"),
        phone: form.non_empty("phone"),
        location: form.non_empty("location"),
        description: form.non_empty("description"),
        website: form.non_empty("website"),
    };
    payload.validate()?;
    payload.logo_url = company_logo_url(&state, &form).await?;

    let company = state.company_service.update(&id, payload).await?;
    tracing::info!(company_id = %id, "company updated");
    Ok(Json(company))
}

#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    params(("id" = String, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let existing = state.company_service.get_by_id(&id).await?;
    ensure_owner_or_admin(
        &state,
        &claims,
        existing.user_id.as_deref(),
        "Forbidden: You can only delete your own companies",
    )
    .await?;
    state.company_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Company deleted successfully")))
}
