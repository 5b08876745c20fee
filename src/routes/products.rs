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
        product_dto::{CreateItemPayload, ProductResponse, UpdateItemPayload},
    },
    error::{Error, Result},
    middleware::auth::{ensure_owner_or_admin, Claims},
    models::item::MAX_ITEM_IMAGES,
    utils::{
        multipart::{parse_price, FormData},
        upload::save_image,
        validation::require_unit,
    },
    AppState,
};

async fn save_product_images(state: &AppState, form: &FormData) -> Result<Vec<String>> {
    let target = state.image_uploads();
    let mut urls = Vec::new();
    for file in form.files("productImages") {
        urls.push(save_image(&target, "product", &file.file_name, &file.data).await?);
    }
    Ok(urls)
}

fn retained_image_urls(form: &FormData) -> Result<Vec<String>> {
    match form.non_empty("existingImageUrls") {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str::<Vec<String>>(&raw)
            .map_err(|_| Error::BadRequest("Invalid format for existingImageUrls".into())),
    }
}

fn check_image_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::BadRequest("At least one product image is required".into()));
    }
    if count > MAX_ITEM_IMAGES {
        return Err(Error::BadRequest(format!(
            "You can upload a maximum of {} images (including existing ones).",
            MAX_ITEM_IMAGES
        )));
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/products",
    params(OwnerQuery),
    responses((status = 200, description = "Products with company and category names"))
)]
#[axum::debug_handler]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<OwnerQuery>,
) -> Result<impl IntoResponse> {
    let rows = match query.user_id.as_deref().filter(|u| !u.is_empty()) {
        Some(user_id) => state.item_service.list_by_user(user_id).await?,
        None => state.item_service.list().await?,
    };
    let products: Vec<ProductResponse> = rows.into_iter().map(ProductResponse::from).collect();
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product found"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let row = state.item_service.get_with_relations(&id).await?;
    Ok(Json(ProductResponse::from(row)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Invalid payload or images"),
        (status = 401, description = "Authentication required")
    )
)]
#[axum::debug_handler]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = FormData::read(multipart).await?;
    check_image_count(form.files("productImages").count())?;

    let mut payload = CreateItemPayload {
        name: form.non_empty("name").unwrap_or_default(),
        company_id: form.non_empty("companyId").unwrap_or_default(),
        category_id: form.non_empty("categoryId").unwrap_or_default(),
        price: Some(parse_price(form.text("price").as_deref())?),
        unit: require_unit(form.text("unit").as_deref())?,
        description: form.non_empty("description"),
        image_urls: Vec::new(),
    };
    payload.validate()?;
    if state.company_service.find_by_id(&payload.company_id).await?.is_none() {
        return Err(Error::BadRequest("Company not found".into()));
    }

    payload.image_urls = save_product_images(&state, &form).await?;
    let product = state.item_service.create(&claims.sub, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product updated"),
        (status = 400, description = "Invalid payload or images"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let existing = state.item_service.get_with_relations(&id).await?;
    ensure_owner_or_admin(
        &state,
        &claims,
        existing.user_id.as_deref(),
        "Forbidden: You can only update your own products",
    )
    .await?;

    let form = FormData::read(multipart).await?;
    let retained = retained_image_urls(&form)?;
    check_image_count(retained.len() + form.files("productImages").count())?;

    let unit = match form.non_empty("unit") {
        Some(unit) => Some(require_unit(Some(&unit))?),
        None => None,
    };
    let mut payload = UpdateItemPayload {
        name: form.non_empty("name"),
        company_id: form.non_empty("companyId"),
        category_id: form.non_empty("categoryId"),
        price: match form.non_empty("price") {
            Some(raw) => Some(parse_price(Some(&raw))?),
            None => None,
        },
        unit,
        description: form.non_empty("description"),
        image_urls: None,
    };
    payload.validate()?;

    let mut image_urls = retained;
    image_urls.extend(save_product_images(&state, &form).await?);
    payload.image_urls = Some(image_urls);

    let product = state.item_service.update(&id, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Product not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let existing = state.item_service.get_with_relations(&id).await?;
    ensure_owner_or_admin(
        &state,
        &claims,
        existing.user_id.as_deref(),
        "Forbidden: You can only delete your own products",
    )
    .await?;
    state.item_service.delete(&id).await?;
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
