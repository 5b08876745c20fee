pub mod ads;
pub mod articles;
pub mod auth;
pub mod catalog;
pub mod companies;
pub mod health;
pub mod jobs;
pub mod products;
pub mod rfqs;
pub mod search;
pub mod seed;
pub mod tenders;

use axum::{
    extract::DefaultBodyLimit,
    response::Json,
    routing::{get, post, put},
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{
    middleware::{auth::require_session, cors::cors_layer},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        auth::me,
        auth::register,
        auth::update_user,
        catalog::list_categories,
        catalog::list_tender_categories,
        catalog::create_category,
        catalog::list_cities,
        catalog::list_company_types,
        catalog::list_units,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        companies::list_companies,
        companies::get_company,
        companies::list_company_products,
        companies::create_company,
        companies::update_company,
        companies::delete_company,
        jobs::list_jobs,
        jobs::get_job,
        jobs::create_job,
        jobs::update_job,
        jobs::delete_job,
        rfqs::list_rfqs,
        rfqs::get_rfq,
        rfqs::create_rfq,
        rfqs::delete_rfq,
        articles::list_article_filenames,
        articles::get_article_content,
        articles::create_article,
        articles::upload_article,
        tenders::list_tender_filenames,
        tenders::get_tender_content,
        tenders::create_tender,
        ads::list_ads,
        ads::create_ad,
        ads::update_ad_status,
        ads::update_ad,
        ads::delete_ad,
        search::search,
        seed::seed,
    ),
    info(title = "BuildMart API")
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/me", get(auth::me))
        .route("/api/register", post(auth::register))
        .route("/api/categories", get(catalog::list_categories))
        .route("/api/tender-categories", get(catalog::list_tender_categories))
        .route("/api/cities", get(catalog::list_cities))
        .route("/api/company-types", get(catalog::list_company_types))
        .route("/api/units", get(catalog::list_units))
        .route("/api/products", get(products::list_products))
        .route("/api/products/:id", get(products::get_product))
        .route("/api/companies", get(companies::list_companies))
        .route("/api/companies/:id", get(companies::get_company))
        .route("/api/companies/:id/products", get(companies::list_company_products))
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/:id", get(jobs::get_job))
        .route("/api/rfqs", get(rfqs::list_rfqs))
        .route("/api/rfqs/:id", get(rfqs::get_rfq))
        .route("/api/articles/filenames", get(articles::list_article_filenames))
        .route("/api/articles/content/:filename", get(articles::get_article_content))
        .route("/api/tenders/filenames", get(tenders::list_tender_filenames))
        .route("/api/tenders/content/:filename", get(tenders::get_tender_content))
        .route("/api/ads/markdown", get(ads::list_ads))
        .route("/api/search", get(search::search))
        .route("/api/seed", post(seed::seed))
}

fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/users/:id", put(auth::update_user))
        .route("/api/categories", post(catalog::create_category))
        .route("/api/products", post(products::create_product))
        .route(
            "/api/products/:id",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/api/companies", post(companies::create_company))
        .route(
            "/api/companies/:id",
            put(companies::update_company).delete(companies::delete_company),
        )
        .route("/api/jobs", post(jobs::create_job))
        .route("/api/jobs/:id", put(jobs::update_job).delete(jobs::delete_job))
        .route("/api/rfqs", post(rfqs::create_rfq))
        .route("/api/rfqs/:id", axum::routing::delete(rfqs::delete_rfq))
        .route("/api/articles", post(articles::create_article))
        .route("/api/articles/upload", post(articles::upload_article))
        .route("/api/tenders", post(tenders::create_tender))
        .route("/api/ads", post(ads::create_ad))
        .route("/api/ads/:id/status", put(ads::update_ad_status))
        .route("/api/ads/:id", put(ads::update_ad).delete(ads::delete_ad))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ))
}

/// The full HTTP surface: JSON API, uploaded files and ad banners.
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();
    // Multipart bodies can carry several images plus form fields.
    let body_limit = config.upload_max_bytes * 4;

    tracing::info!(data_dir = %config.data_dir.display(), "serving uploads and banners");

    public_routes()
        .merge(protected_routes(&state))
        .nest_service("/api/uploads", ServeDir::new(config.uploads_dir()))
        .nest_service("/api/ad/banner", ServeDir::new(config.ad_banner_dir()))
        .with_state(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
}
