use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::{error::Result, services::seed_service::SeedOutcome, AppState};

#[utoipa::path(
    post,
    path = "/api/seed",
    responses((status = 200, description = "Demo data present"))
)]
#[axum::debug_handler]
pub async fn seed(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = match state.seed_service.seed().await? {
        SeedOutcome::AlreadySeeded => json!({ "message": "Already seeded" }),
        SeedOutcome::Seeded => json!({ "ok": true, "message": "Database seeded successfully" }),
    };
    Ok(Json(body))
}
