use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{dto::search_dto::SearchQuery, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "One list per requested type"),
        (status = 500, description = "A collection could not be searched")
    )
)]
#[axum::debug_handler]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    let results = state.search_service.search(query).await?;
    Ok(Json(results))
}
