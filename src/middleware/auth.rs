use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    error::{Error, Result},
    utils::token::{cookie_value, verify_session_token, SESSION_COOKIE},
    AppState,
};

/// Verified identity attached to the request by [`require_session`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

fn session_token(headers: &HeaderMap) -> Option<&str> {
    let from_cookie = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| cookie_value(v, SESSION_COOKIE));
    if from_cookie.is_some() {
        return from_cookie;
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Session cookie or bearer token, if present and valid.
pub fn claims_from_headers(headers: &HeaderMap, secret: &str) -> Option<Claims> {
    let token = session_token(headers)?;
    verify_session_token(token, secret).ok()
}

pub async fn require_session(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match claims_from_headers(req.headers(), &state.config.session_secret) {
        Some(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Authentication required"})),
        )
            .into_response(),
    }
}

/// Mutations on owned records pass for the owner or the administrator account.
pub async fn ensure_owner_or_admin(
    state: &AppState,
    claims: &Claims,
    owner_id: Option<&str>,
    forbidden_message: &str,
) -> Result<()> {
    if owner_id == Some(claims.sub.as_str()) {
        return Ok(());
    }
    let user = state.user_service.get_by_id(&claims.sub).await?;
    if user.map(|u| u.username) == Some(state.config.admin_username.clone()) {
        return Ok(());
    }
    tracing::warn!(user_id = %claims.sub, "ownership check failed");
    Err(Error::Forbidden(forbidden_message.to_string()))
}
