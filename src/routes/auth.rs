use axum::{
    extract::{Multipart, Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        auth_dto::{
            CreateUserPayload, LoginPayload, LoginResponse, MeResponse, SessionUser,
            UpdateUserPayload,
        },
        common_dto::MessageResponse,
    },
    error::{Error, Result},
    middleware::auth::{claims_from_headers, Claims},
    utils::{
        multipart::FormData,
        token::{expired_session_cookie, issue_session_token, session_cookie},
        upload::save_image,
    },
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/login",
    responses(
        (status = 200, description = "Session issued", body = LoginResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    let (Some(username), Some(password)) = (
        payload.username.filter(|u| !u.is_empty()),
        payload.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(Error::BadRequest("Username and password required".into()));
    };

    let user = state
        .user_service
        .authenticate(&username, &password)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid credentials".into()))?;

    let ttl_hours = state.config.session_ttl_hours;
    let token = issue_session_token(&user.id, &user.username, &state.config.session_secret, ttl_hours)?;
    let cookie = session_cookie(&token, ttl_hours * 3600, state.config.cookie_secure);

    tracing::info!(user_id = %user.id, "login");
    let body = LoginResponse {
        token,
        user: SessionUser {
            id: user.id,
            username: user.username,
        },
    };
    Ok(([(header::SET_COOKIE, cookie)], Json(body)))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses((status = 200, description = "Session cookie cleared", body = MessageResponse))
)]
#[axum::debug_handler]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::SET_COOKIE, expired_session_cookie(state.config.cookie_secure))],
        Json(MessageResponse::new("Logged out successfully")),
    )
}

#[utoipa::path(
    get,
    path = "/api/me",
    responses((status = 200, description = "Current session, if any", body = MeResponse))
)]
#[axum::debug_handler]
pub async fn me(State(state): State<AppState>, headers: HeaderMap) -> Result<impl IntoResponse> {
    let anonymous = MeResponse {
        authenticated: false,
        user: None,
    };
    let Some(claims) = claims_from_headers(&headers, &state.config.session_secret) else {
        return Ok(Json(anonymous));
    };
    match state.user_service.get_by_id(&claims.sub).await? {
        Some(user) => Ok(Json(MeResponse {
            authenticated: true,
            user: Some(user),
        })),
        None => Ok(Json(anonymous)),
    }
}

async fn profile_picture_url(state: &AppState, form: &FormData) -> Result<Option<String>> {
    match form.file("profilePicture") {
        Some(file) => Ok(Some(
            save_image(&state.image_uploads(), "profile", &file.file_name, &file.data).await?,
        )),
        None => Ok(None),
    }
}

#[utoipa::path(
    post,
    path = "/api/register",
    responses(
        (status = 200, description = "User registered", body = SessionUser),
        (status = 400, description = "Invalid payload or username taken")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let form = FormData::read(multipart).await?;
    let payload = CreateUserPayload {
        username: form.non_empty("username").unwrap_or_default(),
        password: form.text("password").unwrap_or_default(),
        full_name: form.non_empty("fullName"),
        email: form.non_empty("email"),
        phone: form.non_empty("phone"),
        company: form.non_empty("company"),
        bio: form.non_empty("bio"),
        location: form.non_empty("location"),
        profile_picture_url: None,
        role: form.non_empty("role"),
    };
    payload.validate()?;
    if state.user_service.get_by_username(&payload.username).await?.is_some() {
        return Err(Error::BadRequest("Username already exists".into()));
    }

    let payload = CreateUserPayload {
        profile_picture_url: profile_picture_url(&state, &form).await?,
        ..payload
    };
    let user = state.user_service.create(payload).await?;
    Ok(Json(SessionUser {
        id: user.id,
        username: user.username,
    }))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User updated"),
        (status = 403, description = "Not your account"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    if id != claims.sub {
        return Err(Error::Forbidden("Forbidden".into()));
    }
    let form = FormData::read(multipart).await?;
    let payload = UpdateUserPayload {
        username: form.non_empty("username"),
        password: form.non_empty("password"),
        full_name: form.non_empty("fullName"),
        email: form.non_empty("email"),
        phone: form.non_empty("phone"),
        company: form.non_empty("company"),
        bio: form.non_empty("bio"),
        location: form.non_empty("location"),
        profile_picture_url: None,
    };
    payload.validate()?;
    let payload = UpdateUserPayload {
        profile_picture_url: profile_picture_url(&state, &form).await?,
        ..payload
    };
    let user = state.user_service.update(&id, payload).await?;
    Ok(Json(user))
}
