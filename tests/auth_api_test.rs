mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;

use common::{json_request, multipart_request, spawn_app, PNG_BYTES};

#[tokio::test]
async fn login_sets_cookie_and_me_reports_user() {
    let app = spawn_app().await;
    app.create_user("abebe", "secret1").await;

    let res = app
        .response(json_request(
            Method::POST,
            "/api/login",
            None,
            json!({ "username": "abebe", "password": "secret1" }),
        ))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("set-cookie")
        .to_string();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));
    let session = set_cookie.split(';').next().unwrap().to_string();

    let (status, body) = app
        .send(
            Request::builder()
                .uri("/api/me")
                .header(header::COOKIE, session)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["authenticated"], true);
    assert_eq!(body["user"]["username"], "abebe");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn me_without_session_is_anonymous() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api/me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "authenticated": false }));
}

#[tokio::test]
async fn bad_credentials_and_missing_fields() {
    let app = spawn_app().await;
    app.create_user("abebe", "secret1").await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/login",
            None,
            json!({ "username": "abebe", "password": "wrong" }),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, _) = app
        .send(json_request(Method::POST, "/api/login", None, json!({ "username": "abebe" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_expires_cookie() {
    let app = spawn_app().await;
    let res = app
        .response(
            Request::builder()
                .method(Method::POST)
                .uri("/api/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let set_cookie = res.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let app = spawn_app().await;
    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/jobs",
            None,
            json!({ "title": "Foreman", "description": "Site work" }),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authentication required");

    let (status, _) = app
        .send(json_request(
            Method::POST,
            "/api/jobs",
            Some("not-a-token"),
            json!({ "title": "Foreman", "description": "Site work" }),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn register_then_login_and_update_self_only() {
    let app = spawn_app().await;
    let (status, body) = app
        .send(multipart_request(
            Method::POST,
            "/api/register",
            None,
            &[("username", "selam"), ("password", "pw123456"), ("fullName", "Selam T.")],
            &[("profilePicture", "me.png", PNG_BYTES)],
        ))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    let user_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(multipart_request(
            Method::POST,
            "/api/register",
            None,
            &[("username", "selam"), ("password", "other")],
            &[],
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists");

    let token = app.login("selam", "pw123456").await;
    let (status, body) = app
        .send(multipart_request(
            Method::PUT,
            &format!("/api/users/{}", user_id),
            Some(&token),
            &[("bio", "Civil engineer")],
            &[],
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bio"], "Civil engineer");
    assert_eq!(body["fullName"], "Selam T.");
    assert!(body["profilePictureUrl"]
        .as_str()
        .unwrap()
        .starts_with("/api/uploads/profile-"));

    let other = app.create_user("dawit", "pw").await;
    let (status, _) = app
        .send(multipart_request(
            Method::PUT,
            &format!("/api/users/{}", other.id),
            Some(&token),
            &[("bio", "hijacked")],
            &[],
        ))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}
