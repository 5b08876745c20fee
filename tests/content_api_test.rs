mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{json_request, multipart_request, spawn_app};

#[tokio::test]
async fn tender_create_list_and_read() {
    let app = spawn_app().await;
    app.create_user("editor", "pw").await;
    let token = app.login("editor", "pw").await;

    for name in ["b-road.md", "a-bridge.md"] {
        let (status, body) = app
            .send(json_request(
                Method::POST,
                "/api/tenders",
                Some(&token),
                json!({ "filename": name, "content": "---\ntitle: Works\n---\nBody" }),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Tender created successfully");
    }
    std::fs::write(app.state.config.tenders_dir().join("~$lock.md"), "x").unwrap();
    std::fs::write(app.state.config.tenders_dir().join("notes.txt"), "x").unwrap();

    let (_, names) = app.get("/api/tenders/filenames").await;
    assert_eq!(names, json!(["a-bridge.md", "b-road.md"]));

    let (status, raw) = app
        .send_raw(
            axum::http::Request::builder()
                .uri("/api/tenders/content/a-bridge.md")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(raw).unwrap(), "---\ntitle: Works\n---\nBody");

    let (status, body) = app.get("/api/tenders/content/missing.md").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Tender file not found");
}

#[tokio::test]
async fn content_requires_filename_and_body() {
    let app = spawn_app().await;
    app.create_user("editor", "pw").await;
    let token = app.login("editor", "pw").await;

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/articles",
            Some(&token),
            json!({ "filename": "only-name.md" }),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Filename and content are required");

    let (status, _) = app
        .send(json_request(
            Method::POST,
            "/api/articles",
            Some(&token),
            json!({ "filename": "../escape.md", "content": "x" }),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!app.data_dir.path().join("escape.md").exists());
}

#[tokio::test]
async fn article_upload_and_read_back() {
    let app = spawn_app().await;
    app.create_user("editor", "pw").await;
    let token = app.login("editor", "pw").await;
    let doc = b"---\ntitle: Curing Concrete\n---\nIntro\n\nKeep it wet for seven days.\n";

    let (status, body) = app
        .send(multipart_request(
            Method::POST,
            "/api/articles/upload",
            Some(&token),
            &[],
            &[("article", "curing.md", doc)],
        ))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let (_, names) = app.get("/api/articles/filenames").await;
    assert_eq!(names, json!(["curing.md"]));

    let (_, results) = app.get("/api/search?query=seven%20days&types=articles").await;
    let article = &results["articles"][0];
    assert_eq!(article["title"], "Curing Concrete");
    assert_eq!(article["id"], "curing");
    assert_eq!(article["author"], "Admin");
    assert_eq!(article["published_date"], "N/A");

    let (status, _) = app
        .send(multipart_request(
            Method::POST,
            "/api/articles/upload",
            Some(&token),
            &[],
            &[("article", "curing.txt", doc)],
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
