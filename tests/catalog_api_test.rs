mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{authed_request, json_request, spawn_app};

#[tokio::test]
async fn seed_is_idempotent_and_fills_reference_data() {
    let app = spawn_app().await;
    let (status, body) = app
        .send(json_request(Method::POST, "/api/seed", None, json!({})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Database seeded successfully");

    let (_, body) = app
        .send(json_request(Method::POST, "/api/seed", None, json!({})))
        .await;
    assert_eq!(body["message"], "Already seeded");

    let (_, types) = app.get("/api/company-types").await;
    assert_eq!(types.as_array().unwrap().len(), 5);
    let (_, cities) = app.get("/api/cities").await;
    assert!(cities.as_array().unwrap().iter().any(|c| c["city"] == "Adama"));
    let (_, units) = app.get("/api/units").await;
    assert!(units.as_array().unwrap().iter().any(|u| u["name"] == "quintal"));
    let (_, tender_categories) = app.get("/api/tender-categories").await;
    assert!(tender_categories
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["type"] == "tender"));
}

#[tokio::test]
async fn categories_nest_subcategories() {
    let app = spawn_app().await;
    app.create_user("editor", "pw").await;
    let token = app.login("editor", "pw").await;

    let (status, root) = app
        .send(json_request(
            Method::POST,
            "/api/categories",
            Some(&token),
            json!({ "id": "category-steel", "category": "Steel", "type": "product" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", root);
    let (status, _) = app
        .send(json_request(
            Method::POST,
            "/api/categories",
            Some(&token),
            json!({ "category": "Rebar", "type": "product", "parentId": "category-steel" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app
        .send(json_request(
            Method::POST,
            "/api/categories",
            Some(&token),
            json!({ "category": "Orphan", "type": "product", "parentId": "nope" }),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, tree) = app.get("/api/categories").await;
    let tree = tree.as_array().unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0]["category"], "Steel");
    assert_eq!(tree[0]["subcategories"][0]["category"], "Rebar");
}

#[tokio::test]
async fn rfq_lifecycle() {
    let app = spawn_app().await;
    app.create_user("buyer", "pw").await;
    app.create_user("other", "pw").await;
    let buyer = app.login("buyer", "pw").await;
    let other = app.login("other", "pw").await;

    let (status, rfq) = app
        .send(json_request(
            Method::POST,
            "/api/rfqs",
            Some(&buyer),
            json!({ "itemName": "Cement 42.5", "quantity": 200, "unit": "bag" }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", rfq);
    let id = rfq["id"].as_str().unwrap().to_string();

    let (_, list) = app.get("/api/rfqs").await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, _) = app
        .send(authed_request(Method::DELETE, &format!("/api/rfqs/{}", id), &other))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app
        .send(authed_request(Method::DELETE, &format!("/api/rfqs/{}", id), &buyer))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get(&format!("/api/rfqs/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_database() {
    let app = spawn_app().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (status, doc) = app.get("/api/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/search"].is_object());
}
