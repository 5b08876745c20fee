mod common;

use std::collections::BTreeSet;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{json_request, multipart_request, spawn_app, TestApp};

const TENDER_DOC: &str = "---\ntitle: Supply of Reinforcement Steel\ncategory: Supply\nregion: Amhara\nclosing: 2025-08-01\n---\nIntro line.\n\nThe buyer requires 40 tons of rebar delivered to Bahir Dar.\n";
const ARTICLE_DOC: &str = "---\ntitle: Choosing Cement Grades\nauthor: Hana\n---\nOverview.\n\nGrade 42.5 suits structural work.\n";

async fn seeded_app() -> TestApp {
    let app = spawn_app().await;
    let (status, body) = app
        .send(json_request(Method::POST, "/api/seed", None, json!({})))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    std::fs::write(app.state.config.tenders_dir().join("steel.md"), TENDER_DOC).unwrap();
    std::fs::write(app.state.config.articles_dir().join("cement.md"), ARTICLE_DOC).unwrap();
    app
}

fn keys(body: &serde_json::Value) -> BTreeSet<String> {
    body.as_object().unwrap().keys().cloned().collect()
}

#[tokio::test]
async fn default_search_returns_every_type() {
    let app = seeded_app().await;
    let (status, body) = app.get("/api/search").await;
    assert_eq!(status, StatusCode::OK);
    let expected: BTreeSet<String> = ["products", "companies", "tenders", "jobs", "articles"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(keys(&body), expected);
    assert_eq!(body["products"].as_array().unwrap().len(), 4);
    assert_eq!(body["companies"].as_array().unwrap().len(), 4);
    assert_eq!(body["tenders"].as_array().unwrap().len(), 1);
    assert_eq!(body["articles"].as_array().unwrap().len(), 1);
    assert!(body["jobs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn only_requested_types_are_present() {
    let app = seeded_app().await;
    let (_, body) = app.get("/api/search?types=jobs,Tenders,bogus").await;
    let expected: BTreeSet<String> = ["jobs", "tenders"].iter().map(|s| s.to_string()).collect();
    assert_eq!(keys(&body), expected);
}

#[tokio::test]
async fn cement_query_finds_seeded_product() {
    let app = seeded_app().await;
    let (status, body) = app.get("/api/search?query=cement&types=products").await;
    assert_eq!(status, StatusCode::OK);
    let products = body["products"].as_array().unwrap();
    assert!(products
        .iter()
        .any(|p| p["name"] == "Portland Cement Grade 42.5"));
    let cement = &products[0];
    assert_eq!(cement["company"], "Derba Midroc Cement");
    assert_eq!(cement["category"], "Cement");
    assert_eq!(cement["isOwner"], false);
    assert_eq!(keys(&body).len(), 1);
}

#[tokio::test]
async fn tender_matches_on_body_text_case_insensitively() {
    let app = seeded_app().await;
    let (_, body) = app.get("/api/search?query=REBAR%20delivered&types=tenders").await;
    let tenders = body["tenders"].as_array().unwrap();
    assert_eq!(tenders.len(), 1);
    assert_eq!(tenders[0]["title"], "Supply of Reinforcement Steel");
    assert_eq!(tenders[0]["region"], "Amhara");

    let (_, body) = app.get("/api/search?query=nothing-like-this&types=tenders").await;
    assert!(body["tenders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn article_excerpt_and_author_are_searchable() {
    let app = seeded_app().await;
    let (_, body) = app.get("/api/search?query=hana&types=articles").await;
    let articles = body["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["excerpt"], "Grade 42.5 suits structural work....");
    assert_eq!(articles[0]["fileType"], "md");
}

#[tokio::test]
async fn products_are_paged() {
    let app = seeded_app().await;
    let (_, first) = app.get("/api/search?types=products&limit=3&page=1").await;
    let (_, second) = app.get("/api/search?types=products&limit=3&page=2").await;
    assert_eq!(first["products"].as_array().unwrap().len(), 3);
    assert_eq!(second["products"].as_array().unwrap().len(), 1);
    assert_ne!(first["products"][0]["id"], second["products"][0]["id"]);
}

#[tokio::test]
async fn broken_front_matter_fails_the_whole_search() {
    let app = seeded_app().await;
    std::fs::write(
        app.state.config.tenders_dir().join("broken.md"),
        "---\ntitle: [unclosed\n---\nbody\n",
    )
    .unwrap();
    let (status, body) = app.get("/api/search").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());
}

async fn app_with_listings() -> TestApp {
    let app = seeded_app().await;
    app.create_user("lister", "pw-lister").await;
    let token = app.login("lister", "pw-lister").await;

    let (status, body) = app
        .send(multipart_request(
            Method::POST,
            "/api/companies",
            Some(&token),
            &[
                ("name", "ÉTANCHÉITÉ Systems"),
                ("description", "Roof waterproofing membranes"),
                ("location", "Hawassa"),
            ],
            &[],
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let (status, body) = app
        .send(json_request(
            Method::POST,
            "/api/jobs",
            Some(&token),
            json!({
                "title": "Quantity Surveyor",
                "description": "Prepare bills of quantities",
                "location": "Mekelle"
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    std::fs::write(
        app.state.config.tenders_dir().join("roof.md"),
        "---\ntitle: ÉTANCHÉITÉ works\ncategory: Construction\n---\nRoof works.\n",
    )
    .unwrap();
    app
}

fn names(list: &serde_json::Value, key: &str) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v[key].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn company_and_job_filters_include_and_exclude() {
    let app = app_with_listings().await;

    let (_, body) = app.get("/api/search?query=WATERPROOFING&types=companies").await;
    assert_eq!(names(&body["companies"], "name"), vec!["ÉTANCHÉITÉ Systems"]);

    let (_, body) = app.get("/api/search?query=mekelle&types=jobs").await;
    assert_eq!(names(&body["jobs"], "title"), vec!["Quantity Surveyor"]);

    let (_, body) = app.get("/api/search?query=surveyor&types=jobs,companies").await;
    assert_eq!(body["jobs"].as_array().unwrap().len(), 1);
    assert!(body["companies"].as_array().unwrap().is_empty());

    let (_, body) = app.get("/api/search?query=plumber&types=jobs,companies").await;
    assert!(body["jobs"].as_array().unwrap().is_empty());
    assert!(body["companies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn accented_query_folds_case_in_every_source() {
    let app = app_with_listings().await;
    // "étanchéité", percent-encoded
    let (status, body) = app
        .get("/api/search?query=%C3%A9tanch%C3%A9it%C3%A9&types=companies,tenders")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body["companies"], "name"), vec!["ÉTANCHÉITÉ Systems"]);
    assert_eq!(names(&body["tenders"], "title"), vec!["ÉTANCHÉITÉ works"]);
}

#[tokio::test]
async fn huge_page_number_returns_an_empty_page() {
    let app = seeded_app().await;
    let (status, body) = app
        .get("/api/search?types=products&page=9223372036854775807&limit=16")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["products"].as_array().unwrap().is_empty());
}
