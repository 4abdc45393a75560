//! Animal API contract tests
//!
//! Drive the full router in-process:
//! - GET /api/animals filters by name, species, diet and personalityTraits
//! - GET /api/animals/:id returns the record or 404
//! - POST /api/animals validates, assigns the next id and persists
//! - HTML pages and the index.html fallback

use std::fs;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use zookeepr::animals::{AnimalStore, JsonFileBackend, Persistence};
use zookeepr::http_server::{HttpServer, HttpServerConfig};

// =============================================================================
// Test Utilities
// =============================================================================

fn seed_document() -> Value {
    json!({
        "animals": [
            {
                "id": "0",
                "name": "Flicker",
                "species": "bear",
                "diet": "omnivore",
                "personalityTraits": ["hungry", "quirky"]
            },
            {
                "id": "1",
                "name": "Raksha",
                "species": "lion",
                "diet": "carnivore",
                "personalityTraits": ["loving", "hungry"]
            },
            {
                "id": "2",
                "name": "Erica",
                "species": "gorilla",
                "diet": "omnivore",
                "personalityTraits": ["quirky", "loving"]
            },
            {
                "id": "3",
                "name": "Noel",
                "species": "bear",
                "diet": "carnivore",
                "personalityTraits": ["quirky", "rash"]
            }
        ]
    })
}

struct TestApp {
    _temp_dir: TempDir,
    data_file: std::path::PathBuf,
    router: Router,
}

fn create_app() -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let data_file = temp_dir.path().join("animals.json");
    let public_dir = temp_dir.path().join("public");

    fs::write(&data_file, serde_json::to_string_pretty(&seed_document()).unwrap()).unwrap();
    fs::create_dir(&public_dir).unwrap();
    fs::write(public_dir.join("index.html"), "<h1>Zoo home</h1>").unwrap();
    fs::write(public_dir.join("animals.html"), "<h1>Animals</h1>").unwrap();
    fs::write(public_dir.join("zookeepers.html"), "<h1>Zookeepers</h1>").unwrap();
    fs::write(public_dir.join("style.css"), "body { color: green; }").unwrap();

    let store = AnimalStore::open(JsonFileBackend::new(&data_file)).unwrap();
    let config = HttpServerConfig::default().with_public_dir(&public_dir);
    let router = HttpServer::new(config, store).router();

    TestApp {
        _temp_dir: temp_dir,
        data_file,
        router,
    }
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_animal(app: &Router, body: Value) -> (StatusCode, Vec<u8>) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/api/animals")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

fn ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Query Filter
// =============================================================================

#[tokio::test]
async fn test_list_without_query_returns_all() {
    let app = create_app();
    let (status, body) = get_json(&app.router, "/api/animals").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, seed_document()["animals"]);
}

#[tokio::test]
async fn test_list_filters_by_species_and_diet() {
    let app = create_app();

    let (_, bears) = get_json(&app.router, "/api/animals?species=bear").await;
    let (_, carnivores) = get_json(&app.router, "/api/animals?diet=carnivore").await;
    let (_, both) = get_json(&app.router, "/api/animals?species=bear&diet=carnivore").await;

    assert_eq!(ids(&bears), vec!["0", "3"]);
    assert_eq!(ids(&carnivores), vec!["1", "3"]);
    assert_eq!(ids(&both), vec!["3"]);
}

#[tokio::test]
async fn test_list_filters_by_name() {
    let app = create_app();
    let (_, body) = get_json(&app.router, "/api/animals?name=Erica").await;
    assert_eq!(ids(&body), vec!["2"]);
}

#[tokio::test]
async fn test_repeated_traits_are_anded() {
    let app = create_app();
    let (_, body) = get_json(
        &app.router,
        "/api/animals?personalityTraits=quirky&personalityTraits=loving",
    )
    .await;
    assert_eq!(ids(&body), vec!["2"]);
}

#[tokio::test]
async fn test_unknown_trait_yields_empty_array() {
    let app = create_app();
    let (status, body) = get_json(&app.router, "/api/animals?personalityTraits=grumpy").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_repeated_diet_yields_empty_array() {
    let app = create_app();
    let (status, body) =
        get_json(&app.router, "/api/animals?diet=omnivore&diet=carnivore").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_empty_value_imposes_no_constraint() {
    let app = create_app();
    let (status, body) = get_json(&app.router, "/api/animals?species=bear&diet=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["0", "3"]);
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn test_get_by_known_id() {
    let app = create_app();
    let (status, body) = get_json(&app.router, "/api/animals/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Raksha");
}

#[tokio::test]
async fn test_get_by_unknown_id_is_404() {
    let app = create_app();
    let (status, _) = get(&app.router, "/api/animals/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_assigns_next_id_and_persists() {
    let app = create_app();

    let (status, body) = post_animal(
        &app.router,
        json!({
            "id": "not-mine",
            "name": "Ghost",
            "species": "cat",
            "diet": "carnivore",
            "personalityTraits": ["aloof"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let created: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(created["id"], "4");
    assert_eq!(created["personalityTraits"], json!(["aloof"]));

    let (_, fetched) = get_json(&app.router, "/api/animals/4").await;
    assert_eq!(fetched, created);

    let on_disk = JsonFileBackend::new(&app.data_file).load().unwrap();
    assert_eq!(on_disk.len(), 5);
    assert_eq!(on_disk[4].name, "Ghost");
}

#[tokio::test]
async fn test_create_rejects_invalid_with_plain_text() {
    let app = create_app();

    let (status, body) = post_animal(
        &app.router,
        json!({
            "name": "Ghost",
            "species": "cat",
            "diet": "carnivore",
            "personalityTraits": "aloof"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"The animal is not properly formatted");

    let (_, all) = get_json(&app.router, "/api/animals").await;
    assert_eq!(all.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = create_app();

    let (status, body) = send(
        &app.router,
        Request::builder()
            .method("POST")
            .uri("/api/animals")
            .header("content-type", "application/json")
            .body(Body::from("{\"name\": "))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, b"The animal is not properly formatted");
}

// =============================================================================
// HTML and health
// =============================================================================

#[tokio::test]
async fn test_html_pages() {
    let app = create_app();

    let (status, body) = get(&app.router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Zoo home</h1>");

    let (_, body) = get(&app.router, "/animals").await;
    assert_eq!(body, b"<h1>Animals</h1>");

    let (_, body) = get(&app.router, "/zookeepers").await;
    assert_eq!(body, b"<h1>Zookeepers</h1>");
}

#[tokio::test]
async fn test_static_asset_and_wildcard_fallback() {
    let app = create_app();

    let (status, body) = get(&app.router, "/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body { color: green; }");

    let (status, body) = get(&app.router, "/no/such/page").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Zoo home</h1>");
}

#[tokio::test]
async fn test_health() {
    let app = create_app();
    let (status, body) = get_json(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
