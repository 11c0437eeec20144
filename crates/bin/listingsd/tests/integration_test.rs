//! End-to-end smoke tests for the full listingsd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use listings_adapter_http_axum::router;
use listings_adapter_http_axum::state::AppState;
use listings_adapter_storage_sqlite_sqlx::{Config, Database, SqlitePropertyRepository};
use listings_app::services::property_service::PropertyService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> (axum::Router, Database) {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let property_repo = SqlitePropertyRepository::new(db.pool().clone());
    let state = AppState::new(PropertyService::new(property_repo));

    (router::build(state), db)
}

fn post_property(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list_properties() -> Request<Body> {
    Request::builder()
        .uri("/api/properties")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

const LAKEVIEW: &str = r#"{"title":"Lakeview Condo","location":"Lake City","price":"250000","status":"for-sale","description":"2BR condo","type":"condo"}"#;

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let (app, _db) = app().await;
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: create & list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_list_nothing_on_fresh_database() {
    let (app, _db) = app().await;
    let resp = app.oneshot(list_properties()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn should_create_lakeview_condo_with_numeric_price() {
    let (app, _db) = app().await;

    let resp = app
        .clone()
        .oneshot(post_property("/api/properties", LAKEVIEW))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["title"], "Lakeview Condo");
    assert_eq!(created["price"].as_f64(), Some(250_000.0));
    assert_eq!(created["description"], "2BR condo");
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());
    assert!(created["bedrooms"].is_null());

    // what the listing reads back matches what the create returned
    let resp = app.oneshot(list_properties()).await.unwrap();
    let listed = body_json(resp).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0], created);
}

#[tokio::test]
async fn should_store_coerced_optional_numbers() {
    let (app, _db) = app().await;
    let body = r#"{"title":"Harbour Flat","location":"Old Port","price":"150000","status":"for-rent",
        "type":"apartment","bedrooms":"3","bathrooms":"2","size":"88.5"}"#;

    let resp = app
        .clone()
        .oneshot(post_property("/api/properties", body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(list_properties()).await.unwrap();
    let listed = body_json(resp).await;
    assert_eq!(listed[0]["price"].as_f64(), Some(150_000.0));
    assert_eq!(listed[0]["bedrooms"], 3);
    assert_eq!(listed[0]["bathrooms"], 2);
    assert_eq!(listed[0]["size"].as_f64(), Some(88.5));
    assert!(listed[0]["description"].is_null());
}

#[tokio::test]
async fn should_list_n_creations_newest_first() {
    let (app, _db) = app().await;
    let titles = ["North", "East", "South", "West"];
    for title in titles {
        let body = LAKEVIEW.replace("Lakeview Condo", title);
        let resp = app
            .clone()
            .oneshot(post_property("/api/properties", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.oneshot(list_properties()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed = body_json(resp).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), titles.len());

    let created_at: Vec<chrono::DateTime<chrono::FixedOffset>> = listed
        .iter()
        .map(|p| chrono::DateTime::parse_from_rfc3339(p["createdAt"].as_str().unwrap()).unwrap())
        .collect();
    assert!(created_at.windows(2).all(|pair| pair[0] >= pair[1]));

    let listed_titles: Vec<&str> = listed.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(listed_titles, vec!["West", "South", "East", "North"]);
}

#[tokio::test]
async fn should_accept_legacy_add_property_route() {
    let (app, _db) = app().await;

    let resp = app
        .clone()
        .oneshot(post_property("/api/add-property", LAKEVIEW))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = app.oneshot(list_properties()).await.unwrap();
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_non_numeric_price_without_storing() {
    let (app, _db) = app().await;
    let body = LAKEVIEW.replace("\"250000\"", "\"call for price\"");

    let resp = app
        .clone()
        .oneshot(post_property("/api/properties", &body))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["error"].is_string());

    let resp = app.oneshot(list_properties()).await.unwrap();
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// API: store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_500_when_store_is_unavailable() {
    let (app, db) = app().await;
    db.close().await;

    let resp = app
        .clone()
        .oneshot(post_property("/api/properties", LAKEVIEW))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Failed to create property" })
    );

    let resp = app.oneshot(list_properties()).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "Failed to fetch properties" })
    );
}
