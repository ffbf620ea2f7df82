use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use series_api::config::Config;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();

    let state = series_api::api::create_app_state(config, None)
        .await
        .expect("Failed to create app state");
    series_api::api::router(state)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_string(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get_text(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn star_trek() -> Value {
    json!({
        "title": "Star Trek",
        "synopsis": "It all started when a supermassive star exploded...",
        "season": 4,
        "episodeCount": 25,
        "cast": "A, B, C",
        "category": "Drama"
    })
}

async fn create(app: &Router, body: Value) -> i64 {
    let (status, json) = send(app, "POST", "/api/series", Some(body)).await;
    assert_eq!(status, StatusCode::OK, "create failed: {json}");
    json["data"]["serie"]["id"].as_i64().expect("assigned id")
}

#[tokio::test]
async fn test_list_is_empty_initially() {
    let app = spawn_app().await;

    let (status, json) = send(&app, "GET", "/api/series", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_create_then_get_returns_same_record() {
    let app = spawn_app().await;

    let (status, json) = send(&app, "POST", "/api/series", Some(star_trek())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["message"],
        "The series Star Trek, season 4 was saved successfully"
    );
    let id = json["data"]["serie"]["id"].as_i64().unwrap();

    let (status, json) = send(&app, "GET", &format!("/api/series/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let mut expected = star_trek();
    expected["id"] = json!(id);
    assert_eq!(json["data"], expected);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let app = spawn_app().await;
    let mut body = star_trek();
    body["id"] = json!(500);

    let id = create(&app, body).await;

    assert_ne!(id, 500);
    let (status, _) = send(&app, "GET", "/api/series/500", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_rejects_invalid_payloads() {
    let app = spawn_app().await;

    let mut missing_title = star_trek();
    missing_title.as_object_mut().unwrap().remove("title");
    let (status, json) = send(&app, "POST", "/api/series", Some(missing_title)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Invalid data: title is required");

    let mut wrong_type = star_trek();
    wrong_type["season"] = json!("four");
    let (status, json) = send(&app, "POST", "/api/series", Some(wrong_type)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid data");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/series")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (_, json) = send(&app, "GET", "/api/series", None).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_malformed_ids_are_bad_requests() {
    let app = spawn_app().await;
    create(&app, star_trek()).await;

    for method in ["GET", "DELETE"] {
        let (status, json) = send(&app, method, "/api/series/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "The identifier abc is invalid");

        let (status, json) = send(&app, method, "/api/series/", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "The identifier is invalid");

        let (status, _) = send(&app, method, "/api/series/1.5", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    let (_, json) = send(&app, "GET", "/api/series", None).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = spawn_app().await;

    for method in ["GET", "DELETE"] {
        let (status, json) = send(&app, method, "/api/series/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json["error"],
            "The series with identifier 999 was not found or never existed"
        );
    }
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = spawn_app().await;
    let id = create(&app, star_trek()).await;

    let (status, json) = send(&app, "DELETE", &format!("/api/series/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["message"],
        "The series Star Trek, season 4 was deleted successfully"
    );

    let (status, _) = send(&app, "GET", &format!("/api/series/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", &format!("/api/series/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_replaces_record() {
    let app = spawn_app().await;
    let id = create(&app, star_trek()).await;

    let replacement = json!({
        "id": id,
        "title": "Star Trek: Voyager",
        "season": 7,
        "episodeCount": 26
    });
    let (status, json) = send(&app, "PUT", "/api/series", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["data"]["message"],
        "The series Star Trek: Voyager, season 7 was updated successfully"
    );

    let (_, json) = send(&app, "GET", &format!("/api/series/{id}"), None).await;
    assert_eq!(
        json["data"],
        json!({
            "id": id,
            "title": "Star Trek: Voyager",
            "synopsis": null,
            "season": 7,
            "episodeCount": 26,
            "cast": null,
            "category": null
        })
    );
}

#[tokio::test]
async fn test_update_failures() {
    let app = spawn_app().await;

    let (status, json) = send(&app, "PUT", "/api/series", Some(star_trek())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "There was an error updating the series Star Trek, season 4: id is required"
    );

    let mut unknown = star_trek();
    unknown["id"] = json!(321);
    let (status, json) = send(&app, "PUT", "/api/series", Some(unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["error"],
        "The series with identifier 321 was not found or never existed"
    );

    let (_, json) = send(&app, "GET", "/api/series", None).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_list_counts_creates_minus_deletes() {
    let app = spawn_app().await;

    let mut ids = Vec::new();
    for season in 1..=5 {
        let mut body = star_trek();
        body["season"] = json!(season);
        ids.push(create(&app, body).await);
    }
    for id in &ids[..2] {
        let (status, _) = send(&app, "DELETE", &format!("/api/series/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, json) = send(&app, "GET", "/api/series", None).await;
    let seasons: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["season"].as_i64().unwrap())
        .collect();
    assert_eq!(seasons, vec![3, 4, 5]);
}

#[tokio::test]
async fn test_system_status_and_openapi() {
    let app = spawn_app().await;
    create(&app, star_trek()).await;

    let (status, json) = send(&app, "GET", "/api/system/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["database"], true);
    assert_eq!(json["data"]["series_count"], 1);

    let (status, json) = send(&app, "GET", "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["info"]["title"], "Series API");
    assert!(json["paths"]["/api/series/{id}"]["delete"].is_object());
    assert!(json["components"]["schemas"]["Serie"].is_object());
    assert_eq!(json["info"]["license"]["name"], "Open Source");
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let app = spawn_app().await;

    let (status, body) = get_text(&app, "/swagger/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("swagger"), "unexpected index page: {body}");
}

#[tokio::test]
async fn test_metrics_without_recorder() {
    let app = spawn_app().await;

    let (status, body) = get_text(&app, "/api/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Metrics not enabled or failed to initialize");
}
