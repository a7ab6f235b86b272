#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use pm_api::config::ServerConfig;
use pm_api::router::build_app_router;
use pm_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Debug routes are enabled so the `create-test` shortcut can be exercised.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        enable_debug_routes: true,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and the default test configuration.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Build the full application router with a custom configuration.
pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a project through the API and return its ID.
pub async fn create_project(pool: &PgPool, name: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        serde_json::json!({ "name": name }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a user through the API and return its ID.
pub async fn create_user(pool: &PgPool, username: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/users",
        serde_json::json!({
            "username": username,
            "password": "s3cret-pass",
            "email": format!("{username}@example.com"),
        }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}
