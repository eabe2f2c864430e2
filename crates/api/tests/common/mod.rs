#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use taskrun_api::config::ServerConfig;
use taskrun_api::router::build_app_router;
use taskrun_api::state::AppState;
use taskrun_api::tasks::TaskService;
use taskrun_core::execution::ShellRunner;
use taskrun_db::store::MemoryTaskStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and no database, so tasks live in memory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".parse().unwrap()],
        database_url: None,
        db_max_connections: 1,
        shell: "sh".to_string(),
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack (CORS, request ID, tracing, panic recovery) that production uses.
pub fn build_test_app() -> Router {
    build_test_app_with_runner(ShellRunner::default())
}

/// Like [`build_test_app`], with a custom shell runner.
pub fn build_test_app_with_runner(runner: ShellRunner) -> Router {
    let config = test_config();
    let service = TaskService::new(Arc::new(MemoryTaskStore::new()), runner);

    let state = AppState {
        tasks: Arc::new(service),
    };

    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PUT, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a task through the API and return its JSON representation.
pub async fn create_task(app: &Router, name: &str, command: &str) -> serde_json::Value {
    let response = post_json(
        app.clone(),
        "/tasks",
        serde_json::json!({ "name": name, "owner": "ada", "command": command }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
