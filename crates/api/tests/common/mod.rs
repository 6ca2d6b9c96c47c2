#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use siloshare_api::auth::basic::{encode_basic_header, BasicAuthConfig};
use siloshare_api::config::ServerConfig;
use siloshare_api::router::build_app_router;
use siloshare_api::state::AppState;
use siloshare_core::store::StoreConfig;

pub const TEST_USER: &str = "user";
pub const TEST_PASSWORD: &str = "password";

/// Build a test `ServerConfig` with safe defaults and the given retention.
pub fn test_config(retention_secs: i64) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreConfig { retention_secs },
        sweep_interval_secs: 0,
        auth: BasicAuthConfig::new(TEST_USER, TEST_PASSWORD),
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// with a fresh store and the default retention window.
pub fn build_test_app() -> Router {
    build_test_app_with_retention(600)
}

pub fn build_test_app_with_retention(retention_secs: i64) -> Router {
    build_app_router(AppState::new(test_config(retention_secs)))
}

/// `Authorization` header value for the test credential.
pub fn auth_header() -> String {
    encode_basic_header(TEST_USER, TEST_PASSWORD)
}

/// Send a request with the test credential and an optional JSON body.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, auth_header());

    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

/// POST a raw body labelled as JSON, for malformed-payload cases.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(AUTHORIZATION, auth_header())
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a note through the API and return the `data` payload.
pub async fn create_note(app: &Router, body: Value) -> Value {
    let response = post_json(app.clone(), "/api/notes", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
