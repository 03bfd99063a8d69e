#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use keystone_api::config::ServerConfig;
use keystone_api::router::build_app_router;
use keystone_api::state::AppState;
use keystone_db::{Database, DbConfig};
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(admin_token: Option<&str>) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_token: admin_token.map(str::to_string),
    }
}

/// Lazy pools pointing at a closed port: building them never connects, and
/// any query fails fast.
pub fn unreachable_database() -> Database {
    let config = DbConfig {
        reader_url: Some("postgres://keystone@127.0.0.1:1/keystone".to_string()),
        writer_url: None,
        max_connections: 1,
        acquire_timeout_secs: 1,
    };
    Database::connect_lazy(&config).unwrap()
}

/// Full application router with the production middleware stack.
///
/// Must be called inside a tokio runtime.
pub fn build_test_app(admin_token: Option<&str>) -> Router {
    let state = AppState {
        db: unreachable_database(),
        config: Arc::new(test_config(admin_token)),
    };
    build_app_router(state).unwrap()
}

pub async fn send(app: Router, method: Method, uri: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
