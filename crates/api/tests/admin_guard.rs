//! Admin routes reject requests before touching the database unless the
//! bearer token matches.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, send, send_json, ADMIN_TOKEN};
use serde_json::json;

/// Admin-only endpoints that do not take a request body.
fn admin_endpoints() -> Vec<(Method, &'static str)> {
    vec![
        (Method::GET, "/api/v1/properties/analytics"),
        (Method::DELETE, "/api/v1/properties/1"),
        (Method::GET, "/api/v1/blog-posts/all"),
        (Method::DELETE, "/api/v1/blog-posts/1"),
        (Method::GET, "/api/v1/submissions"),
        (Method::DELETE, "/api/v1/submissions/1"),
    ]
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    for (method, uri) in admin_endpoints() {
        let app = common::build_test_app(Some(ADMIN_TOKEN));
        let response = send(app, method.clone(), uri, None).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "UNAUTHORIZED");
    }
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    for (method, uri) in admin_endpoints() {
        let app = common::build_test_app(Some(ADMIN_TOKEN));
        let response = send(app, method.clone(), uri, Some("not-the-token")).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn admin_routes_are_forbidden_when_no_token_is_configured() {
    let app = common::build_test_app(None);
    let response = send(app, Method::GET, "/api/v1/submissions", Some(ADMIN_TOKEN)).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn valid_token_reaches_the_handler() {
    // An unknown range fails validation before any query runs.
    let app = common::build_test_app(Some(ADMIN_TOKEN));
    let response = send(
        app,
        Method::GET,
        "/api/v1/properties/analytics?range=decade",
        Some(ADMIN_TOKEN),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Unknown time range: 'decade'");
}

#[tokio::test]
async fn blog_post_writes_require_a_numeric_id() {
    let app = common::build_test_app(Some(ADMIN_TOKEN));
    let response = send(
        app,
        Method::DELETE,
        "/api/v1/blog-posts/market-update",
        Some(ADMIN_TOKEN),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn slug_taken_by_the_admin_listing_is_rejected() {
    for (method, uri) in [(Method::POST, "/api/v1/blog-posts"), (Method::PUT, "/api/v1/blog-posts/7")] {
        let app = common::build_test_app(Some(ADMIN_TOKEN));
        let response = send_json(
            app,
            method.clone(),
            uri,
            Some(ADMIN_TOKEN),
            json!({"title": "Everything", "slug": "all"}),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Slug 'all' is reserved");
    }
}
