//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use keystone_api::error::AppError;
use keystone_core::error::CoreError;
use keystone_core::table::TableCategory;
use keystone_db::DbError;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Property",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Property with id 42 not found");
}

#[tokio::test]
async fn keyed_not_found_returns_404() {
    let (status, json) =
        error_to_response(AppError::NotFound("Blog post 'x' not found".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Blog post 'x' not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("Unknown table category: 'x'".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Missing Authorization header".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn unconfigured_database_returns_503() {
    let err = AppError::Db(DbError::Unconfigured("DATABASE_URL is not set".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
    assert!(!json.to_string().contains("DATABASE_URL"));
}

#[tokio::test]
async fn unknown_column_returns_400_naming_the_field() {
    let err = AppError::Db(DbError::UnknownColumn {
        table: TableCategory::Properties,
        column: "bedrooms".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Unknown field 'bedrooms' for properties");
}

#[tokio::test]
async fn empty_record_returns_400() {
    let (status, _) =
        error_to_response(AppError::Db(DbError::EmptyRecord(TableCategory::BlogPosts))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let err = AppError::Db(DbError::Sqlx(sqlx::Error::RowNotFound));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn pool_timeout_returns_503() {
    let (status, _) = error_to_response(AppError::Db(DbError::Sqlx(sqlx::Error::PoolTimedOut))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Db(DbError::Sqlx(sqlx::Error::Protocol(
        "secret database credentials leaked".into(),
    )));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains("secret"));
    assert_eq!(json["error"], "An internal error occurred");
}
