//! Handlers for blog posts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use keystone_core::error::CoreError;
use keystone_core::fields::frontend;
use keystone_core::types::{DbId, Record};
use keystone_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Slugs that collide with static routes under `/blog-posts`.
const RESERVED_SLUGS: &[&str] = &["all"];

fn parse_id(key: &str) -> AppResult<DbId> {
    key.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid blog post id: '{key}'")))
}

fn check_slug(input: &Record) -> AppResult<()> {
    match input.get(frontend::SLUG).and_then(serde_json::Value::as_str) {
        Some(slug) if RESERVED_SLUGS.contains(&slug.trim()) => Err(AppError::Core(
            CoreError::Validation(format!("Slug '{slug}' is reserved")),
        )),
        _ => Ok(()),
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "BlogPost",
        id,
    })
}

/// GET /api/v1/blog-posts
pub async fn list_published_posts(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list_published(&state.db).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/blog-posts/all
///
/// Drafts included.
pub async fn list_all_posts(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list_all(&state.db).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/blog-posts/{slug}
pub async fn get_post_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Blog post '{slug}' not found")))?;

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/v1/blog-posts
pub async fn create_post(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<Record>,
) -> AppResult<impl IntoResponse> {
    check_slug(&input)?;
    let post = BlogPostRepo::create(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/v1/blog-posts/{id}
pub async fn update_post(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(input): Json<Record>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&key)?;
    check_slug(&input)?;
    let post = BlogPostRepo::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/blog-posts/{id}
pub async fn delete_post(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&key)?;
    if !BlogPostRepo::delete(&state.db, id).await? {
        return Err(not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}
