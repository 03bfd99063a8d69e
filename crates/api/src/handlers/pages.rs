//! Handlers for editable page sections.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use keystone_db::repositories::PageContentRepo;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /pages/{page}/{section}`.
#[derive(Debug, Deserialize)]
pub struct UpsertSection {
    pub content: Value,
}

/// GET /api/v1/pages/{page}
pub async fn list_page_sections(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<impl IntoResponse> {
    let sections = PageContentRepo::list_page(&state.db, &page).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// GET /api/v1/pages/{page}/{section}
pub async fn get_page_section(
    State(state): State<AppState>,
    Path((page, section)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let record = PageContentRepo::find_section(&state.db, &page, &section)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Section '{page}/{section}' not found")))?;

    Ok(Json(DataResponse { data: record }))
}

/// PUT /api/v1/pages/{page}/{section}
///
/// Creates the section or replaces its content.
pub async fn upsert_page_section(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path((page, section)): Path<(String, String)>,
    Json(input): Json<UpsertSection>,
) -> AppResult<impl IntoResponse> {
    let record = PageContentRepo::upsert_section(&state.db, &page, &section, &input.content).await?;
    Ok(Json(DataResponse { data: record }))
}
