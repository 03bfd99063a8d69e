//! Handlers for client contact-form submissions.
//!
//! Anyone can submit the form; reading and managing submissions is admin only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use keystone_core::error::CoreError;
use keystone_core::types::{DbId, Record};
use keystone_db::repositories::ClientSubmissionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "ClientSubmission",
        id,
    })
}

/// POST /api/v1/submissions
pub async fn create_submission(
    State(state): State<AppState>,
    Json(input): Json<Record>,
) -> AppResult<impl IntoResponse> {
    let submission = ClientSubmissionRepo::create(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: submission })))
}

/// GET /api/v1/submissions
pub async fn list_submissions(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let submissions = ClientSubmissionRepo::list(&state.db).await?;
    Ok(Json(DataResponse { data: submissions }))
}

/// PUT /api/v1/submissions/{id}
pub async fn update_submission(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Record>,
) -> AppResult<impl IntoResponse> {
    let submission = ClientSubmissionRepo::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: submission }))
}

/// DELETE /api/v1/submissions/{id}
pub async fn delete_submission(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !ClientSubmissionRepo::delete(&state.db, id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
