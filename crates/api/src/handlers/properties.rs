//! Handlers for property listings.
//!
//! Public visitors can browse and filter listings; creating, editing,
//! deleting and analytics require the admin token.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use keystone_core::analytics::{compute_analytics, filter_listings, TimeRange};
use keystone_core::error::CoreError;
use keystone_core::search::PropertyFilter;
use keystone_core::types::{DbId, Record};
use keystone_db::repositories::PropertyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::query::AnalyticsParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Property",
        id,
    })
}

/// GET /api/v1/properties?search=&type=
///
/// List listings newest first, optionally filtered by a search term and type.
pub async fn list_properties(
    State(state): State<AppState>,
    Query(filter): Query<PropertyFilter>,
) -> AppResult<impl IntoResponse> {
    let properties = PropertyRepo::list(&state.db).await?;

    Ok(Json(DataResponse {
        data: filter.apply(&properties),
    }))
}

/// GET /api/v1/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let property = PropertyRepo::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: property }))
}

/// POST /api/v1/properties
pub async fn create_property(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<Record>,
) -> AppResult<impl IntoResponse> {
    let property = PropertyRepo::create(&state.db, &input).await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: property })))
}

/// PUT /api/v1/properties/{id}
pub async fn update_property(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Record>,
) -> AppResult<impl IntoResponse> {
    let property = PropertyRepo::update(&state.db, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: property }))
}

/// DELETE /api/v1/properties/{id}
pub async fn delete_property(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !PropertyRepo::delete(&state.db, id).await? {
        return Err(not_found(id));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/properties/analytics?range=&type=
///
/// Summary figures over listings created within `range` (default `all`).
pub async fn property_analytics(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<AnalyticsParams>,
) -> AppResult<impl IntoResponse> {
    let range = match params.range.as_deref() {
        Some(raw) => raw.parse::<TimeRange>()?,
        None => TimeRange::default(),
    };

    let properties = PropertyRepo::list(&state.db).await?;
    let listings = filter_listings(
        &properties,
        range,
        params.property_type.as_deref(),
        chrono::Utc::now(),
    );

    tracing::debug!(?range, listings = listings.len(), "Computing listing analytics");

    Ok(Json(DataResponse {
        data: compute_analytics(&listings),
    }))
}
