//! Bearer-token guard for admin routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use keystone_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Requires `Authorization: Bearer <ADMIN_TOKEN>`.
///
/// Rejects with 401 when the header is missing or the token does not match,
/// and with 403 when the server has no admin token configured.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let expected = state.config.admin_token.as_deref().ok_or_else(|| {
            AppError::Core(CoreError::Forbidden("Admin access is disabled".into()))
        })?;

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        if !tokens_match(token.trim(), expected) {
            tracing::warn!("Rejected admin request with invalid token");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin token".into(),
            )));
        }

        Ok(RequireAdmin)
    }
}

/// Compare without short-circuiting on the first differing byte.
fn tokens_match(given: &str, expected: &str) -> bool {
    let (a, b) = (given.as_bytes(), expected.as_bytes());
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
