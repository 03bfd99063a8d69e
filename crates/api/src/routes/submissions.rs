use axum::routing::{get, put};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Contact-form routes mounted at `/submissions`.
///
/// ```text
/// POST   /       -> create_submission (public)
/// GET    /       -> list_submissions (admin)
/// PUT    /{id}   -> update_submission (admin)
/// DELETE /{id}   -> delete_submission (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(submissions::list_submissions).post(submissions::create_submission),
        )
        .route(
            "/{id}",
            put(submissions::update_submission).delete(submissions::delete_submission),
        )
}
