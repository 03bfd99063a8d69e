use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page content routes mounted at `/pages`.
///
/// ```text
/// GET /{page}             -> list_page_sections
/// GET /{page}/{section}   -> get_page_section
/// PUT /{page}/{section}   -> upsert_page_section (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{page}", get(pages::list_page_sections))
        .route(
            "/{page}/{section}",
            get(pages::get_page_section).put(pages::upsert_page_section),
        )
}
