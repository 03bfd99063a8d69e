use axum::routing::get;
use axum::Router;

use crate::handlers::properties;
use crate::state::AppState;

/// Property routes mounted at `/properties`.
///
/// ```text
/// GET    /            -> list_properties
/// POST   /            -> create_property (admin)
/// GET    /analytics   -> property_analytics (admin)
/// GET    /{id}        -> get_property
/// PUT    /{id}        -> update_property (admin)
/// DELETE /{id}        -> delete_property (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(properties::list_properties).post(properties::create_property),
        )
        .route("/analytics", get(properties::property_analytics))
        .route(
            "/{id}",
            get(properties::get_property)
                .put(properties::update_property)
                .delete(properties::delete_property),
        )
}
