use axum::routing::{get, put};
use axum::Router;

use crate::handlers::blog_posts;
use crate::state::AppState;

/// Blog routes mounted at `/blog-posts`.
///
/// Reads address a post by slug, writes by id. Both share the `{key}`
/// segment, so the update and delete handlers parse it as an id.
///
/// ```text
/// GET    /         -> list_published_posts
/// POST   /         -> create_post (admin)
/// GET    /all      -> list_all_posts (admin)
/// GET    /{key}    -> get_post_by_slug
/// PUT    /{key}    -> update_post (admin)
/// DELETE /{key}    -> delete_post (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(blog_posts::list_published_posts).post(blog_posts::create_post),
        )
        .route("/all", get(blog_posts::list_all_posts))
        .route(
            "/{key}",
            put(blog_posts::update_post)
                .delete(blog_posts::delete_post)
                .get(blog_posts::get_post_by_slug),
        )
}
