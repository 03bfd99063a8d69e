pub mod blog_posts;
pub mod health;
pub mod pages;
pub mod properties;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /properties                       list (?search=&type=), create (admin)
/// /properties/analytics             listing analytics (?range=&type=, admin)
/// /properties/{id}                  get, update, delete (admin writes)
///
/// /blog-posts                       list published, create (admin)
/// /blog-posts/all                   list including drafts (admin)
/// /blog-posts/{slug}                get published or draft by slug
/// /blog-posts/{id}                  update, delete (admin)
///
/// /submissions                      contact form (POST), list (admin)
/// /submissions/{id}                 update, delete (admin)
///
/// /pages/{page}                     list page sections
/// /pages/{page}/{section}           get section, upsert (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/properties", properties::router())
        .nest("/blog-posts", blog_posts::router())
        .nest("/submissions", submissions::router())
        .nest("/pages", pages::router())
}
