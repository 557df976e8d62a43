//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All `/api` routes.
///
/// # Endpoints
///
/// - `GET    /links`      - List links (newest first, `limit` query param)
/// - `POST   /links`      - Create a short link
/// - `GET    /links/{id}` - Fetch a link
/// - `PUT    /links/{id}` - Update a link's destination URL
/// - `DELETE /links/{id}` - Delete a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            get(get_link_handler)
                .put(update_link_handler)
                .delete(delete_link_handler),
        )
}
