//! Route definitions for the browsing and form-submission flow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Browsing and submission routes mounted at the root.
///
/// ```text
/// GET        /location                         -> list_locations
/// GET        /location/{place}                 -> cafes_by_city
/// GET, POST  /location/{place}/add-new-cafe    -> new_cafe_form / submit_new_cafe
/// POST       /delete_cafe                      -> delete_cafe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/location", get(submissions::list_locations))
        .route("/location/{place}", get(submissions::cafes_by_city))
        .route(
            "/location/{place}/add-new-cafe",
            get(submissions::new_cafe_form).post(submissions::submit_new_cafe),
        )
        .route("/delete_cafe", post(submissions::delete_cafe))
}
