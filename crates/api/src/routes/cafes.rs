//! Route definitions for the machine-facing cafe API.

use axum::routing::{delete, get, patch};
use axum::Router;

use crate::handlers::cafes;
use crate::state::AppState;

/// Machine API routes mounted at the root.
///
/// ```text
/// GET        /random               -> random_cafe
/// GET        /all                  -> all_cafes
/// GET        /search               -> search
/// GET, POST  /add                  -> add_cafe
/// PATCH      /update-price/{id}    -> update_price
/// DELETE     /report-closed/{id}   -> report_closed
/// ```
///
/// `/add` accepts both GET and POST with the same query-string contract;
/// that contract is published to existing consumers and kept as is.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/random", get(cafes::random_cafe))
        .route("/all", get(cafes::all_cafes))
        .route("/search", get(cafes::search))
        .route("/add", get(cafes::add_cafe).post(cafes::add_cafe))
        .route("/update-price/{id}", patch(cafes::update_price))
        .route("/report-closed/{id}", delete(cafes::report_closed))
}
