pub mod cafes;
pub mod health;
pub mod locations;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /random                           random cafe (GET)
/// /all                              all cafes (GET)
/// /search?loc=                      cafes at a location (GET)
/// /add                              create cafe from query params (GET, POST)
/// /update-price/{id}?new_price=     set coffee price (PATCH)
/// /report-closed/{id}?api-key=      key-gated delete (DELETE)
///
/// /location                         distinct cities (GET)
/// /location/{place}                 city listing, full rows (GET)
/// /location/{place}/add-new-cafe    form descriptor / submission (GET, POST)
/// /delete_cafe?location=&name=      secret-gated delete by name (POST)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(cafes::router())
        .merge(locations::router())
}
