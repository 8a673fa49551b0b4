//! Handlers for the machine-facing cafe API.
//!
//! Read side: `/random`, `/all`, `/search` — all serialize the id-free
//! [`PublicCafe`] projection. Write side: `/add`, `/update-price/{id}`,
//! `/report-closed/{id}`. The delete path checks its key strictly before
//! any record lookup so a failed key never reveals whether an id exists.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cafedex_core::error::CoreError;
use cafedex_core::types::DbId;
use cafedex_db::models::cafe::{Cafe, CreateCafe, PublicCafe};
use cafedex_db::repositories::CafeRepo;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use serde_json::json;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::response::{CafeResponse, CafesResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query service
// ---------------------------------------------------------------------------

/// GET /random
///
/// One cafe chosen uniformly at random from the full set.
pub async fn random_cafe(
    State(state): State<AppState>,
) -> AppResult<Json<CafeResponse<PublicCafe>>> {
    let cafes = CafeRepo::list_all(&state.pool).await?;

    let cafe = cafes
        .choose(&mut rand::rng())
        .cloned()
        .ok_or(AppError::Core(CoreError::EmptyCollection { entity: "Cafe" }))?;

    Ok(Json(CafeResponse { cafe: cafe.into() }))
}

/// GET /all
pub async fn all_cafes(
    State(state): State<AppState>,
) -> AppResult<Json<CafesResponse<PublicCafe>>> {
    let cafes = CafeRepo::list_all(&state.pool).await?;

    Ok(Json(CafesResponse {
        cafes: cafes.into_iter().map(PublicCafe::from).collect(),
    }))
}

/// Query parameters for `/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub loc: String,
}

/// GET /search?loc=
///
/// Exact-match lookup after title-case normalization of the input. An
/// empty match set is a normal outcome and is answered directly here
/// with the fixed not-found body, not routed through the error path.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Response> {
    let cafes = CafeRepo::find_by_location(&state.pool, &params.loc).await?;

    if cafes.is_empty() {
        let body = json!({
            "error": {"Not Found": "Sorry, we don't have a cafe at that location."}
        });
        return Ok((StatusCode::NOT_FOUND, Json(body)).into_response());
    }

    let cafes: Vec<PublicCafe> = cafes.into_iter().map(PublicCafe::from).collect();
    Ok(Json(CafesResponse { cafes }).into_response())
}

// ---------------------------------------------------------------------------
// Mutation service
// ---------------------------------------------------------------------------

/// Query parameters for `/add`. Boolean fields arrive as 0/1 integers.
#[derive(Debug, Deserialize)]
pub struct AddCafeParams {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: i64,
    pub has_wifi: i64,
    pub has_sockets: i64,
    pub can_take_calls: i64,
    pub coffee_price: Option<String>,
    pub city: String,
}

impl AddCafeParams {
    /// Validate that required text fields are non-empty and convert the
    /// 0/1 integers into booleans.
    fn into_create(self) -> Result<CreateCafe, CoreError> {
        for (field, value) in [
            ("name", &self.name),
            ("map_url", &self.map_url),
            ("img_url", &self.img_url),
            ("location", &self.location),
            ("seats", &self.seats),
            ("city", &self.city),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::Validation(format!("{field} must not be empty")));
            }
        }

        Ok(CreateCafe {
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.location,
            seats: self.seats,
            has_toilet: self.has_toilet != 0,
            has_wifi: self.has_wifi != 0,
            has_sockets: self.has_sockets != 0,
            can_take_calls: self.can_take_calls != 0,
            coffee_price: self.coffee_price,
            city: self.city,
        })
    }
}

/// GET/POST /add?name=&map_url=&...
///
/// A duplicate name is an expected, reportable outcome (409 with the
/// fixed "Already Stored" body via [`AppError`]), never a crash.
pub async fn add_cafe(
    State(state): State<AppState>,
    Query(params): Query<AddCafeParams>,
) -> AppResult<(StatusCode, Json<SuccessResponse>)> {
    let input = params.into_create()?;
    let cafe: Cafe = CafeRepo::insert(&state.pool, &input)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                AppError::Core(CoreError::Duplicate { entity: "Cafe" })
            } else {
                AppError::Database(err)
            }
        })?;

    tracing::info!(cafe_id = cafe.id, name = %cafe.name, city = %cafe.city, "Cafe added");

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            success: "Successfully added the new cafe".to_string(),
        }),
    ))
}

/// Query parameters for `/update-price/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdatePriceParams {
    pub new_price: String,
}

/// PATCH /update-price/{id}?new_price=
pub async fn update_price(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<UpdatePriceParams>,
) -> AppResult<Json<SuccessResponse>> {
    CafeRepo::update_price(&state.pool, id, &params.new_price)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Cafe", id }))?;

    tracing::info!(cafe_id = id, new_price = %params.new_price, "Coffee price updated");

    Ok(Json(SuccessResponse {
        success: "Successfully changed the price".to_string(),
    }))
}

/// Query parameters for `/report-closed/{id}`.
#[derive(Debug, Deserialize)]
pub struct ReportClosedParams {
    #[serde(rename = "api-key")]
    pub api_key: String,
}

/// DELETE /report-closed/{id}?api-key=
///
/// The key comparison happens before `id` is looked up at all: a wrong
/// key always yields the same Unauthorized outcome whether or not the
/// record exists.
pub async fn report_closed(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<ReportClosedParams>,
) -> AppResult<Json<SuccessResponse>> {
    if params.api_key != state.config.api_delete_key {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Sorry, that's not allowed. Make sure you have the correct api_key",
        )));
    }

    let deleted = CafeRepo::delete_by_id(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Cafe", id }));
    }

    tracing::info!(cafe_id = id, "Cafe deleted (reported closed)");

    Ok(Json(SuccessResponse {
        success: "Successfully deleted the cafe.".to_string(),
    }))
}
