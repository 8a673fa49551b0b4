//! Handlers for the human browsing and submission flow.
//!
//! The city listing feeds the trusted presentation layer and therefore
//! returns full rows including ids. The submission form exchanges
//! enumerated choice labels and flash-style status payloads; templating
//! itself is a collaborator outside this service.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use cafedex_core::error::CoreError;
use cafedex_db::models::cafe::{Cafe, CafeSubmission};
use cafedex_db::repositories::CafeRepo;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::response::{CafesResponse, CitiesResponse, SuccessResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Browsing
// ---------------------------------------------------------------------------

/// GET /location
///
/// Distinct cities for the location index page.
pub async fn list_locations(State(state): State<AppState>) -> AppResult<Json<CitiesResponse>> {
    let cities = CafeRepo::list_cities(&state.pool).await?;
    Ok(Json(CitiesResponse { cities }))
}

/// GET /location/{place}
///
/// All cafes in a city, as full rows. This path feeds the internal
/// presentation layer, so the id is intentionally kept.
pub async fn cafes_by_city(
    State(state): State<AppState>,
    Path(place): Path<String>,
) -> AppResult<Json<CafesResponse<Cafe>>> {
    let cafes = CafeRepo::find_by_city(&state.pool, &place).await?;
    Ok(Json(CafesResponse { cafes }))
}

// ---------------------------------------------------------------------------
// Submission intake
// ---------------------------------------------------------------------------

/// Form state handed to the submission page: the fixed city and the
/// choice labels for each amenity axis.
#[derive(Debug, Serialize)]
pub struct SubmissionForm {
    pub city: String,
    pub toilet_choices: [&'static str; 2],
    pub wifi_choices: [&'static str; 2],
    pub socket_choices: [&'static str; 2],
    pub call_choices: [&'static str; 2],
}

/// GET /location/{place}/add-new-cafe
pub async fn new_cafe_form(Path(place): Path<String>) -> Json<SubmissionForm> {
    Json(SubmissionForm {
        city: place,
        toilet_choices: ["Great", "Good"],
        wifi_choices: ["Strong", "Weak"],
        socket_choices: ["Few", "None"],
        call_choices: ["Noisy", "Less Noisy"],
    })
}

/// POST /location/{place}/add-new-cafe
///
/// Accepts the urlencoded form, maps the choice labels to booleans, and
/// pins the city to `{place}` regardless of what the payload says. Both
/// outcomes are flash-style payloads the form page re-presents; the
/// duplicate case reports the location-specific message rather than the
/// generic API one.
pub async fn submit_new_cafe(
    State(state): State<AppState>,
    Path(place): Path<String>,
    Form(submission): Form<CafeSubmission>,
) -> AppResult<Response> {
    for (field, value) in [
        ("name", &submission.name),
        ("map_url", &submission.map_url),
        ("img_url", &submission.img_url),
        ("location", &submission.location),
        ("seats", &submission.seats),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "{field} must not be empty"
            ))));
        }
    }

    let name = submission.name.clone();
    let input = submission.into_create(&place);

    match CafeRepo::insert(&state.pool, &input).await {
        Ok(cafe) => {
            tracing::info!(cafe_id = cafe.id, name = %cafe.name, city = %place, "Cafe submitted");
            let body = SuccessResponse {
                success: format!("The {name} saved successfully!"),
            };
            Ok((StatusCode::CREATED, Json(body)).into_response())
        }
        Err(err) if is_unique_violation(&err) => {
            let body = json!({
                "error": {"Failed": format!("The {name} is already in the location")}
            });
            Ok((StatusCode::CONFLICT, Json(body)).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

// ---------------------------------------------------------------------------
// Form-gated deletion
// ---------------------------------------------------------------------------

/// Query parameters for `/delete_cafe`.
#[derive(Debug, Deserialize)]
pub struct DeleteCafeParams {
    pub location: String,
    pub name: String,
}

/// Form body for `/delete_cafe`.
#[derive(Debug, Deserialize)]
pub struct DeleteCafeSecret {
    pub secret_key: String,
}

/// POST /delete_cafe?location=&name= with body `secret_key=`
///
/// The secret comparison happens before the name is looked up, so a
/// wrong secret yields the same outcome whether or not the cafe exists.
/// Every outcome redirects back to the city listing with an enumerated
/// `flash` code for the presentation layer to render.
pub async fn delete_cafe(
    State(state): State<AppState>,
    Query(params): Query<DeleteCafeParams>,
    Form(form): Form<DeleteCafeSecret>,
) -> AppResult<Redirect> {
    let flash = if form.secret_key != state.config.form_delete_secret {
        tracing::warn!(city = %params.location, "Form delete rejected: wrong secret");
        "invalid-key"
    } else if CafeRepo::delete_by_name(&state.pool, &params.name).await? {
        tracing::info!(name = %params.name, city = %params.location, "Cafe deleted via form");
        "deleted"
    } else {
        "not-found"
    };

    let target = format!("/location/{}?flash={flash}", encode_segment(&params.location));
    Ok(Redirect::to(&target))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Percent-encode a city name for use as a path segment in a redirect
/// target. City names are short human labels; everything outside the
/// URL-unreserved set is escaped.
fn encode_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
