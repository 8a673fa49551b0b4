//! Typed response envelopes for the public contract.
//!
//! Success payloads are wrapped in a named container key (`"cafe"`,
//! `"cafes"`, `"success"`, `"cities"`). Use these structs instead of
//! ad-hoc `serde_json::json!` so the envelope keys stay consistent
//! across handlers.

use serde::Serialize;

/// A single cafe wrapped as `{ "cafe": {...} }`.
#[derive(Debug, Serialize)]
pub struct CafeResponse<T: Serialize> {
    pub cafe: T,
}

/// A list of cafes wrapped as `{ "cafes": [...] }`.
///
/// The element type is generic because the public API paths serialize
/// the id-free projection while the city listing serializes full rows.
#[derive(Debug, Serialize)]
pub struct CafesResponse<T: Serialize> {
    pub cafes: Vec<T>,
}

/// A success message wrapped as `{ "success": "..." }`.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

/// The distinct city list wrapped as `{ "cities": [...] }`.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}
