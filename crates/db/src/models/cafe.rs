//! Cafe entity, its public projection, and the create/submission DTOs.

use cafedex_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `cafes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cafe {
    pub id: DbId,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
    pub city: String,
}

/// Public projection of a cafe with the internal `id` omitted.
///
/// The id is an internal handle, not part of the public data contract.
/// API consumers (`/random`, `/all`, `/search`) receive this shape; the
/// city listing that feeds the trusted presentation layer receives the
/// full [`Cafe`] row instead.
#[derive(Debug, Clone, Serialize)]
pub struct PublicCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
    pub city: String,
}

impl From<Cafe> for PublicCafe {
    fn from(cafe: Cafe) -> Self {
        Self {
            name: cafe.name,
            map_url: cafe.map_url,
            img_url: cafe.img_url,
            location: cafe.location,
            seats: cafe.seats,
            has_toilet: cafe.has_toilet,
            has_wifi: cafe.has_wifi,
            has_sockets: cafe.has_sockets,
            can_take_calls: cafe.can_take_calls,
            coffee_price: cafe.coffee_price,
            city: cafe.city,
        }
    }
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Fields for inserting a new cafe. The id is assigned by the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
    pub city: String,
}

// ---------------------------------------------------------------------------
// Form submission DTO and amenity choice labels
// ---------------------------------------------------------------------------

/// Toilet quality as presented on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToiletRating {
    Great,
    Good,
}

impl ToiletRating {
    pub fn as_bool(self) -> bool {
        matches!(self, ToiletRating::Great)
    }
}

/// Wifi quality as presented on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WifiStrength {
    Strong,
    Weak,
}

impl WifiStrength {
    pub fn as_bool(self) -> bool {
        matches!(self, WifiStrength::Strong)
    }
}

/// Socket availability as presented on the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocketAvailability {
    Few,
    None,
}

impl SocketAvailability {
    pub fn as_bool(self) -> bool {
        matches!(self, SocketAvailability::Few)
    }
}

/// Ambient noise tolerance as presented on the submission form. A
/// "Noisy" cafe is one where taking calls is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallFriendliness {
    Noisy,
    #[serde(rename = "Less Noisy")]
    LessNoisy,
}

impl CallFriendliness {
    pub fn as_bool(self) -> bool {
        matches!(self, CallFriendliness::Noisy)
    }
}

/// A human-facing submission from the add-new-cafe form.
///
/// Amenities arrive as enumerated choice labels rather than booleans.
/// Any `city` value in the payload is ignored: the city a new cafe is
/// attached to comes from the browsing route it was submitted under.
#[derive(Debug, Clone, Deserialize)]
pub struct CafeSubmission {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: ToiletRating,
    pub has_wifi: WifiStrength,
    pub has_sockets: SocketAvailability,
    pub can_take_calls: CallFriendliness,
    pub coffee_price: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl CafeSubmission {
    /// Map the choice labels to persisted booleans and pin the city to
    /// the one from the route, overriding any submitted value.
    pub fn into_create(self, city: &str) -> CreateCafe {
        CreateCafe {
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.location,
            seats: self.seats,
            has_toilet: self.has_toilet.as_bool(),
            has_wifi: self.has_wifi.as_bool(),
            has_sockets: self.has_sockets.as_bool(),
            can_take_calls: self.can_take_calls.as_bool(),
            coffee_price: self.coffee_price,
            city: city.to_string(),
        }
    }
}
