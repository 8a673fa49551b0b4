//! Repository for the `cafes` table.
//!
//! Provides cafe CRUD, the location/city lookups, and the price-only
//! partial update. Each method is a single-row atomic statement; the
//! unique constraint on `name` is the only cross-record invariant and
//! is enforced by the engine (a duplicate insert surfaces as a database
//! error with `is_unique_violation()`).

use cafedex_core::types::DbId;

use crate::models::cafe::{Cafe, CreateCafe};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, map_url, img_url, location, seats, \
    has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price, city";

/// Provides CRUD operations for cafes.
pub struct CafeRepo;

impl CafeRepo {
    /// Insert a new cafe, returning the created row with its assigned id.
    ///
    /// Fails with a unique-violation database error if a cafe with the
    /// same `name` already exists; nothing is written in that case.
    pub async fn insert(pool: &DbPool, input: &CreateCafe) -> Result<Cafe, sqlx::Error> {
        let query = format!(
            "INSERT INTO cafes \
                 (name, map_url, img_url, location, seats, \
                  has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price, city) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cafe>(&query)
            .bind(&input.name)
            .bind(&input.map_url)
            .bind(&input.img_url)
            .bind(&input.location)
            .bind(&input.seats)
            .bind(input.has_toilet)
            .bind(input.has_wifi)
            .bind(input.has_sockets)
            .bind(input.can_take_calls)
            .bind(&input.coffee_price)
            .bind(&input.city)
            .fetch_one(pool)
            .await
    }

    /// Find a cafe by its internal id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Cafe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cafes WHERE id = $1");
        sqlx::query_as::<_, Cafe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a cafe by its unique name.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Cafe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cafes WHERE name = $1");
        sqlx::query_as::<_, Cafe>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List every cafe, ordered by id so the order is stable within a
    /// single snapshot.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Cafe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cafes ORDER BY id");
        sqlx::query_as::<_, Cafe>(&query).fetch_all(pool).await
    }

    /// Find all cafes at a location, title-casing the input first so the
    /// lookup matches the stored casing convention ("church street" and
    /// "Church Street" hit the same rows).
    pub async fn find_by_location(pool: &DbPool, location: &str) -> Result<Vec<Cafe>, sqlx::Error> {
        let normalized = title_case(location);
        let query = format!("SELECT {COLUMNS} FROM cafes WHERE location = $1 ORDER BY id");
        sqlx::query_as::<_, Cafe>(&query)
            .bind(&normalized)
            .fetch_all(pool)
            .await
    }

    /// Find all cafes in a city (exact match, rows returned in full).
    pub async fn find_by_city(pool: &DbPool, city: &str) -> Result<Vec<Cafe>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cafes WHERE city = $1 ORDER BY id");
        sqlx::query_as::<_, Cafe>(&query)
            .bind(city)
            .fetch_all(pool)
            .await
    }

    /// List the distinct cities that have at least one cafe.
    pub async fn list_cities(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT city FROM cafes ORDER BY city")
            .fetch_all(pool)
            .await
    }

    /// Set a cafe's coffee price, leaving every other field untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_price(
        pool: &DbPool,
        id: DbId,
        new_price: &str,
    ) -> Result<Option<Cafe>, sqlx::Error> {
        let query = format!(
            "UPDATE cafes SET coffee_price = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cafe>(&query)
            .bind(id)
            .bind(new_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cafe by id. Returns `true` if a row was removed.
    pub async fn delete_by_id(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cafes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a cafe by its unique name. Returns `true` if a row was removed.
    pub async fn delete_by_name(pool: &DbPool, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cafes WHERE name = $1")
            .bind(name)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Title-case a free-text location: first letter of each whitespace-
/// separated word uppercased, the rest lowercased.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
