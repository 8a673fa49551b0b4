//! Integration tests for the browsing and form-submission flow.
//!
//! Covers the choice-label mapping, the route-city override, the
//! flash-style duplicate outcome, the id-bearing city listing, and the
//! secret-gated form delete with its redirect outcomes.

mod common;

use axum::http::{header, StatusCode};
use cafedex_db::models::cafe::{Cafe, CreateCafe};
use cafedex_db::repositories::CafeRepo;
use common::{body_json, get, post_form};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_cafe(pool: &SqlitePool, name: &str, city: &str) -> Cafe {
    CafeRepo::insert(
        pool,
        &CreateCafe {
            name: name.to_string(),
            map_url: "https://maps.example.com/cafe".to_string(),
            img_url: "https://img.example.com/cafe.jpg".to_string(),
            location: "South Congress".to_string(),
            seats: "20-40".to_string(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: None,
            city: city.to_string(),
        },
    )
    .await
    .unwrap()
}

/// A complete urlencoded submission body for the given cafe name.
fn submission_body(name: &str) -> String {
    format!(
        "name={name}&map_url=https://maps.example.com/x&img_url=https://img.example.com/x.jpg\
         &location=South+Congress&seats=30-50&has_toilet=Great&has_wifi=Weak\
         &has_sockets=Few&can_take_calls=Noisy&coffee_price=%C2%A33.00&city=London"
    )
}

// ---------------------------------------------------------------------------
// Browsing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn location_index_lists_distinct_cities(pool: SqlitePool) {
    seed_cafe(&pool, "Cafe A", "Austin").await;
    seed_cafe(&pool, "Cafe B", "London").await;
    seed_cafe(&pool, "Cafe C", "Austin").await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/location").await).await;
    assert_eq!(json["cities"], serde_json::json!(["Austin", "London"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn city_listing_includes_the_internal_id(pool: SqlitePool) {
    let cafe = seed_cafe(&pool, "Cafe A", "Austin").await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/location/Austin").await).await;
    let cafes = json["cafes"].as_array().unwrap();
    assert_eq!(cafes.len(), 1);
    assert_eq!(cafes[0]["id"], cafe.id);
    assert_eq!(cafes[0]["name"], "Cafe A");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn form_descriptor_carries_city_and_choice_labels(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/location/Austin/add-new-cafe").await).await;
    assert_eq!(json["city"], "Austin");
    assert_eq!(json["toilet_choices"], serde_json::json!(["Great", "Good"]));
    assert_eq!(json["wifi_choices"], serde_json::json!(["Strong", "Weak"]));
    assert_eq!(json["socket_choices"], serde_json::json!(["Few", "None"]));
    assert_eq!(
        json["call_choices"],
        serde_json::json!(["Noisy", "Less Noisy"])
    );
}

// ---------------------------------------------------------------------------
// Submission intake
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn submission_maps_choices_and_pins_city_to_the_route(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    // The body claims city=London; the route says Austin. Austin wins.
    let response = post_form(
        app,
        "/location/Austin/add-new-cafe",
        &submission_body("Austin Cafe"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], "The Austin Cafe saved successfully!");

    let stored = CafeRepo::find_by_name(&pool, "Austin Cafe")
        .await
        .unwrap()
        .expect("submitted cafe must be persisted");
    assert!(stored.has_toilet, "Great maps to true");
    assert!(!stored.has_wifi, "Weak maps to false");
    assert!(stored.has_sockets, "Few maps to true");
    assert!(stored.can_take_calls, "Noisy maps to true");
    assert_eq!(stored.city, "Austin");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn submission_accepts_the_two_word_calls_label(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let body = submission_body("Quiet Cafe").replace("can_take_calls=Noisy", "can_take_calls=Less+Noisy");
    let response = post_form(app, "/location/Austin/add-new-cafe", &body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = CafeRepo::find_by_name(&pool, "Quiet Cafe")
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.can_take_calls, "Less Noisy maps to false");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_submission_reports_the_location_specific_message(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let first = post_form(
        app.clone(),
        "/location/Austin/add-new-cafe",
        &submission_body("Austin Cafe"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_form(
        app,
        "/location/Austin/add-new-cafe",
        &submission_body("Austin Cafe"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(
        json["error"]["Failed"],
        "The Austin Cafe is already in the location"
    );

    assert_eq!(CafeRepo::list_all(&pool).await.unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Form-gated deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn form_delete_with_wrong_secret_leaves_the_record_untouched(pool: SqlitePool) {
    seed_cafe(&pool, "Austin Cafe", "Austin").await;
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        "/delete_cafe?location=Austin&name=Austin%20Cafe",
        "secret_key=WrongSecret",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/location/Austin?flash=invalid-key"
    );

    assert!(CafeRepo::find_by_name(&pool, "Austin Cafe")
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn form_delete_with_correct_secret_removes_the_record(pool: SqlitePool) {
    seed_cafe(&pool, "Austin Cafe", "Austin").await;
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        "/delete_cafe?location=Austin&name=Austin%20Cafe",
        "secret_key=TOPSECRETKEY",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/location/Austin?flash=deleted"
    );

    assert!(CafeRepo::find_by_name(&pool, "Austin Cafe")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn form_delete_of_unknown_name_redirects_with_not_found(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_form(
        app,
        "/delete_cafe?location=New%20York&name=No%20Such%20Cafe",
        "secret_key=TOPSECRETKEY",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/location/New%20York?flash=not-found"
    );
}
