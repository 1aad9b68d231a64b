//! End-to-end API tests over an in-memory SQLite database.
//!
//! Each test builds the full router, runs the migrations, and drives
//! it through tower as a plain HTTP service.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::Service;

use ev_catalog::create_api_router;
use ev_catalog::domain::RepositoryProvider;
use ev_catalog::infrastructure::database::migrator::Migrator;
use ev_catalog::SeaOrmRepositoryProvider;

async fn setup_app() -> Router {
    // A single pooled connection keeps every query on the same
    // in-memory database.
    let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    create_api_router(repos, db)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn request_with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &mut Router, req: Request<Body>) -> (StatusCode, Value) {
    let mut svc = app.as_service::<Body>();
    let resp = svc.call(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn tesla_model3() -> Value {
    json!({
        "brand": "Tesla",
        "model": "Model 3",
        "year": 2023,
        "battery_kwh": 75.0,
        "range_km": 500.0,
        "available": true,
        "image_url": "/images/model3.jpg"
    })
}

fn epa_profile() -> Value {
    json!({
        "vehicle_model": "Model 3",
        "range_standard": "EPA",
        "consumption_kwh_100km": 15.0,
        "charge_time_hours": 8.0,
        "charge_difficulty": "low",
        "home_install_required": false,
        "image_url": null
    })
}

fn downtown_station() -> Value {
    json!({
        "name": "Supercharger Centro",
        "location": "Av. Principal 123, Quito",
        "connector_type": "Tesla",
        "power_kw": 250.0,
        "connector_count": 8,
        "public_access": true,
        "opening_hours": "24/7",
        "cost_per_kwh": 0.25,
        "operator": "Tesla",
        "image_url": null
    })
}

fn register_body() -> Value {
    json!({
        "name": "Maria Lopez",
        "age": 28,
        "email": "maria@example.com",
        "national_id": "1712345678",
        "phone": "0998765432",
        "password": "s3cure-password"
    })
}

// ── Vehicles ───────────────────────────────────────────────────

#[tokio::test]
async fn vehicle_lifecycle_create_duplicate_get_delete_history() {
    let mut app = setup_app().await;

    // Create → 201 with assigned id 1, every field round-trips.
    let (status, body) =
        send(&mut app, request_with_json("POST", "/api/v1/vehicles", &tesla_model3())).await;
    assert_eq!(status, StatusCode::CREATED);
    let created = &body["data"];
    assert_eq!(created["id"], 1);
    assert_eq!(created["brand"], "Tesla");
    assert_eq!(created["model"], "Model 3");
    assert_eq!(created["year"], 2023);
    assert_eq!(created["battery_kwh"], 75.0);
    assert_eq!(created["range_km"], 500.0);
    assert_eq!(created["available"], true);
    assert_eq!(created["image_url"], "/images/model3.jpg");

    // Same (model, year) again, even with another brand → 400, and
    // only one row is stored.
    let mut duplicate = tesla_model3();
    duplicate["brand"] = json!("Telsa Motors");
    let (status, body) =
        send(&mut app, request_with_json("POST", "/api/v1/vehicles", &duplicate)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (status, body) = send(&mut app, get("/api/v1/vehicles")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Get by id → 200.
    let (status, body) = send(&mut app, get("/api/v1/vehicles/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["brand"], "Tesla");

    // Delete → 204; active gone, history holds exactly one row with
    // the original id and matching fields.
    let (status, _) = send(&mut app, delete("/api/v1/vehicles/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&mut app, get("/api/v1/vehicles/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&mut app, get("/api/v1/vehicles/deleted")).await;
    assert_eq!(status, StatusCode::OK);
    let history = body["data"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], 1);
    assert_eq!(history[0]["brand"], "Tesla");
    assert_eq!(history[0]["model"], "Model 3");
    assert_eq!(history[0]["year"], 2023);
    assert!(history[0]["deleted_at"].is_string());

    // History row is also addressable by its original id.
    let (status, body) = send(&mut app, get("/api/v1/vehicles/deleted/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["model"], "Model 3");

    // Deleting again → 404 (history is terminal, not re-deletable).
    let (status, _) = send(&mut app, delete("/api/v1/vehicles/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_vehicle_list_returns_empty_sequence() {
    let mut app = setup_app().await;

    let (status, body) = send(&mut app, get("/api/v1/vehicles?skip=0&limit=50")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    // Out-of-range offset is an empty page, not an error.
    let (status, body) = send(&mut app, get("/api/v1/vehicles?skip=1000&limit=10")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn empty_patch_leaves_vehicle_unchanged() {
    let mut app = setup_app().await;

    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &tesla_model3())).await;
    let (_, before) = send(&mut app, get("/api/v1/vehicles/1")).await;

    let (status, after) =
        send(&mut app, request_with_json("PATCH", "/api/v1/vehicles/1", &json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    // Identical payload, timestamps included: a no-op patch does not
    // touch the row.
    assert_eq!(after["data"], before["data"]);

    let (_, stored) = send(&mut app, get("/api/v1/vehicles/1")).await;
    assert_eq!(stored["data"], before["data"]);
}

#[tokio::test]
async fn partial_update_changes_only_supplied_fields() {
    let mut app = setup_app().await;

    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &tesla_model3())).await;

    let (status, body) = send(
        &mut app,
        request_with_json("PATCH", "/api/v1/vehicles/1", &json!({"range_km": 600.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["range_km"], 600.0);
    assert_eq!(body["data"]["brand"], "Tesla");
    assert_eq!(body["data"]["battery_kwh"], 75.0);
    assert_eq!(body["data"]["image_url"], "/images/model3.jpg");

    // PUT routes to the same partial-update semantics.
    let (status, body) = send(
        &mut app,
        request_with_json("PUT", "/api/v1/vehicles/1", &json!({"available": false})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["available"], false);
    assert_eq!(body["data"]["range_km"], 600.0);
}

#[tokio::test]
async fn explicit_null_clears_image_url() {
    let mut app = setup_app().await;

    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &tesla_model3())).await;

    let (status, body) = send(
        &mut app,
        request_with_json("PATCH", "/api/v1/vehicles/1", &json!({"image_url": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["image_url"], Value::Null);
    // Other fields kept.
    assert_eq!(body["data"]["brand"], "Tesla");
}

#[tokio::test]
async fn vehicle_validation_failures_return_422() {
    let mut app = setup_app().await;

    let invalid = json!({
        "brand": "T",               // too short (min 2)
        "model": "Model 3",
        "year": 2030,               // future year not allowed
        "battery_kwh": -10.0,       // negative
        "range_km": 500.0,
        "available": true
    });
    let (status, body) =
        send(&mut app, request_with_json("POST", "/api/v1/vehicles", &invalid)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("brand"));

    // Nothing was stored.
    let (_, body) = send(&mut app, get("/api/v1/vehicles")).await;
    assert_eq!(body["data"], json!([]));

    // Update payloads are validated too.
    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &tesla_model3())).await;
    let (status, _) = send(
        &mut app,
        request_with_json("PATCH", "/api/v1/vehicles/1", &json!({"range_km": -100.0})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn vehicle_search_is_case_insensitive_substring() {
    let mut app = setup_app().await;

    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &tesla_model3())).await;
    let mut leaf = tesla_model3();
    leaf["brand"] = json!("Nissan");
    leaf["model"] = json!("Leaf");
    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &leaf)).await;

    let (status, body) = send(&mut app, get("/api/v1/vehicles/search?model=model")).await;
    assert_eq!(status, StatusCode::OK);
    let found = body["data"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["model"], "Model 3");

    // Empty result is a 404, matching the per-entity search contract.
    let (status, _) = send(&mut app, get("/api/v1/vehicles/search?model=nonexistent")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_vehicle_update_and_delete_return_404() {
    let mut app = setup_app().await;

    let (status, _) = send(
        &mut app,
        request_with_json("PATCH", "/api/v1/vehicles/9999", &json!({"range_km": 100.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&mut app, delete("/api/v1/vehicles/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&mut app, get("/api/v1/vehicles/9999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── Charge profiles ────────────────────────────────────────────

#[tokio::test]
async fn charge_profile_lifecycle_and_duplicate_key() {
    let mut app = setup_app().await;

    let (status, body) = send(
        &mut app,
        request_with_json("POST", "/api/v1/charge-profiles", &epa_profile()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["range_standard"], "EPA");
    assert_eq!(body["data"]["charge_difficulty"], "low");

    // Same (vehicle_model, range_standard) → 400.
    let (status, _) = send(
        &mut app,
        request_with_json("POST", "/api/v1/charge-profiles", &epa_profile()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Same model under a different standard is a new profile.
    let mut wltp = epa_profile();
    wltp["range_standard"] = json!("WLTP");
    let (status, _) = send(
        &mut app,
        request_with_json("POST", "/api/v1/charge-profiles", &wltp),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Partial update of the difficulty only.
    let (status, body) = send(
        &mut app,
        request_with_json(
            "PATCH",
            "/api/v1/charge-profiles/1",
            &json!({"charge_difficulty": "medium"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["charge_difficulty"], "medium");
    assert_eq!(body["data"]["vehicle_model"], "Model 3");

    // Delete to history.
    let (status, _) = send(&mut app, delete("/api/v1/charge-profiles/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = send(&mut app, get("/api/v1/charge-profiles/deleted")).await;
    assert_eq!(status, StatusCode::OK);
    let history = body["data"].as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], 1);
    assert_eq!(history[0]["charge_difficulty"], "medium");
}

#[tokio::test]
async fn charge_profile_rejects_unknown_enum_values() {
    let mut app = setup_app().await;

    let mut bad_standard = epa_profile();
    bad_standard["range_standard"] = json!("JC08");
    let (status, body) = send(
        &mut app,
        request_with_json("POST", "/api/v1/charge-profiles", &bad_standard),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("range_standard"));

    let mut bad_difficulty = epa_profile();
    bad_difficulty["charge_difficulty"] = json!("extreme");
    let (status, _) = send(
        &mut app,
        request_with_json("POST", "/api/v1/charge-profiles", &bad_difficulty),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = send(&mut app, get("/api/v1/charge-profiles")).await;
    assert_eq!(body["data"], json!([]));
}

// ── Stations ───────────────────────────────────────────────────

#[tokio::test]
async fn station_lifecycle_and_duplicate_key() {
    let mut app = setup_app().await;

    let (status, body) = send(
        &mut app,
        request_with_json("POST", "/api/v1/stations", &downtown_station()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["connector_type"], "Tesla");

    // Same (name, location) → 400.
    let (status, _) = send(
        &mut app,
        request_with_json("POST", "/api/v1/stations", &downtown_station()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Same name elsewhere is allowed.
    let mut suburb = downtown_station();
    suburb["location"] = json!("Ruta Norte km 12, Quito");
    let (status, _) = send(
        &mut app,
        request_with_json("POST", "/api/v1/stations", &suburb),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Search by name.
    let (status, body) = send(&mut app, get("/api/v1/stations/search?name=supercharger")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    // Update power, then delete the first one.
    let (status, body) = send(
        &mut app,
        request_with_json("PATCH", "/api/v1/stations/1", &json!({"power_kw": 300.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["power_kw"], 300.0);

    let (status, _) = send(&mut app, delete("/api/v1/stations/1")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&mut app, get("/api/v1/stations")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (status, body) = send(&mut app, get("/api/v1/stations/deleted/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["power_kw"], 300.0);
}

#[tokio::test]
async fn station_rejects_out_of_range_values() {
    let mut app = setup_app().await;

    let mut invalid = downtown_station();
    invalid["power_kw"] = json!(-50.0);
    invalid["connector_count"] = json!(0);
    let (status, _) = send(
        &mut app,
        request_with_json("POST", "/api/v1/stations", &invalid),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Auth ───────────────────────────────────────────────────────

#[tokio::test]
async fn register_login_me_round_trip() {
    let mut app = setup_app().await;

    let (status, body) = send(
        &mut app,
        request_with_json("POST", "/api/v1/auth/register", &register_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["email"], "maria@example.com");

    // Duplicate registration (same email or national id) → 400.
    let (status, _) = send(
        &mut app,
        request_with_json("POST", "/api/v1/auth/register", &register_body()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Login with the email as username.
    let (status, body) = send(
        &mut app,
        request_with_json(
            "POST",
            "/api/v1/auth/login",
            &json!({"username": "maria@example.com", "password": "s3cure-password"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().unwrap().to_string();
    assert_eq!(token, "1712345678");

    // Login with the national id works the same.
    let (status, _) = send(
        &mut app,
        request_with_json(
            "POST",
            "/api/v1/auth/login",
            &json!({"username": "1712345678", "password": "s3cure-password"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Wrong password → 401.
    let (status, _) = send(
        &mut app,
        request_with_json(
            "POST",
            "/api/v1/auth/login",
            &json!({"username": "maria@example.com", "password": "wrong"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // The token identifies the account.
    let (status, body) = send(&mut app, get_with_token("/api/v1/auth/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Maria Lopez");

    // No token → 401; bogus token → 401.
    let (status, _) = send(&mut app, get("/api/v1/auth/me")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = send(&mut app, get_with_token("/api/v1/auth/me", "nobody")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn change_password_requires_current_password() {
    let mut app = setup_app().await;

    send(
        &mut app,
        request_with_json("POST", "/api/v1/auth/register", &register_body()),
    )
    .await;
    let token = "1712345678";

    // Wrong current password → 401.
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/change-password")
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(
                &json!({"current_password": "wrong", "new_password": "another-secret"}),
            )
            .unwrap(),
        ))
        .unwrap();
    let (status, _) = send(&mut app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Correct current password → 200, and the new credential works.
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/change-password")
        .header("authorization", format!("Bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(
                &json!({"current_password": "s3cure-password", "new_password": "another-secret"}),
            )
            .unwrap(),
        ))
        .unwrap();
    let (status, _) = send(&mut app, req).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &mut app,
        request_with_json(
            "POST",
            "/api/v1/auth/login",
            &json!({"username": "maria@example.com", "password": "another-secret"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &mut app,
        request_with_json(
            "POST",
            "/api/v1/auth/login",
            &json!({"username": "maria@example.com", "password": "s3cure-password"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ── Statistics ─────────────────────────────────────────────────

#[tokio::test]
async fn stats_reflect_catalog_contents() {
    let mut app = setup_app().await;

    // Empty catalog: zero counts, zero average, no error.
    let (status, body) = send(&mut app, get("/api/v1/stats/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_vehicles"], 0);
    assert_eq!(body["data"]["average_range_km"], 0.0);

    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &tesla_model3())).await;
    let mut leaf = tesla_model3();
    leaf["brand"] = json!("Nissan");
    leaf["model"] = json!("Leaf");
    leaf["range_km"] = json!(270.0);
    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &leaf)).await;
    let mut model_y = tesla_model3();
    model_y["model"] = json!("Model Y");
    model_y["range_km"] = json!(530.0);
    send(&mut app, request_with_json("POST", "/api/v1/vehicles", &model_y)).await;

    send(
        &mut app,
        request_with_json("POST", "/api/v1/charge-profiles", &epa_profile()),
    )
    .await;
    send(
        &mut app,
        request_with_json("POST", "/api/v1/stations", &downtown_station()),
    )
    .await;

    let (status, body) = send(&mut app, get("/api/v1/stats/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_vehicles"], 3);
    assert_eq!(body["data"]["total_charge_profiles"], 1);
    assert_eq!(body["data"]["total_stations"], 1);
    // (500 + 270 + 530) / 3 = 433.33
    assert_eq!(body["data"]["average_range_km"], 433.33);

    let (status, body) = send(&mut app, get("/api/v1/stats/vehicles-by-brand")).await;
    assert_eq!(status, StatusCode::OK);
    let brands = body["data"].as_array().unwrap();
    assert_eq!(brands.len(), 2);
    assert_eq!(brands[0]["brand"], "Nissan");
    assert_eq!(brands[0]["count"], 1);
    assert_eq!(brands[1]["brand"], "Tesla");
    assert_eq!(brands[1]["count"], 2);

    let (status, body) = send(&mut app, get("/api/v1/stats/charge-difficulty")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["difficulty"], "low");
    assert_eq!(body["data"][0]["count"], 1);

    let (status, body) = send(&mut app, get("/api/v1/stats/station-power-by-connector")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["connector_type"], "Tesla");
    assert_eq!(body["data"][0]["average_power_kw"], 250.0);
}

// ── Health ─────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_database_status() {
    let mut app = setup_app().await;

    let (status, body) = send(&mut app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}
