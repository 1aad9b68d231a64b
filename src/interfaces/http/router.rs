//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, ListParams};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    auth, charge_profiles, health, stats, stations, vehicles, ApiState,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Bearer pseudo-token: the account's national id issued at login",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::get_current_user,
        auth::change_password,
        // Vehicles
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::search_vehicles,
        vehicles::create_vehicle,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        vehicles::list_deleted_vehicles,
        vehicles::get_deleted_vehicle,
        // Charge profiles
        charge_profiles::list_charge_profiles,
        charge_profiles::get_charge_profile,
        charge_profiles::search_charge_profiles,
        charge_profiles::create_charge_profile,
        charge_profiles::update_charge_profile,
        charge_profiles::delete_charge_profile,
        charge_profiles::list_deleted_charge_profiles,
        charge_profiles::get_deleted_charge_profile,
        // Stations
        stations::list_stations,
        stations::get_station,
        stations::search_stations,
        stations::create_station,
        stations::update_station,
        stations::delete_station,
        stations::list_deleted_stations,
        stations::get_deleted_station,
        // Statistics
        stats::stats_summary,
        stats::vehicles_by_brand,
        stats::station_power_by_connector,
        stats::charge_difficulty_distribution,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            ListParams,
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            auth::ChangePasswordRequest,
            // Vehicles
            vehicles::VehicleResponse,
            vehicles::DeletedVehicleResponse,
            vehicles::CreateVehicleRequest,
            vehicles::UpdateVehicleRequest,
            // Charge profiles
            charge_profiles::ChargeProfileResponse,
            charge_profiles::DeletedChargeProfileResponse,
            charge_profiles::CreateChargeProfileRequest,
            charge_profiles::UpdateChargeProfileRequest,
            // Stations
            stations::StationResponse,
            stations::DeletedStationResponse,
            stations::CreateStationRequest,
            stations::UpdateStationRequest,
            // Statistics
            stats::StatsSummary,
            stats::BrandCount,
            stats::ConnectorPower,
            stats::DifficultyCount,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "User registration, login and password management"),
        (name = "Vehicles", description = "Electric vehicle CRUD with delete-to-history"),
        (name = "Charge Profiles", description = "Charging-difficulty profile CRUD with delete-to-history"),
        (name = "Stations", description = "Charging station CRUD with delete-to-history"),
        (name = "Statistics", description = "Catalog counts and aggregates"),
    ),
    info(
        title = "EV Catalog API",
        version = "1.0.0",
        description = "REST API for electric vehicles, charging profiles and charging stations",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(repos: Arc<dyn RepositoryProvider>, db: DatabaseConnection) -> Router {
    let api_state = ApiState {
        repos: repos.clone(),
    };
    let middleware_state = AuthState { repos };
    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Vehicle routes
    let vehicle_routes = Router::new()
        .route(
            "/",
            get(vehicles::list_vehicles).post(vehicles::create_vehicle),
        )
        .route("/search", get(vehicles::search_vehicles))
        .route("/deleted", get(vehicles::list_deleted_vehicles))
        .route("/deleted/{id}", get(vehicles::get_deleted_vehicle))
        .route(
            "/{id}",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .patch(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
        .with_state(api_state.clone());

    // Charge profile routes
    let charge_profile_routes = Router::new()
        .route(
            "/",
            get(charge_profiles::list_charge_profiles).post(charge_profiles::create_charge_profile),
        )
        .route("/search", get(charge_profiles::search_charge_profiles))
        .route(
            "/deleted",
            get(charge_profiles::list_deleted_charge_profiles),
        )
        .route(
            "/deleted/{id}",
            get(charge_profiles::get_deleted_charge_profile),
        )
        .route(
            "/{id}",
            get(charge_profiles::get_charge_profile)
                .put(charge_profiles::update_charge_profile)
                .patch(charge_profiles::update_charge_profile)
                .delete(charge_profiles::delete_charge_profile),
        )
        .with_state(api_state.clone());

    // Station routes
    let station_routes = Router::new()
        .route(
            "/",
            get(stations::list_stations).post(stations::create_station),
        )
        .route("/search", get(stations::search_stations))
        .route("/deleted", get(stations::list_deleted_stations))
        .route("/deleted/{id}", get(stations::get_deleted_station))
        .route(
            "/{id}",
            get(stations::get_station)
                .put(stations::update_station)
                .patch(stations::update_station)
                .delete(stations::delete_station),
        )
        .with_state(api_state.clone());

    // Statistics routes
    let stats_routes = Router::new()
        .route("/summary", get(stats::stats_summary))
        .route("/vehicles-by-brand", get(stats::vehicles_by_brand))
        .route(
            "/station-power-by-connector",
            get(stats::station_power_by_connector),
        )
        .route(
            "/charge-difficulty",
            get(stats::charge_difficulty_distribution),
        )
        .with_state(api_state.clone());

    // Auth routes (public)
    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .with_state(api_state.clone());

    // Auth routes (protected by the bearer pseudo-token)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .route("/change-password", post(auth::change_password))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(api_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Catalog
        .nest("/api/v1/vehicles", vehicle_routes)
        .nest("/api/v1/charge-profiles", charge_profile_routes)
        .nest("/api/v1/stations", station_routes)
        // Statistics
        .nest("/api/v1/stats", stats_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
