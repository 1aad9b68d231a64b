//! Statistics DTOs

use serde::Serialize;
use utoipa::ToSchema;

/// Overall catalog summary
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsSummary {
    /// Active vehicles in the catalog
    pub total_vehicles: u64,
    /// Active charge profiles
    pub total_charge_profiles: u64,
    /// Active stations
    pub total_stations: u64,
    /// Average rated range across active vehicles, km (0 when the
    /// catalog is empty)
    pub average_range_km: f64,
}

/// Vehicles per brand
#[derive(Debug, Serialize, ToSchema)]
pub struct BrandCount {
    pub brand: String,
    pub count: u64,
}

/// Average station power per connector type
#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectorPower {
    pub connector_type: String,
    pub average_power_kw: f64,
}

/// Charge profiles per difficulty level
#[derive(Debug, Serialize, ToSchema)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: u64,
}
