//! Station DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::station::{DeletedStation, Station};
use crate::interfaces::http::common::double_option;

#[derive(Debug, Serialize, ToSchema)]
pub struct StationResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    /// One of CCS, CHAdeMO, Type2, Schuko, Tesla, Other
    pub connector_type: String,
    pub power_kw: f64,
    pub connector_count: i32,
    pub public_access: bool,
    pub opening_hours: String,
    pub cost_per_kwh: f64,
    pub operator: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Station> for StationResponse {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            name: s.name,
            location: s.location,
            connector_type: s.connector_type.to_string(),
            power_kw: s.power_kw,
            connector_count: s.connector_count,
            public_access: s.public_access,
            opening_hours: s.opening_hours,
            cost_per_kwh: s.cost_per_kwh,
            operator: s.operator,
            image_url: s.image_url,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedStationResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub connector_type: String,
    pub power_kw: f64,
    pub connector_count: i32,
    pub public_access: bool,
    pub opening_hours: String,
    pub cost_per_kwh: f64,
    pub operator: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl From<DeletedStation> for DeletedStationResponse {
    fn from(s: DeletedStation) -> Self {
        Self {
            id: s.id,
            name: s.name,
            location: s.location,
            connector_type: s.connector_type.to_string(),
            power_kw: s.power_kw,
            connector_count: s.connector_count,
            public_access: s.public_access,
            opening_hours: s.opening_hours,
            cost_per_kwh: s.cost_per_kwh,
            operator: s.operator,
            image_url: s.image_url,
            created_at: s.created_at,
            deleted_at: s.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStationRequest {
    #[validate(length(min = 2, max = 50, message = "name must be 2-50 characters"))]
    pub name: String,
    #[validate(length(min = 5, max = 100, message = "location must be 5-100 characters"))]
    pub location: String,
    /// One of CCS, CHAdeMO, Type2, Schuko, Tesla, Other
    pub connector_type: String,
    #[validate(range(min = 1.0, max = 500.0, message = "power_kw must be between 1 and 500"))]
    pub power_kw: f64,
    #[validate(range(min = 1, max = 50, message = "connector_count must be between 1 and 50"))]
    pub connector_count: i32,
    pub public_access: bool,
    #[validate(length(min = 3, max = 50, message = "opening_hours must be 3-50 characters"))]
    pub opening_hours: String,
    #[validate(range(min = 0.0, max = 2.0, message = "cost_per_kwh must be between 0 and 2"))]
    pub cost_per_kwh: f64,
    #[validate(length(min = 2, max = 50, message = "operator must be 2-50 characters"))]
    pub operator: String,
    #[validate(length(max = 255, message = "image_url must be at most 255 characters"))]
    pub image_url: Option<String>,
}

/// Partial update: omitted fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStationRequest {
    #[validate(length(min = 2, max = 50, message = "name must be 2-50 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 5, max = 100, message = "location must be 5-100 characters"))]
    pub location: Option<String>,
    pub connector_type: Option<String>,
    #[validate(range(min = 1.0, max = 500.0, message = "power_kw must be between 1 and 500"))]
    pub power_kw: Option<f64>,
    #[validate(range(min = 1, max = 50, message = "connector_count must be between 1 and 50"))]
    pub connector_count: Option<i32>,
    pub public_access: Option<bool>,
    #[validate(length(min = 3, max = 50, message = "opening_hours must be 3-50 characters"))]
    pub opening_hours: Option<String>,
    #[validate(range(min = 0.0, max = 2.0, message = "cost_per_kwh must be between 0 and 2"))]
    pub cost_per_kwh: Option<f64>,
    #[validate(length(min = 2, max = 50, message = "operator must be 2-50 characters"))]
    pub operator: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct StationSearchParams {
    /// Substring to match against the station name, case-insensitive
    pub name: String,
}
