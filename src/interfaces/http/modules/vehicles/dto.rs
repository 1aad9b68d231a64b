//! Vehicle DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::vehicle::{DeletedVehicle, NewVehicle, Vehicle, VehiclePatch};
use crate::interfaces::http::common::double_option;

#[derive(Debug, Serialize, ToSchema)]
pub struct VehicleResponse {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub battery_kwh: f64,
    pub range_km: f64,
    pub available: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(v: Vehicle) -> Self {
        Self {
            id: v.id,
            brand: v.brand,
            model: v.model,
            year: v.year,
            battery_kwh: v.battery_kwh,
            range_km: v.range_km,
            available: v.available,
            image_url: v.image_url,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedVehicleResponse {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub battery_kwh: f64,
    pub range_km: f64,
    pub available: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl From<DeletedVehicle> for DeletedVehicleResponse {
    fn from(v: DeletedVehicle) -> Self {
        Self {
            id: v.id,
            brand: v.brand,
            model: v.model,
            year: v.year,
            battery_kwh: v.battery_kwh,
            range_km: v.range_km,
            available: v.available,
            image_url: v.image_url,
            created_at: v.created_at,
            deleted_at: v.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 30, message = "brand must be 2-30 characters"))]
    pub brand: String,
    #[validate(length(min = 1, max = 30, message = "model must be 1-30 characters"))]
    pub model: String,
    #[validate(range(min = 2011, max = 2025, message = "year must be between 2011 and 2025"))]
    pub year: i32,
    #[validate(range(
        exclusive_min = 0.0,
        max = 200.0,
        message = "battery_kwh must be greater than 0, up to 200"
    ))]
    pub battery_kwh: f64,
    #[validate(range(
        exclusive_min = 0.0,
        max = 1000.0,
        message = "range_km must be greater than 0, up to 1000"
    ))]
    pub range_km: f64,
    pub available: bool,
    #[validate(length(max = 255, message = "image_url must be at most 255 characters"))]
    pub image_url: Option<String>,
}

impl From<CreateVehicleRequest> for NewVehicle {
    fn from(req: CreateVehicleRequest) -> Self {
        Self {
            brand: req.brand,
            model: req.model,
            year: req.year,
            battery_kwh: req.battery_kwh,
            range_km: req.range_km,
            available: req.available,
            image_url: req.image_url,
        }
    }
}

/// Partial update: omitted fields keep their stored value; an
/// explicit `"image_url": null` clears the image.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 30, message = "brand must be 2-30 characters"))]
    pub brand: Option<String>,
    #[validate(length(min = 1, max = 30, message = "model must be 1-30 characters"))]
    pub model: Option<String>,
    #[validate(range(min = 2011, max = 2025, message = "year must be between 2011 and 2025"))]
    pub year: Option<i32>,
    #[validate(range(
        exclusive_min = 0.0,
        max = 200.0,
        message = "battery_kwh must be greater than 0, up to 200"
    ))]
    pub battery_kwh: Option<f64>,
    #[validate(range(
        exclusive_min = 0.0,
        max = 1000.0,
        message = "range_km must be greater than 0, up to 1000"
    ))]
    pub range_km: Option<f64>,
    pub available: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}

impl From<UpdateVehicleRequest> for VehiclePatch {
    fn from(req: UpdateVehicleRequest) -> Self {
        Self {
            brand: req.brand,
            model: req.model,
            year: req.year,
            battery_kwh: req.battery_kwh,
            range_km: req.range_km,
            available: req.available,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct VehicleSearchParams {
    /// Substring to match against the model, case-insensitive
    pub model: String,
}
