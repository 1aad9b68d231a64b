//! Charge profile DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::charge_profile::{ChargeProfile, DeletedChargeProfile};
use crate::interfaces::http::common::double_option;

#[derive(Debug, Serialize, ToSchema)]
pub struct ChargeProfileResponse {
    pub id: i32,
    pub vehicle_model: String,
    /// One of WLTP, EPA, NEDC, Other
    pub range_standard: String,
    pub consumption_kwh_100km: f64,
    pub charge_time_hours: f64,
    /// One of low, medium, high
    pub charge_difficulty: String,
    pub home_install_required: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ChargeProfile> for ChargeProfileResponse {
    fn from(p: ChargeProfile) -> Self {
        Self {
            id: p.id,
            vehicle_model: p.vehicle_model,
            range_standard: p.range_standard.to_string(),
            consumption_kwh_100km: p.consumption_kwh_100km,
            charge_time_hours: p.charge_time_hours,
            charge_difficulty: p.charge_difficulty.to_string(),
            home_install_required: p.home_install_required,
            image_url: p.image_url,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedChargeProfileResponse {
    pub id: i32,
    pub vehicle_model: String,
    pub range_standard: String,
    pub consumption_kwh_100km: f64,
    pub charge_time_hours: f64,
    pub charge_difficulty: String,
    pub home_install_required: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

impl From<DeletedChargeProfile> for DeletedChargeProfileResponse {
    fn from(p: DeletedChargeProfile) -> Self {
        Self {
            id: p.id,
            vehicle_model: p.vehicle_model,
            range_standard: p.range_standard.to_string(),
            consumption_kwh_100km: p.consumption_kwh_100km,
            charge_time_hours: p.charge_time_hours,
            charge_difficulty: p.charge_difficulty.to_string(),
            home_install_required: p.home_install_required,
            image_url: p.image_url,
            created_at: p.created_at,
            deleted_at: p.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChargeProfileRequest {
    #[validate(length(min = 1, max = 50, message = "vehicle_model must be 1-50 characters"))]
    pub vehicle_model: String,
    /// One of WLTP, EPA, NEDC, Other
    pub range_standard: String,
    #[validate(range(
        exclusive_min = 0.0,
        max = 50.0,
        message = "consumption_kwh_100km must be greater than 0, up to 50"
    ))]
    pub consumption_kwh_100km: f64,
    #[validate(range(
        exclusive_min = 0.0,
        max = 48.0,
        message = "charge_time_hours must be greater than 0, up to 48"
    ))]
    pub charge_time_hours: f64,
    /// One of low, medium, high
    pub charge_difficulty: String,
    pub home_install_required: bool,
    #[validate(length(max = 255, message = "image_url must be at most 255 characters"))]
    pub image_url: Option<String>,
}

/// Partial update: omitted fields keep their stored value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateChargeProfileRequest {
    #[validate(length(min = 1, max = 50, message = "vehicle_model must be 1-50 characters"))]
    pub vehicle_model: Option<String>,
    pub range_standard: Option<String>,
    #[validate(range(
        exclusive_min = 0.0,
        max = 50.0,
        message = "consumption_kwh_100km must be greater than 0, up to 50"
    ))]
    pub consumption_kwh_100km: Option<f64>,
    #[validate(range(
        exclusive_min = 0.0,
        max = 48.0,
        message = "charge_time_hours must be greater than 0, up to 48"
    ))]
    pub charge_time_hours: Option<f64>,
    pub charge_difficulty: Option<String>,
    pub home_install_required: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ChargeProfileSearchParams {
    /// Substring to match against the vehicle model, case-insensitive
    pub vehicle_model: String,
}
