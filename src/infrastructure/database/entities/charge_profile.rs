//! Charge profile entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Range measurement standard
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum RangeStandard {
    #[sea_orm(string_value = "WLTP")]
    Wltp,
    #[sea_orm(string_value = "EPA")]
    Epa,
    #[sea_orm(string_value = "NEDC")]
    Nedc,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// Charging difficulty level
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ChargeDifficulty {
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "high")]
    High,
}

/// Active charge profile row
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "charge_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub vehicle_model: String,
    pub range_standard: RangeStandard,
    pub consumption_kwh_100km: f64,
    pub charge_time_hours: f64,
    pub charge_difficulty: ChargeDifficulty,
    pub home_install_required: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
