//! Charge profile history entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::charge_profile::{ChargeDifficulty, RangeStandard};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "charge_profiles_deleted")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub vehicle_model: String,
    pub range_standard: RangeStandard,
    pub consumption_kwh_100km: f64,
    pub charge_time_hours: f64,
    pub charge_difficulty: ChargeDifficulty,
    pub home_install_required: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
