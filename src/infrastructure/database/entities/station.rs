//! Station entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Connector standard
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum ConnectorType {
    #[sea_orm(string_value = "CCS")]
    Ccs,
    #[sea_orm(string_value = "CHAdeMO")]
    Chademo,
    #[sea_orm(string_value = "Type2")]
    Type2,
    #[sea_orm(string_value = "Schuko")]
    Schuko,
    #[sea_orm(string_value = "Tesla")]
    Tesla,
    #[sea_orm(string_value = "Other")]
    Other,
}

/// Active station row
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub connector_type: ConnectorType,
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
