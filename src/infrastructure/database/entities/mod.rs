//! SeaORM entity definitions
//!
//! Each catalog family has an active table and a structurally
//! identical history table written only by the delete operation.

pub mod charge_profile;
pub mod deleted_charge_profile;
pub mod deleted_station;
pub mod deleted_vehicle;
pub mod station;
pub mod user;
pub mod vehicle;
