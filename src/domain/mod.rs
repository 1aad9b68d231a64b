//! Core business entities, repository interfaces and errors

pub mod charge_profile;
pub mod error;
pub mod repositories;
pub mod station;
pub mod user;
pub mod vehicle;

pub use charge_profile::{
    ChargeDifficulty, ChargeProfile, ChargeProfilePatch, DeletedChargeProfile, NewChargeProfile,
    RangeStandard,
};
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
pub use station::{ConnectorType, DeletedStation, NewStation, Station, StationPatch};
pub use user::{NewUser, User};
pub use vehicle::{DeletedVehicle, NewVehicle, Vehicle, VehiclePatch};
