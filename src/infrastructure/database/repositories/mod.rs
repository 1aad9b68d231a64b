//! SeaORM repository implementations

mod charge_profile_repository;
mod repository_provider;
mod station_repository;
mod user_repository;
mod vehicle_repository;

pub use charge_profile_repository::SeaOrmChargeProfileRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use station_repository::SeaOrmStationRepository;
pub use user_repository::SeaOrmUserRepository;
pub use vehicle_repository::SeaOrmVehicleRepository;

use crate::domain::DomainError;

pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}
