//! Repository provider interface

use crate::domain::charge_profile::ChargeProfileRepository;
use crate::domain::station::StationRepository;
use crate::domain::user::UserRepository;
use crate::domain::vehicle::VehicleRepository;

/// Per-aggregate repository accessors behind one provider.
///
/// Constructed once at process start from the database configuration
/// and passed into the HTTP layer; never reached through ambient
/// global state.
pub trait RepositoryProvider: Send + Sync {
    fn vehicles(&self) -> &dyn VehicleRepository;
    fn charge_profiles(&self) -> &dyn ChargeProfileRepository;
    fn stations(&self) -> &dyn StationRepository;
    fn users(&self) -> &dyn UserRepository;
}
