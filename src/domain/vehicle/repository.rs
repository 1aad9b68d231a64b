//! Vehicle repository interface

use async_trait::async_trait;

use super::model::{DeletedVehicle, NewVehicle, Vehicle, VehiclePatch};
use crate::domain::DomainResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Insertion-ordered page of active vehicles.
    async fn list(&self, skip: u64, limit: u64) -> DomainResult<Vec<Vehicle>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vehicle>>;

    /// Case-insensitive substring match on the model field.
    async fn search_by_model(&self, pattern: &str) -> DomainResult<Vec<Vehicle>>;

    /// Fails with `Duplicate` when a vehicle with the same
    /// (model, year) already exists.
    async fn create(&self, draft: NewVehicle) -> DomainResult<Vehicle>;

    /// Fails with `NotFound` when the id is absent; an empty patch
    /// returns the record unchanged.
    async fn update(&self, id: i32, patch: VehiclePatch) -> DomainResult<Vehicle>;

    /// Moves the row into the history table and removes it from the
    /// active table as one unit.
    async fn delete(&self, id: i32) -> DomainResult<DeletedVehicle>;

    async fn list_deleted(&self, skip: u64, limit: u64) -> DomainResult<Vec<DeletedVehicle>>;

    async fn find_deleted(&self, id: i32) -> DomainResult<Option<DeletedVehicle>>;

    async fn count(&self) -> DomainResult<u64>;

    /// Average rated range across active vehicles; 0.0 when the table
    /// is empty.
    async fn average_range_km(&self) -> DomainResult<f64>;

    /// Number of active vehicles per brand.
    async fn count_by_brand(&self) -> DomainResult<Vec<(String, u64)>>;
}
