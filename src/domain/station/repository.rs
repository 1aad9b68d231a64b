//! Station repository interface

use async_trait::async_trait;

use super::model::{ConnectorType, DeletedStation, NewStation, Station, StationPatch};
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn list(&self, skip: u64, limit: u64) -> DomainResult<Vec<Station>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Station>>;

    /// Case-insensitive substring match on the station name.
    async fn search_by_name(&self, pattern: &str) -> DomainResult<Vec<Station>>;

    /// Fails with `Duplicate` when a station with the same
    /// (name, location) already exists.
    async fn create(&self, draft: NewStation) -> DomainResult<Station>;

    async fn update(&self, id: i32, patch: StationPatch) -> DomainResult<Station>;

    async fn delete(&self, id: i32) -> DomainResult<DeletedStation>;

    async fn list_deleted(&self, skip: u64, limit: u64) -> DomainResult<Vec<DeletedStation>>;

    async fn find_deleted(&self, id: i32) -> DomainResult<Option<DeletedStation>>;

    async fn count(&self) -> DomainResult<u64>;

    /// Average delivered power per connector type across active
    /// stations.
    async fn average_power_by_connector(&self) -> DomainResult<Vec<(ConnectorType, f64)>>;
}
