//! Charge profile repository interface

use async_trait::async_trait;

use super::model::{
    ChargeDifficulty, ChargeProfilePatch, ChargeProfile, DeletedChargeProfile, NewChargeProfile,
};
use crate::domain::DomainResult;

#[async_trait]
pub trait ChargeProfileRepository: Send + Sync {
    async fn list(&self, skip: u64, limit: u64) -> DomainResult<Vec<ChargeProfile>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ChargeProfile>>;

    /// Case-insensitive substring match on the vehicle model field.
    async fn search_by_vehicle_model(&self, pattern: &str) -> DomainResult<Vec<ChargeProfile>>;

    /// Fails with `Duplicate` when a profile with the same
    /// (vehicle_model, range_standard) already exists.
    async fn create(&self, draft: NewChargeProfile) -> DomainResult<ChargeProfile>;

    async fn update(&self, id: i32, patch: ChargeProfilePatch) -> DomainResult<ChargeProfile>;

    async fn delete(&self, id: i32) -> DomainResult<DeletedChargeProfile>;

    async fn list_deleted(&self, skip: u64, limit: u64) -> DomainResult<Vec<DeletedChargeProfile>>;

    async fn find_deleted(&self, id: i32) -> DomainResult<Option<DeletedChargeProfile>>;

    async fn count(&self) -> DomainResult<u64>;

    /// Number of active profiles per difficulty level.
    async fn count_by_difficulty(&self) -> DomainResult<Vec<(ChargeDifficulty, u64)>>;
}
