//! SeaORM implementation of VehicleRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::domain::vehicle::{
    DeletedVehicle, NewVehicle, Vehicle, VehiclePatch, VehicleRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{deleted_vehicle, vehicle};

use super::db_err;

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(v: vehicle::Model) -> Vehicle {
    Vehicle {
        id: v.id,
        brand: v.brand,
        model: v.model,
        year: v.year,
        battery_kwh: v.battery_kwh,
        range_km: v.range_km,
        available: v.available,
        image_url: v.image_url,
        created_at: v.created_at,
        updated_at: v.updated_at,
    }
}

fn history_to_domain(v: deleted_vehicle::Model) -> DeletedVehicle {
    DeletedVehicle {
        id: v.id,
        brand: v.brand,
        model: v.model,
        year: v.year,
        battery_kwh: v.battery_kwh,
        range_km: v.range_km,
        available: v.available,
        image_url: v.image_url,
        created_at: v.created_at,
        deleted_at: v.deleted_at,
    }
}

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Vehicle",
        field: "id",
        value: id.to_string(),
    }
}

// ── SeaOrmVehicleRepository ─────────────────────────────────────

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn list(&self, skip: u64, limit: u64) -> DomainResult<Vec<Vehicle>> {
        let models = vehicle::Entity::find()
            .order_by_asc(vehicle::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Vehicle>> {
        let model = vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn search_by_model(&self, pattern: &str) -> DomainResult<Vec<Vehicle>> {
        // LIKE is case-insensitive for ASCII on the SQLite backend.
        let models = vehicle::Entity::find()
            .filter(vehicle::Column::Model.contains(pattern))
            .order_by_asc(vehicle::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, draft: NewVehicle) -> DomainResult<Vehicle> {
        let existing = vehicle::Entity::find()
            .filter(vehicle::Column::Model.eq(&draft.model))
            .filter(vehicle::Column::Year.eq(draft.year))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Duplicate {
                entity: "Vehicle",
                key: format!("model='{}', year={}", draft.model, draft.year),
            });
        }

        let now = Utc::now();
        let model = vehicle::ActiveModel {
            id: NotSet,
            brand: Set(draft.brand),
            model: Set(draft.model),
            year: Set(draft.year),
            battery_kwh: Set(draft.battery_kwh),
            range_km: Set(draft.range_km),
            available: Set(draft.available),
            image_url: Set(draft.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Vehicle saved: {} {} ({})", result.brand, result.model, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, id: i32, patch: VehiclePatch) -> DomainResult<Vehicle> {
        let model = vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Err(not_found(id));
        };

        // No fields supplied: the stored row stays untouched.
        if patch.is_empty() {
            return Ok(entity_to_domain(model));
        }

        let mut updated = entity_to_domain(model);
        updated.apply_patch(patch);
        updated.updated_at = Utc::now();

        let active = vehicle::ActiveModel {
            id: Set(updated.id),
            brand: Set(updated.brand.clone()),
            model: Set(updated.model.clone()),
            year: Set(updated.year),
            battery_kwh: Set(updated.battery_kwh),
            range_km: Set(updated.range_km),
            available: Set(updated.available),
            image_url: Set(updated.image_url.clone()),
            created_at: Set(updated.created_at),
            updated_at: Set(updated.updated_at),
        };
        active.update(&self.db).await.map_err(db_err)?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> DomainResult<DeletedVehicle> {
        let model = vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Err(not_found(id));
        };

        let deleted_at = Utc::now();
        // History insert and active delete are one unit: if the
        // insert fails, the active row must survive.
        let txn = self.db.begin().await.map_err(db_err)?;
        let history = deleted_vehicle::ActiveModel {
            id: Set(model.id),
            brand: Set(model.brand.clone()),
            model: Set(model.model.clone()),
            year: Set(model.year),
            battery_kwh: Set(model.battery_kwh),
            range_km: Set(model.range_km),
            available: Set(model.available),
            image_url: Set(model.image_url.clone()),
            created_at: Set(model.created_at),
            deleted_at: Set(deleted_at),
        };
        let inserted = history.insert(&txn).await.map_err(db_err)?;
        vehicle::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!("Vehicle {} moved to history", id);
        Ok(history_to_domain(inserted))
    }

    async fn list_deleted(&self, skip: u64, limit: u64) -> DomainResult<Vec<DeletedVehicle>> {
        let models = deleted_vehicle::Entity::find()
            .order_by_asc(deleted_vehicle::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(history_to_domain).collect())
    }

    async fn find_deleted(&self, id: i32) -> DomainResult<Option<DeletedVehicle>> {
        let model = deleted_vehicle::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(history_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        vehicle::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn average_range_km(&self) -> DomainResult<f64> {
        let models = vehicle::Entity::find().all(&self.db).await.map_err(db_err)?;
        if models.is_empty() {
            return Ok(0.0);
        }
        let sum: f64 = models.iter().map(|v| v.range_km).sum();
        let avg = sum / models.len() as f64;
        Ok((avg * 100.0).round() / 100.0)
    }

    async fn count_by_brand(&self) -> DomainResult<Vec<(String, u64)>> {
        let models = vehicle::Entity::find().all(&self.db).await.map_err(db_err)?;
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for v in models {
            *counts.entry(v.brand).or_insert(0) += 1;
        }
        Ok(counts.into_iter().collect())
    }
}
