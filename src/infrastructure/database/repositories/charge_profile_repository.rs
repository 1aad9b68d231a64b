//! SeaORM implementation of ChargeProfileRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::domain::charge_profile::{
    ChargeDifficulty, ChargeProfile, ChargeProfilePatch, ChargeProfileRepository,
    DeletedChargeProfile, NewChargeProfile, RangeStandard,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{charge_profile, deleted_charge_profile};

use super::db_err;

// ── Conversion helpers ──────────────────────────────────────────

fn standard_to_domain(s: charge_profile::RangeStandard) -> RangeStandard {
    match s {
        charge_profile::RangeStandard::Wltp => RangeStandard::Wltp,
        charge_profile::RangeStandard::Epa => RangeStandard::Epa,
        charge_profile::RangeStandard::Nedc => RangeStandard::Nedc,
        charge_profile::RangeStandard::Other => RangeStandard::Other,
    }
}

fn standard_to_entity(s: RangeStandard) -> charge_profile::RangeStandard {
    match s {
        RangeStandard::Wltp => charge_profile::RangeStandard::Wltp,
        RangeStandard::Epa => charge_profile::RangeStandard::Epa,
        RangeStandard::Nedc => charge_profile::RangeStandard::Nedc,
        RangeStandard::Other => charge_profile::RangeStandard::Other,
    }
}

fn difficulty_to_domain(d: charge_profile::ChargeDifficulty) -> ChargeDifficulty {
    match d {
        charge_profile::ChargeDifficulty::Low => ChargeDifficulty::Low,
        charge_profile::ChargeDifficulty::Medium => ChargeDifficulty::Medium,
        charge_profile::ChargeDifficulty::High => ChargeDifficulty::High,
    }
}

fn difficulty_to_entity(d: ChargeDifficulty) -> charge_profile::ChargeDifficulty {
    match d {
        ChargeDifficulty::Low => charge_profile::ChargeDifficulty::Low,
        ChargeDifficulty::Medium => charge_profile::ChargeDifficulty::Medium,
        ChargeDifficulty::High => charge_profile::ChargeDifficulty::High,
    }
}

fn entity_to_domain(p: charge_profile::Model) -> ChargeProfile {
    ChargeProfile {
        id: p.id,
        vehicle_model: p.vehicle_model,
        range_standard: standard_to_domain(p.range_standard),
        consumption_kwh_100km: p.consumption_kwh_100km,
        charge_time_hours: p.charge_time_hours,
        charge_difficulty: difficulty_to_domain(p.charge_difficulty),
        home_install_required: p.home_install_required,
        image_url: p.image_url,
        created_at: p.created_at,
        updated_at: p.updated_at,
    }
}

fn history_to_domain(p: deleted_charge_profile::Model) -> DeletedChargeProfile {
    DeletedChargeProfile {
        id: p.id,
        vehicle_model: p.vehicle_model,
        range_standard: standard_to_domain(p.range_standard),
        consumption_kwh_100km: p.consumption_kwh_100km,
        charge_time_hours: p.charge_time_hours,
        charge_difficulty: difficulty_to_domain(p.charge_difficulty),
        home_install_required: p.home_install_required,
        image_url: p.image_url,
        created_at: p.created_at,
        deleted_at: p.deleted_at,
    }
}

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "ChargeProfile",
        field: "id",
        value: id.to_string(),
    }
}

// ── SeaOrmChargeProfileRepository ───────────────────────────────

pub struct SeaOrmChargeProfileRepository {
    db: DatabaseConnection,
}

impl SeaOrmChargeProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChargeProfileRepository for SeaOrmChargeProfileRepository {
    async fn list(&self, skip: u64, limit: u64) -> DomainResult<Vec<ChargeProfile>> {
        let models = charge_profile::Entity::find()
            .order_by_asc(charge_profile::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<ChargeProfile>> {
        let model = charge_profile::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn search_by_vehicle_model(&self, pattern: &str) -> DomainResult<Vec<ChargeProfile>> {
        // LIKE is case-insensitive for ASCII on the SQLite backend.
        let models = charge_profile::Entity::find()
            .filter(charge_profile::Column::VehicleModel.contains(pattern))
            .order_by_asc(charge_profile::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, draft: NewChargeProfile) -> DomainResult<ChargeProfile> {
        let existing = charge_profile::Entity::find()
            .filter(charge_profile::Column::VehicleModel.eq(&draft.vehicle_model))
            .filter(
                charge_profile::Column::RangeStandard
                    .eq(standard_to_entity(draft.range_standard)),
            )
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Duplicate {
                entity: "ChargeProfile",
                key: format!(
                    "vehicle_model='{}', range_standard={}",
                    draft.vehicle_model, draft.range_standard
                ),
            });
        }

        let now = Utc::now();
        let model = charge_profile::ActiveModel {
            id: NotSet,
            vehicle_model: Set(draft.vehicle_model),
            range_standard: Set(standard_to_entity(draft.range_standard)),
            consumption_kwh_100km: Set(draft.consumption_kwh_100km),
            charge_time_hours: Set(draft.charge_time_hours),
            charge_difficulty: Set(difficulty_to_entity(draft.charge_difficulty)),
            home_install_required: Set(draft.home_install_required),
            image_url: Set(draft.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Charge profile saved: {} ({})",
            result.vehicle_model, result.id
        );
        Ok(entity_to_domain(result))
    }

    async fn update(&self, id: i32, patch: ChargeProfilePatch) -> DomainResult<ChargeProfile> {
        let model = charge_profile::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Err(not_found(id));
        };

        if patch.is_empty() {
            return Ok(entity_to_domain(model));
        }

        let mut updated = entity_to_domain(model);
        updated.apply_patch(patch);
        updated.updated_at = Utc::now();

        let active = charge_profile::ActiveModel {
            id: Set(updated.id),
            vehicle_model: Set(updated.vehicle_model.clone()),
            range_standard: Set(standard_to_entity(updated.range_standard)),
            consumption_kwh_100km: Set(updated.consumption_kwh_100km),
            charge_time_hours: Set(updated.charge_time_hours),
            charge_difficulty: Set(difficulty_to_entity(updated.charge_difficulty)),
            home_install_required: Set(updated.home_install_required),
            image_url: Set(updated.image_url.clone()),
            created_at: Set(updated.created_at),
            updated_at: Set(updated.updated_at),
        };
        active.update(&self.db).await.map_err(db_err)?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> DomainResult<DeletedChargeProfile> {
        let model = charge_profile::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Err(not_found(id));
        };

        let deleted_at = Utc::now();
        let txn = self.db.begin().await.map_err(db_err)?;
        let history = deleted_charge_profile::ActiveModel {
            id: Set(model.id),
            vehicle_model: Set(model.vehicle_model.clone()),
            range_standard: Set(model.range_standard.clone()),
            consumption_kwh_100km: Set(model.consumption_kwh_100km),
            charge_time_hours: Set(model.charge_time_hours),
            charge_difficulty: Set(model.charge_difficulty.clone()),
            home_install_required: Set(model.home_install_required),
            image_url: Set(model.image_url.clone()),
            created_at: Set(model.created_at),
            deleted_at: Set(deleted_at),
        };
        let inserted = history.insert(&txn).await.map_err(db_err)?;
        charge_profile::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!("Charge profile {} moved to history", id);
        Ok(history_to_domain(inserted))
    }

    async fn list_deleted(
        &self,
        skip: u64,
        limit: u64,
    ) -> DomainResult<Vec<DeletedChargeProfile>> {
        let models = deleted_charge_profile::Entity::find()
            .order_by_asc(deleted_charge_profile::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(history_to_domain).collect())
    }

    async fn find_deleted(&self, id: i32) -> DomainResult<Option<DeletedChargeProfile>> {
        let model = deleted_charge_profile::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(history_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        charge_profile::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn count_by_difficulty(&self) -> DomainResult<Vec<(ChargeDifficulty, u64)>> {
        let models = charge_profile::Entity::find()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let mut counts: BTreeMap<String, (ChargeDifficulty, u64)> = BTreeMap::new();
        for p in models {
            let difficulty = difficulty_to_domain(p.charge_difficulty);
            let entry = counts
                .entry(difficulty.to_string())
                .or_insert((difficulty, 0));
            entry.1 += 1;
        }
        Ok(counts.into_values().collect())
    }
}
