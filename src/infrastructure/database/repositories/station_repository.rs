//! SeaORM implementation of StationRepository

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::domain::station::{
    ConnectorType, DeletedStation, NewStation, Station, StationPatch, StationRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{deleted_station, station};

use super::db_err;

// ── Conversion helpers ──────────────────────────────────────────

fn connector_to_domain(c: station::ConnectorType) -> ConnectorType {
    match c {
        station::ConnectorType::Ccs => ConnectorType::Ccs,
        station::ConnectorType::Chademo => ConnectorType::Chademo,
        station::ConnectorType::Type2 => ConnectorType::Type2,
        station::ConnectorType::Schuko => ConnectorType::Schuko,
        station::ConnectorType::Tesla => ConnectorType::Tesla,
        station::ConnectorType::Other => ConnectorType::Other,
    }
}

fn connector_to_entity(c: ConnectorType) -> station::ConnectorType {
    match c {
        ConnectorType::Ccs => station::ConnectorType::Ccs,
        ConnectorType::Chademo => station::ConnectorType::Chademo,
        ConnectorType::Type2 => station::ConnectorType::Type2,
        ConnectorType::Schuko => station::ConnectorType::Schuko,
        ConnectorType::Tesla => station::ConnectorType::Tesla,
        ConnectorType::Other => station::ConnectorType::Other,
    }
}

fn entity_to_domain(s: station::Model) -> Station {
    Station {
        id: s.id,
        name: s.name,
        location: s.location,
        connector_type: connector_to_domain(s.connector_type),
        power_kw: s.power_kw,
        connector_count: s.connector_count,
        public_access: s.public_access,
        opening_hours: s.opening_hours,
        cost_per_kwh: s.cost_per_kwh,
        operator: s.operator,
        image_url: s.image_url,
        created_at: s.created_at,
        updated_at: s.updated_at,
    }
}

fn history_to_domain(s: deleted_station::Model) -> DeletedStation {
    DeletedStation {
        id: s.id,
        name: s.name,
        location: s.location,
        connector_type: connector_to_domain(s.connector_type),
        power_kw: s.power_kw,
        connector_count: s.connector_count,
        public_access: s.public_access,
        opening_hours: s.opening_hours,
        cost_per_kwh: s.cost_per_kwh,
        operator: s.operator,
        image_url: s.image_url,
        created_at: s.created_at,
        deleted_at: s.deleted_at,
    }
}

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Station",
        field: "id",
        value: id.to_string(),
    }
}

// ── SeaOrmStationRepository ─────────────────────────────────────

pub struct SeaOrmStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StationRepository for SeaOrmStationRepository {
    async fn list(&self, skip: u64, limit: u64) -> DomainResult<Vec<Station>> {
        let models = station::Entity::find()
            .order_by_asc(station::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Station>> {
        let model = station::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn search_by_name(&self, pattern: &str) -> DomainResult<Vec<Station>> {
        // LIKE is case-insensitive for ASCII on the SQLite backend.
        let models = station::Entity::find()
            .filter(station::Column::Name.contains(pattern))
            .order_by_asc(station::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn create(&self, draft: NewStation) -> DomainResult<Station> {
        let existing = station::Entity::find()
            .filter(station::Column::Name.eq(&draft.name))
            .filter(station::Column::Location.eq(&draft.location))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Duplicate {
                entity: "Station",
                key: format!("name='{}', location='{}'", draft.name, draft.location),
            });
        }

        let now = Utc::now();
        let model = station::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            location: Set(draft.location),
            connector_type: Set(connector_to_entity(draft.connector_type)),
            power_kw: Set(draft.power_kw),
            connector_count: Set(draft.connector_count),
            public_access: Set(draft.public_access),
            opening_hours: Set(draft.opening_hours),
            cost_per_kwh: Set(draft.cost_per_kwh),
            operator: Set(draft.operator),
            image_url: Set(draft.image_url),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Station saved: {} ({})", result.name, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, id: i32, patch: StationPatch) -> DomainResult<Station> {
        let model = station::Entity::find_by_id(id)
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

        let active = station::ActiveModel {
            id: Set(updated.id),
            name: Set(updated.name.clone()),
            location: Set(updated.location.clone()),
            connector_type: Set(connector_to_entity(updated.connector_type)),
            power_kw: Set(updated.power_kw),
            connector_count: Set(updated.connector_count),
            public_access: Set(updated.public_access),
            opening_hours: Set(updated.opening_hours.clone()),
            cost_per_kwh: Set(updated.cost_per_kwh),
            operator: Set(updated.operator.clone()),
            image_url: Set(updated.image_url.clone()),
            created_at: Set(updated.created_at),
            updated_at: Set(updated.updated_at),
        };
        active.update(&self.db).await.map_err(db_err)?;
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> DomainResult<DeletedStation> {
        let model = station::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Err(not_found(id));
        };

        let deleted_at = Utc::now();
        let txn = self.db.begin().await.map_err(db_err)?;
        let history = deleted_station::ActiveModel {
            id: Set(model.id),
            name: Set(model.name.clone()),
            location: Set(model.location.clone()),
            connector_type: Set(model.connector_type.clone()),
            power_kw: Set(model.power_kw),
            connector_count: Set(model.connector_count),
            public_access: Set(model.public_access),
            opening_hours: Set(model.opening_hours.clone()),
            cost_per_kwh: Set(model.cost_per_kwh),
            operator: Set(model.operator.clone()),
            image_url: Set(model.image_url.clone()),
            created_at: Set(model.created_at),
            deleted_at: Set(deleted_at),
        };
        let inserted = history.insert(&txn).await.map_err(db_err)?;
        station::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;

        info!("Station {} moved to history", id);
        Ok(history_to_domain(inserted))
    }

    async fn list_deleted(&self, skip: u64, limit: u64) -> DomainResult<Vec<DeletedStation>> {
        let models = deleted_station::Entity::find()
            .order_by_asc(deleted_station::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(history_to_domain).collect())
    }

    async fn find_deleted(&self, id: i32) -> DomainResult<Option<DeletedStation>> {
        let model = deleted_station::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(history_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        station::Entity::find().count(&self.db).await.map_err(db_err)
    }

    async fn average_power_by_connector(&self) -> DomainResult<Vec<(ConnectorType, f64)>> {
        let models = station::Entity::find().all(&self.db).await.map_err(db_err)?;
        let mut sums: BTreeMap<ConnectorType, (f64, u64)> = BTreeMap::new();
        for s in models {
            let connector = connector_to_domain(s.connector_type);
            let entry = sums.entry(connector).or_insert((0.0, 0));
            entry.0 += s.power_kw;
            entry.1 += 1;
        }
        Ok(sums
            .into_iter()
            .map(|(connector, (sum, n))| {
                let avg = sum / n as f64;
                (connector, (avg * 100.0).round() / 100.0)
            })
            .collect())
    }
}
