//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use log::info;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use crate::domain::user::{NewUser, User, UserRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::user;

use super::db_err;

fn entity_to_domain(u: user::Model) -> User {
    User {
        id: u.id,
        name: u.name,
        age: u.age,
        email: u.email,
        national_id: u.national_id,
        phone: u.phone,
        password_hash: u.password_hash,
        is_active: u.is_active,
        created_at: u.created_at,
    }
}

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_natural_key(&self, identifier: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(
                user::Column::NationalId
                    .eq(identifier)
                    .or(user::Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn create(&self, draft: NewUser) -> DomainResult<User> {
        let existing = user::Entity::find()
            .filter(
                user::Column::Email
                    .eq(&draft.email)
                    .or(user::Column::NationalId.eq(&draft.national_id)),
            )
            .one(&self.db)
            .await
            .map_err(db_err)?;
        if existing.is_some() {
            return Err(DomainError::Duplicate {
                entity: "User",
                key: format!(
                    "email='{}' or national_id='{}'",
                    draft.email, draft.national_id
                ),
            });
        }

        let model = user::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            age: Set(draft.age),
            email: Set(draft.email),
            national_id: Set(draft.national_id),
            phone: Set(draft.phone),
            password_hash: Set(draft.password_hash),
            is_active: Set(true),
            created_at: Set(Utc::now()),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("User registered: {} ({})", result.email, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update_password(&self, id: i32, password_hash: String) -> DomainResult<()> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(model) = model else {
            return Err(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.to_string(),
            });
        };

        let mut active: user::ActiveModel = model.into();
        active.password_hash = Set(password_hash);
        active.update(&self.db).await.map_err(db_err)?;
        info!("Password updated for user {}", id);
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
    }
}
