//! User repository interface

use async_trait::async_trait;

use super::model::{NewUser, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<User>>;

    /// Looks the user up by either natural key (national id or
    /// email). Absence is reported uniformly regardless of which key
    /// was tried.
    async fn find_by_natural_key(&self, identifier: &str) -> DomainResult<Option<User>>;

    /// Fails with `Duplicate` when the email or national id is
    /// already registered.
    async fn create(&self, draft: NewUser) -> DomainResult<User>;

    async fn update_password(&self, id: i32, password_hash: String) -> DomainResult<()>;

    async fn count(&self) -> DomainResult<u64>;
}
