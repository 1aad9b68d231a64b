//! Request handler modules, one per resource

pub mod auth;
pub mod charge_profiles;
pub mod health;
pub mod stats;
pub mod stations;
pub mod vehicles;

use std::sync::Arc;

use crate::domain::RepositoryProvider;

/// Shared state for all repository-backed handlers
#[derive(Clone)]
pub struct ApiState {
    pub repos: Arc<dyn RepositoryProvider>,
}
