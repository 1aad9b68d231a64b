//! # EV Catalog Service
//!
//! REST API for tracking electric vehicles, their charging-difficulty
//! profiles and charging stations, with soft-delete-to-history
//! semantics and user registration/authentication.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, repository traits and errors
//! - **infrastructure**: External concerns (database, migrations, credential hashing)
//! - **interfaces**: REST API with Swagger documentation
//! - **config**: TOML application configuration

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
