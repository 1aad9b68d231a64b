//! External concerns: database access and credential hashing

pub mod crypto;
pub mod database;

pub use database::{init_database, DatabaseConfig};
