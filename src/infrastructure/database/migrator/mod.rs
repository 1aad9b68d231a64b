//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_vehicles;
mod m20250301_000002_create_charge_profiles;
mod m20250301_000003_create_stations;
mod m20250301_000004_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_vehicles::Migration),
            Box::new(m20250301_000002_create_charge_profiles::Migration),
            Box::new(m20250301_000003_create_stations::Migration),
            Box::new(m20250301_000004_create_users::Migration),
        ]
    }
}
