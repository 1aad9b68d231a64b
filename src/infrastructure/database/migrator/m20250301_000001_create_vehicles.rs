//! Create vehicles and vehicles_deleted tables
//!
//! The two tables share a column set; the history table swaps
//! updated_at for deleted_at and does not auto-increment its id.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::Brand).string().not_null())
                    .col(ColumnDef::new(Vehicles::Model).string().not_null())
                    .col(ColumnDef::new(Vehicles::Year).integer().not_null())
                    .col(ColumnDef::new(Vehicles::BatteryKwh).double().not_null())
                    .col(ColumnDef::new(Vehicles::RangeKm).double().not_null())
                    .col(
                        ColumnDef::new(Vehicles::Available)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Vehicles::ImageUrl).string())
                    .col(
                        ColumnDef::new(Vehicles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Vehicles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural duplicate key: (model, year)
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicles_model_year")
                    .table(Vehicles::Table)
                    .col(Vehicles::Model)
                    .col(Vehicles::Year)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(VehiclesDeleted::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VehiclesDeleted::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VehiclesDeleted::Brand).string().not_null())
                    .col(ColumnDef::new(VehiclesDeleted::Model).string().not_null())
                    .col(ColumnDef::new(VehiclesDeleted::Year).integer().not_null())
                    .col(
                        ColumnDef::new(VehiclesDeleted::BatteryKwh)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(VehiclesDeleted::RangeKm).double().not_null())
                    .col(
                        ColumnDef::new(VehiclesDeleted::Available)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(VehiclesDeleted::ImageUrl).string())
                    .col(
                        ColumnDef::new(VehiclesDeleted::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(VehiclesDeleted::DeletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehiclesDeleted::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Vehicles {
    Table,
    Id,
    Brand,
    Model,
    Year,
    BatteryKwh,
    RangeKm,
    Available,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum VehiclesDeleted {
    Table,
    Id,
    Brand,
    Model,
    Year,
    BatteryKwh,
    RangeKm,
    Available,
    ImageUrl,
    CreatedAt,
    DeletedAt,
}
