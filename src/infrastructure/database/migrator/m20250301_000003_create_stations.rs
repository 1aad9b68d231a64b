//! Create stations and stations_deleted tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Stations::Name).string().not_null())
                    .col(ColumnDef::new(Stations::Location).string().not_null())
                    .col(ColumnDef::new(Stations::ConnectorType).string().not_null())
                    .col(ColumnDef::new(Stations::PowerKw).double().not_null())
                    .col(
                        ColumnDef::new(Stations::ConnectorCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stations::PublicAccess)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Stations::OpeningHours).string().not_null())
                    .col(ColumnDef::new(Stations::CostPerKwh).double().not_null())
                    .col(ColumnDef::new(Stations::Operator).string().not_null())
                    .col(ColumnDef::new(Stations::ImageUrl).string())
                    .col(
                        ColumnDef::new(Stations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Stations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural duplicate key: (name, location)
        manager
            .create_index(
                Index::create()
                    .name("idx_stations_name_location")
                    .table(Stations::Table)
                    .col(Stations::Name)
                    .col(Stations::Location)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StationsDeleted::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StationsDeleted::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StationsDeleted::Name).string().not_null())
                    .col(
                        ColumnDef::new(StationsDeleted::Location)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StationsDeleted::ConnectorType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StationsDeleted::PowerKw).double().not_null())
                    .col(
                        ColumnDef::new(StationsDeleted::ConnectorCount)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StationsDeleted::PublicAccess)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(StationsDeleted::OpeningHours)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StationsDeleted::CostPerKwh)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(StationsDeleted::Operator).string().not_null())
                    .col(ColumnDef::new(StationsDeleted::ImageUrl).string())
                    .col(
                        ColumnDef::new(StationsDeleted::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StationsDeleted::DeletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StationsDeleted::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Stations {
    Table,
    Id,
    Name,
    Location,
    ConnectorType,
    PowerKw,
    ConnectorCount,
    PublicAccess,
    OpeningHours,
    CostPerKwh,
    Operator,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum StationsDeleted {
    Table,
    Id,
    Name,
    Location,
    ConnectorType,
    PowerKw,
    ConnectorCount,
    PublicAccess,
    OpeningHours,
    CostPerKwh,
    Operator,
    ImageUrl,
    CreatedAt,
    DeletedAt,
}
