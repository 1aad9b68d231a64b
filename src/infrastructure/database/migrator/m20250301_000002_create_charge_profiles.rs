//! Create charge_profiles and charge_profiles_deleted tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChargeProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChargeProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfiles::VehicleModel)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfiles::RangeStandard)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfiles::ConsumptionKwh100km)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfiles::ChargeTimeHours)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfiles::ChargeDifficulty)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfiles::HomeInstallRequired)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ChargeProfiles::ImageUrl).string())
                    .col(
                        ColumnDef::new(ChargeProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Natural duplicate key: (vehicle_model, range_standard)
        manager
            .create_index(
                Index::create()
                    .name("idx_charge_profiles_model_standard")
                    .table(ChargeProfiles::Table)
                    .col(ChargeProfiles::VehicleModel)
                    .col(ChargeProfiles::RangeStandard)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ChargeProfilesDeleted::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::VehicleModel)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::RangeStandard)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::ConsumptionKwh100km)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::ChargeTimeHours)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::ChargeDifficulty)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::HomeInstallRequired)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(ChargeProfilesDeleted::ImageUrl).string())
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ChargeProfilesDeleted::DeletedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChargeProfilesDeleted::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ChargeProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum ChargeProfiles {
    Table,
    Id,
    VehicleModel,
    RangeStandard,
    #[iden = "consumption_kwh_100km"]
    ConsumptionKwh100km,
    ChargeTimeHours,
    ChargeDifficulty,
    HomeInstallRequired,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub enum ChargeProfilesDeleted {
    Table,
    Id,
    VehicleModel,
    RangeStandard,
    #[iden = "consumption_kwh_100km"]
    ConsumptionKwh100km,
    ChargeTimeHours,
    ChargeDifficulty,
    HomeInstallRequired,
    ImageUrl,
    CreatedAt,
    DeletedAt,
}
