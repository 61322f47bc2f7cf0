use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_pilot_tables::Pilot;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffRole::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffRole::Id))
                    .col(string_uniq(StaffRole::Name))
                    .col(string_null(StaffRole::Description))
                    .col(text(StaffRole::Permissions))
                    .col(integer(StaffRole::SortOrder).default(0))
                    .col(boolean(StaffRole::IsActive).default(true))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(StaffMember::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffMember::Id))
                    .col(integer(StaffMember::PilotId))
                    .col(integer(StaffMember::RoleId))
                    .col(
                        timestamp_with_time_zone(StaffMember::AssignedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_member_pilot_id")
                            .from(StaffMember::Table, StaffMember::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_member_role_id")
                            .from(StaffMember::Table, StaffMember::RoleId)
                            .to(StaffRole::Table, StaffRole::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_staff_member_pilot_role")
                    .table(StaffMember::Table)
                    .col(StaffMember::PilotId)
                    .col(StaffMember::RoleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffMember::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StaffRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffRole {
    Table,
    Id,
    Name,
    Description,
    Permissions,
    SortOrder,
    IsActive,
}

#[derive(DeriveIden)]
pub enum StaffMember {
    Table,
    Id,
    PilotId,
    RoleId,
    AssignedAt,
}
