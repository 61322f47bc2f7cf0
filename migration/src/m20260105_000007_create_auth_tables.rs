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
                    .table(PendingAuth::Table)
                    .if_not_exists()
                    .col(pk_auto(PendingAuth::Id))
                    .col(string_uniq(PendingAuth::Code))
                    .col(integer(PendingAuth::PilotId))
                    .col(string(PendingAuth::CodeChallenge))
                    .col(string(PendingAuth::ChallengeMethod).default("S256"))
                    .col(string(PendingAuth::RedirectUri))
                    .col(timestamp_with_time_zone(PendingAuth::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pending_auth_pilot_id")
                            .from(PendingAuth::Table, PendingAuth::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AcarsToken::Table)
                    .if_not_exists()
                    .col(pk_auto(AcarsToken::Id))
                    .col(string_uniq(AcarsToken::TokenHash))
                    .col(integer(AcarsToken::PilotId))
                    .col(string(AcarsToken::Kind))
                    .col(timestamp_with_time_zone(AcarsToken::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(AcarsToken::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_acars_token_pilot_id")
                            .from(AcarsToken::Table, AcarsToken::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PasswordReset::Table)
                    .if_not_exists()
                    .col(pk_auto(PasswordReset::Id))
                    .col(string_uniq(PasswordReset::TokenHash))
                    .col(integer(PasswordReset::PilotId))
                    .col(boolean(PasswordReset::Used).default(false))
                    .col(timestamp_with_time_zone(PasswordReset::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(PasswordReset::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_password_reset_pilot_id")
                            .from(PasswordReset::Table, PasswordReset::PilotId)
                            .to(Pilot::Table, Pilot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PasswordReset::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AcarsToken::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PendingAuth::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PendingAuth {
    Table,
    Id,
    Code,
    PilotId,
    CodeChallenge,
    ChallengeMethod,
    RedirectUri,
    ExpiresAt,
}

#[derive(DeriveIden)]
pub enum AcarsToken {
    Table,
    Id,
    TokenHash,
    PilotId,
    Kind,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum PasswordReset {
    Table,
    Id,
    TokenHash,
    PilotId,
    Used,
    ExpiresAt,
    CreatedAt,
}
