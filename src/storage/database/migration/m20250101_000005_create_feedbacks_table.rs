use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Feedbacks::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Feedbacks::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Feedbacks::TranslationId).uuid().not_null())
                    .col(ColumnDef::new(Feedbacks::UserId).uuid().not_null())
                    .col(ColumnDef::new(Feedbacks::Rating).integer().not_null())
                    .col(ColumnDef::new(Feedbacks::SuggestedText).text().null())
                    .col(
                        ColumnDef::new(Feedbacks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Feedbacks::Rating).between(1, 5))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_feedbacks_translation_id")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::TranslationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_feedbacks_created_at")
                    .table(Feedbacks::Table)
                    .col(Feedbacks::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Feedbacks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Feedbacks {
    Table,
    Id,
    TranslationId,
    UserId,
    Rating,
    SuggestedText,
    CreatedAt,
}
