use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Posts::Title).string().not_null())
                    .col(ColumnDef::new(Posts::Content).text())
                    .col(ColumnDef::new(Posts::Caption).text())
                    .col(ColumnDef::new(Posts::ImageUrl).string())
                    .col(ColumnDef::new(Posts::ImageDescription).text())
                    .col(ColumnDef::new(Posts::ScheduledDate).timestamp_with_time_zone())
                    .col(ColumnDef::new(Posts::Frequency).string().not_null())
                    .col(ColumnDef::new(Posts::Status).string().not_null())
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Posts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Windowed listings filter by owner and scheduled date.
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_owner_scheduled_date")
                    .table(Posts::Table)
                    .col(Posts::OwnerId)
                    .col(Posts::ScheduledDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    OwnerId,
    Title,
    Content,
    Caption,
    ImageUrl,
    ImageDescription,
    ScheduledDate,
    Frequency,
    Status,
    CreatedAt,
    UpdatedAt,
}
