//! Migration: Create image_models table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ImageModels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ImageModels::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ImageModels::Name).string().not_null())
                    .col(ColumnDef::new(ImageModels::ImageBytes).binary().not_null())
                    .col(ColumnDef::new(ImageModels::UserId).big_integer().null())
                    .col(ColumnDef::new(ImageModels::PostId).big_integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_image_models_post_id")
                    .table(ImageModels::Table)
                    .col(ImageModels::PostId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_image_models_user_id")
                    .table(ImageModels::Table)
                    .col(ImageModels::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ImageModels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ImageModels {
    Table,
    Id,
    Name,
    ImageBytes,
    UserId,
    PostId,
}
