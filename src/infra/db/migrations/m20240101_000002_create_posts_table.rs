//! Migration: Create posts and post_liked_users tables.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

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
                    .col(
                        ColumnDef::new(Posts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::UserId).big_integer().null())
                    .col(ColumnDef::new(Posts::Title).string().null())
                    .col(ColumnDef::new(Posts::Caption).text().null())
                    .col(ColumnDef::new(Posts::Location).string().null())
                    .col(ColumnDef::new(Posts::Likes).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Posts::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_user_id")
                            .from(Posts::Table, Posts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_posts_user_id_created_date")
                    .table(Posts::Table)
                    .col(Posts::UserId)
                    .col(Posts::CreatedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PostLikedUsers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PostLikedUsers::PostId).big_integer().not_null())
                    .col(ColumnDef::new(PostLikedUsers::Username).string().not_null())
                    .primary_key(
                        Index::create()
                            .col(PostLikedUsers::PostId)
                            .col(PostLikedUsers::Username),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_liked_users_post_id")
                            .from(PostLikedUsers::Table, PostLikedUsers::PostId)
                            .to(Posts::Table, Posts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostLikedUsers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Posts {
    Table,
    Id,
    UserId,
    Title,
    Caption,
    Location,
    Likes,
    CreatedDate,
}

#[derive(Iden)]
enum PostLikedUsers {
    Table,
    PostId,
    Username,
}
