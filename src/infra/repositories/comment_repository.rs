//! Comment repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::comment::{self, ActiveModel, Entity as CommentEntity};
use crate::domain::{Comment, NewComment};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Comment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>>;

    /// Comments attached to `post_id`
    async fn find_all_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>>;

    async fn create(&self, comment: NewComment) -> AppResult<Comment>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed comment repository
pub struct CommentStore {
    db: DatabaseConnection,
}

impl CommentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Comment>> {
        let result = CommentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Comment::from))
    }

    async fn find_all_by_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        let models = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Comment::from).collect())
    }

    async fn create(&self, comment: NewComment) -> AppResult<Comment> {
        let active_model = ActiveModel {
            post_id: Set(comment.post_id),
            user_id: Set(comment.user_id),
            username: Set(comment.username),
            message: Set(comment.message),
            created_date: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Comment::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        CommentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
