//! Image repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::entities::image_model::{self, ActiveModel, Entity as ImageEntity};
use crate::domain::{ImageModel, NewImage};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Image repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Image attached to `post_id`, if any
    async fn find_by_post_id(&self, post_id: i64) -> AppResult<Option<ImageModel>>;

    /// Profile image of `user_id`, if any
    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Option<ImageModel>>;

    async fn create(&self, image: NewImage) -> AppResult<ImageModel>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed image repository
pub struct ImageStore {
    db: DatabaseConnection,
}

impl ImageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ImageRepository for ImageStore {
    async fn find_by_post_id(&self, post_id: i64) -> AppResult<Option<ImageModel>> {
        let result = ImageEntity::find()
            .filter(image_model::Column::PostId.eq(post_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ImageModel::from))
    }

    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Option<ImageModel>> {
        let result = ImageEntity::find()
            .filter(image_model::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ImageModel::from))
    }

    async fn create(&self, image: NewImage) -> AppResult<ImageModel> {
        let active_model = ActiveModel {
            name: Set(image.name),
            image_bytes: Set(image.image_bytes),
            user_id: Set(image.user_id),
            post_id: Set(image.post_id),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(ImageModel::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        ImageEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }
}
