//! Image service - Profile pictures and post images.
//!
//! Bytes are stored exactly as uploaded.

use async_trait::async_trait;
use std::sync::Arc;

use super::user_service::user_by_principal;
use crate::domain::{ImageModel, NewImage, Principal};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Image service trait for dependency injection.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Store a profile image for the caller, replacing any previous one
    async fn upload_image_to_user(
        &self,
        name: String,
        bytes: Vec<u8>,
        principal: &dyn Principal,
    ) -> AppResult<ImageModel>;

    /// Attach an image to one of the caller's posts, replacing any previous one
    async fn upload_image_to_post(
        &self,
        post_id: i64,
        name: String,
        bytes: Vec<u8>,
        principal: &dyn Principal,
    ) -> AppResult<ImageModel>;

    /// Caller's profile image, if set
    async fn get_image_to_user(&self, principal: &dyn Principal) -> AppResult<Option<ImageModel>>;

    /// Image of any post
    async fn get_image_to_post(&self, post_id: i64) -> AppResult<ImageModel>;
}

/// Concrete implementation of ImageService using Unit of Work.
pub struct ImageManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ImageManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ImageService for ImageManager<U> {
    async fn upload_image_to_user(
        &self,
        name: String,
        bytes: Vec<u8>,
        principal: &dyn Principal,
    ) -> AppResult<ImageModel> {
        let user = user_by_principal(self.uow.users().as_ref(), principal).await?;
        let images = self.uow.images();

        if let Some(previous) = images.find_by_user_id(user.id).await? {
            images.delete(previous.id).await?;
        }

        tracing::info!(user_id = user.id, size = bytes.len(), "Uploading image profile");
        images
            .create(NewImage {
                name,
                image_bytes: bytes,
                user_id: Some(user.id),
                post_id: None,
            })
            .await
    }

    async fn upload_image_to_post(
        &self,
        post_id: i64,
        name: String,
        bytes: Vec<u8>,
        principal: &dyn Principal,
    ) -> AppResult<ImageModel> {
        let user = user_by_principal(self.uow.users().as_ref(), principal).await?;

        let post = self
            .uow
            .posts()
            .find_by_id_and_user(post_id, user.id)
            .await?
            .ok_or_else(|| {
                AppError::post_not_found(format!(
                    "Post cannot be found for username: {}",
                    user.email
                ))
            })?;

        let images = self.uow.images();
        if let Some(previous) = images.find_by_post_id(post.id).await? {
            images.delete(previous.id).await?;
        }

        tracing::info!(post_id = post.id, size = bytes.len(), "Uploading image to Post");
        images
            .create(NewImage {
                name,
                image_bytes: bytes,
                user_id: None,
                post_id: Some(post.id),
            })
            .await
    }

    async fn get_image_to_user(&self, principal: &dyn Principal) -> AppResult<Option<ImageModel>> {
        let user = user_by_principal(self.uow.users().as_ref(), principal).await?;
        self.uow.images().find_by_user_id(user.id).await
    }

    async fn get_image_to_post(&self, post_id: i64) -> AppResult<ImageModel> {
        self.uow
            .images()
            .find_by_post_id(post_id)
            .await?
            .ok_or_else(|| {
                AppError::image_not_found(format!("Cannot find image to Post: {}", post_id))
            })
    }
}
