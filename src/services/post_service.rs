//! Post service - Post lifecycle, likes and ownership-scoped access.
//!
//! Callers are resolved through their `Principal` username; a post that
//! exists but belongs to someone else is reported as not found.

use async_trait::async_trait;
use std::sync::Arc;

use super::user_service::user_by_principal;
use crate::domain::{NewPost, Post, PostDto, Principal};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Post service trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a post for the caller
    async fn create_post(&self, data: PostDto, principal: &dyn Principal) -> AppResult<Post>;

    /// Every post, newest first
    async fn get_all_posts(&self) -> AppResult<Vec<Post>>;

    /// One of the caller's own posts
    async fn get_post_by_id(&self, post_id: i64, principal: &dyn Principal) -> AppResult<Post>;

    /// The caller's posts, newest first
    async fn get_all_posts_for_user(&self, principal: &dyn Principal) -> AppResult<Vec<Post>>;

    /// Apply a like from `username` and persist the result
    async fn like_post(&self, post_id: i64, username: &str) -> AppResult<Post>;

    /// Delete one of the caller's posts together with its image
    async fn delete_post(&self, post_id: i64, principal: &dyn Principal) -> AppResult<()>;
}

/// Concrete implementation of PostService using Unit of Work.
pub struct PostManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PostManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PostService for PostManager<U> {
    async fn create_post(&self, _data: PostDto, principal: &dyn Principal) -> AppResult<Post> {
        let user = user_by_principal(self.uow.users().as_ref(), principal).await?;

        // Payload fields and owner are left unset; only the counters start fresh.
        let post = NewPost {
            likes: 0,
            ..NewPost::default()
        };

        tracing::info!("Saving Post for User: {}", user.email);
        self.uow.posts().create(post).await
    }

    async fn get_all_posts(&self) -> AppResult<Vec<Post>> {
        self.uow.posts().find_all_order_by_created_desc().await
    }

    async fn get_post_by_id(&self, post_id: i64, principal: &dyn Principal) -> AppResult<Post> {
        let user = user_by_principal(self.uow.users().as_ref(), principal).await?;

        self.uow
            .posts()
            .find_by_id_and_user(post_id, user.id)
            .await?
            .ok_or_else(|| {
                AppError::post_not_found(format!(
                    "Post cannot be found for username: {}",
                    user.email
                ))
            })
    }

    async fn get_all_posts_for_user(&self, principal: &dyn Principal) -> AppResult<Vec<Post>> {
        let user = user_by_principal(self.uow.users().as_ref(), principal).await?;

        self.uow
            .posts()
            .find_all_by_user_order_by_created_desc(user.id)
            .await
    }

    async fn like_post(&self, post_id: i64, username: &str) -> AppResult<Post> {
        let posts = self.uow.posts();
        let mut post = posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::post_not_found("Post not found"))?;

        post.toggle_like(username);
        tracing::debug!(post_id, username, likes = post.likes, "Like toggled");

        posts.save(post).await
    }

    async fn delete_post(&self, post_id: i64, principal: &dyn Principal) -> AppResult<()> {
        let post = self.get_post_by_id(post_id, principal).await?;

        let images = self.uow.images();
        if let Some(image) = images.find_by_post_id(post.id).await? {
            images.delete(image.id).await?;
        }

        self.uow.posts().delete(post.id).await?;
        tracing::info!(post_id = post.id, "Post deleted");
        Ok(())
    }
}
