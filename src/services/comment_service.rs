//! Comment service - Writing, listing and removing comments on posts.

use async_trait::async_trait;
use std::sync::Arc;

use super::user_service::user_by_principal;
use crate::domain::{Comment, CommentDto, NewComment, Post, Principal};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Comment service trait for dependency injection.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Comment on any existing post as the caller
    async fn create_comment(
        &self,
        post_id: i64,
        data: CommentDto,
        principal: &dyn Principal,
    ) -> AppResult<Comment>;

    /// Comments of an existing post
    async fn get_all_comments_for_post(&self, post_id: i64) -> AppResult<Vec<Comment>>;

    /// Remove a comment if it exists
    async fn delete_comment(&self, comment_id: i64) -> AppResult<()>;
}

/// Concrete implementation of CommentService using Unit of Work.
pub struct CommentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CommentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn post_by_id(&self, post_id: i64) -> AppResult<Post> {
        self.uow
            .posts()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::post_not_found("Post not found"))
    }
}

#[async_trait]
impl<U: UnitOfWork> CommentService for CommentManager<U> {
    async fn create_comment(
        &self,
        post_id: i64,
        data: CommentDto,
        principal: &dyn Principal,
    ) -> AppResult<Comment> {
        let user = user_by_principal(self.uow.users().as_ref(), principal).await?;
        let post = self.post_by_id(post_id).await?;

        let comment = NewComment {
            post_id: post.id,
            user_id: user.id,
            username: user.username,
            message: data.message,
        };

        tracing::info!("Saving comment for Post: {}", post.id);
        self.uow.comments().create(comment).await
    }

    async fn get_all_comments_for_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        let post = self.post_by_id(post_id).await?;
        self.uow.comments().find_all_by_post(post.id).await
    }

    async fn delete_comment(&self, comment_id: i64) -> AppResult<()> {
        let comments = self.uow.comments();
        if let Some(comment) = comments.find_by_id(comment_id).await? {
            comments.delete(comment.id).await?;
        }
        Ok(())
    }
}
