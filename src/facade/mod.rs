//! Entity to DTO projections.
//!
//! Facades copy the client-visible fields of an entity and nothing else;
//! credentials, emails and internal ids stay behind.

use crate::domain::{Comment, CommentDto, Post, PostDto, User, UserDto};

#[derive(Debug, Clone, Copy, Default)]
pub struct UserFacade;

impl UserFacade {
    pub fn user_to_user_dto(&self, user: &User) -> UserDto {
        UserDto {
            id: user.id,
            username: user.username.clone(),
            firstname: user.name.clone(),
            lastname: user.lastname.clone(),
            bio: user.bio.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PostFacade;

impl PostFacade {
    /// `username` is the owner's, absent for ownerless posts.
    pub fn post_to_post_dto(&self, post: &Post) -> PostDto {
        PostDto {
            id: post.id,
            title: post.title.clone(),
            caption: post.caption.clone(),
            location: post.location.clone(),
            username: post.owner.as_ref().map(|owner| owner.username.clone()),
            likes: post.likes,
            users_liked: post.liked_users.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CommentFacade;

impl CommentFacade {
    pub fn comment_to_comment_dto(&self, comment: &Comment) -> CommentDto {
        CommentDto {
            id: comment.id,
            message: comment.message.clone(),
            username: comment.username.clone(),
        }
    }
}
