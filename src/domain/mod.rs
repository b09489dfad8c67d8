//! Domain layer - Core business entities and logic
//!
//! Entities, client-facing DTOs and value objects, independent of the
//! persistence and HTTP layers.

pub mod comment;
pub mod image;
pub mod password;
pub mod post;
pub mod principal;
pub mod user;

pub use comment::{Comment, CommentDto, NewComment};
pub use image::{ImageModel, NewImage};
pub use password::Password;
pub use post::{NewPost, Post, PostDto, PostOwner};
pub use principal::Principal;
pub use user::{NewUser, User, UserDto};
