//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod comment;
pub mod image_model;
pub mod post;
pub mod post_liked_user;
pub mod user;
