//! Comment domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Comment on a post.
///
/// `user_id` and `username` are copied from the author when the comment is
/// written and are never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub username: String,
    pub message: String,
    pub created_date: DateTime<Utc>,
}

/// Fields needed to insert a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post_id: i64,
    pub user_id: i64,
    pub username: String,
    pub message: String,
}

/// Comment as exchanged with clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(default)]
    pub id: i64,
    #[validate(length(min = 1, message = "Message is required"))]
    #[schema(example = "Great shot!")]
    pub message: String,
    #[serde(default)]
    pub username: String,
}
