//! Post domain entity and related types.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Owning user of a post, resolved when the post is loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostOwner {
    pub id: i64,
    pub username: String,
}

/// Post domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub owner: Option<PostOwner>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub likes: i32,
    /// Usernames recorded as liking this post, each at most once
    pub liked_users: BTreeSet<String>,
    pub created_date: DateTime<Utc>,
}

impl Post {
    pub fn owner_id(&self) -> Option<i64> {
        self.owner.as_ref().map(|owner| owner.id)
    }

    /// Apply a like from `username`.
    ///
    /// The branches are inverted with respect to a conventional toggle: a
    /// username already in the set bumps the count (the set is unchanged),
    /// while an absent one lowers the count and the removal is a no-op. The
    /// count is therefore allowed to drop below zero.
    pub fn toggle_like(&mut self, username: &str) {
        if self.liked_users.contains(username) {
            self.likes += 1;
            self.liked_users.insert(username.to_string());
        } else {
            self.likes -= 1;
            self.liked_users.remove(username);
        }
    }
}

/// Fields needed to insert a post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub location: Option<String>,
    pub likes: i32,
}

/// Post as exchanged with clients
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    #[serde(default)]
    pub id: i64,
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Sunset")]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Caption is required"))]
    #[schema(example = "Golden hour at the pier")]
    pub caption: Option<String>,
    #[schema(example = "Lisbon")]
    pub location: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub likes: i32,
    #[serde(default)]
    pub users_liked: BTreeSet<String>,
}
