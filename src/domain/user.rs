//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    /// Unique login name; services resolve callers by it
    pub username: String,
    /// First name
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub bio: Option<String>,
    pub password_hash: String,
    pub created_date: DateTime<Utc>,
}

impl User {
    /// Apply a profile edit. Username and email are immutable here.
    pub fn apply_profile(&mut self, dto: UserDto) {
        self.name = dto.firstname;
        self.lastname = dto.lastname;
        self.bio = dto.bio;
    }
}

/// Fields needed to insert a new account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
}

/// Public profile of a user (also the profile-update payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i64,
    #[serde(default)]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(length(min = 1, message = "Firstname is required"))]
    #[schema(example = "Alice")]
    pub firstname: String,
    #[validate(length(min = 1, message = "Lastname is required"))]
    #[schema(example = "Smith")]
    pub lastname: String,
    #[schema(example = "Photographer")]
    pub bio: Option<String>,
}
