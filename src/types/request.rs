//! Authentication request payloads.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::validations::{password_matches, PasswordConfirmation};

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "password_matches", skip_on_field_errors = false))]
pub struct SignupRequest {
    #[validate(email(message = "It should have email format"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Please enter your name"))]
    #[schema(example = "Alice")]
    pub firstname: String,
    #[validate(length(min = 1, message = "Please enter your lastname"))]
    #[schema(example = "Smith")]
    pub lastname: String,
    #[validate(length(min = 1, message = "Please enter your username"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "abc123", min_length = 6)]
    pub password: String,
    #[schema(example = "abc123")]
    pub confirm_password: String,
}

impl PasswordConfirmation for SignupRequest {
    fn password(&self) -> &str {
        &self.password
    }

    fn confirm_password(&self) -> &str {
        &self.confirm_password
    }
}

/// Sign-in request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    #[schema(example = "alice")]
    pub username: String,
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    #[schema(example = "abc123")]
    pub password: String,
}
