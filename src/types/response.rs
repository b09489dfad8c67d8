use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful sign-in; `message` carries the token with its bearer prefix
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JwtTokenSuccessResponse {
    pub success: bool,
    #[schema(example = "Bearer eyJhbGciOiJIUzUxMiJ9...")]
    pub message: String,
}

impl JwtTokenSuccessResponse {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            success: true,
            message: token.into(),
        }
    }
}

/// Body returned when a protected route is hit without valid credentials
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvalidLoginResponse {
    pub username: String,
    pub password: String,
}

impl Default for InvalidLoginResponse {
    fn default() -> Self {
        Self {
            username: "Invalid Username".to_string(),
            password: "Invalid Password".to_string(),
        }
    }
}
