//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::MSG_USER_REGISTERED;
use crate::errors::AppResult;
use crate::types::{JwtTokenSuccessResponse, LoginRequest, MessageResponse, SignupRequest};

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(register_user))
        .route("/signin", post(authenticate_user))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "User already exists")
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<Json<MessageResponse>> {
    state.auth_service.register(payload).await?;

    Ok(Json(MessageResponse::new(MSG_USER_REGISTERED)))
}

/// Sign in and get a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = JwtTokenSuccessResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn authenticate_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<JwtTokenSuccessResponse>> {
    let token = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(token))
}
