//! User handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::UserDto;
use crate::errors::AppResult;

/// Create user routes.
///
/// Merged rather than nested: the current-user route must answer on both
/// `/user` and `/user/`.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(get_current_user))
        .route("/user/", get(get_current_user))
        .route("/user/:user_id", get(get_user_profile))
        .route("/user/update", post(update_user))
}

/// Get current authenticated user
#[utoipa::path(
    get,
    path = "/api/user/",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserDto),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_current_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<UserDto>> {
    let user = state.user_service.get_current_user(&current_user).await?;

    Ok(Json(state.user_facade.user_to_user_dto(&user)))
}

/// Get any user's public profile
#[utoipa::path(
    get,
    path = "/api/user/{user_id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("user_id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Json<UserDto>> {
    let user = state.user_service.get_user_by_id(user_id).await?;

    Ok(Json(state.user_facade.user_to_user_dto(&user)))
}

/// Update the caller's profile
#[utoipa::path(
    post,
    path = "/api/user/update",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UserDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> AppResult<Json<UserDto>> {
    let user = state
        .user_service
        .update_user(payload, &current_user)
        .await?;

    Ok(Json(state.user_facade.user_to_user_dto(&user)))
}
