//! Post handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::MSG_POST_DELETED;
use crate::domain::{Post, PostDto};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_post))
        .route("/all", get(get_all_posts))
        .route("/user/posts", get(get_all_posts_for_user))
        .route("/:post_id", get(get_post))
        .route("/:post_id/:username/like", post(like_post))
        .route("/:post_id/delete", post(delete_post))
}

fn to_dtos(state: &AppState, posts: &[Post]) -> Vec<PostDto> {
    posts
        .iter()
        .map(|post| state.post_facade.post_to_post_dto(post))
        .collect()
}

/// Create a post for the caller
#[utoipa::path(
    post,
    path = "/api/post/create",
    tag = "Posts",
    security(("bearer_auth" = [])),
    request_body = PostDto,
    responses(
        (status = 200, description = "Post created", body = PostDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_post(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PostDto>,
) -> AppResult<Json<PostDto>> {
    let post = state.post_service.create_post(payload, &current_user).await?;

    Ok(Json(state.post_facade.post_to_post_dto(&post)))
}

/// List every post, newest first
#[utoipa::path(
    get,
    path = "/api/post/all",
    tag = "Posts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All posts", body = Vec<PostDto>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_all_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostDto>>> {
    let posts = state.post_service.get_all_posts().await?;

    Ok(Json(to_dtos(&state, &posts)))
}

/// List the caller's posts, newest first
#[utoipa::path(
    get,
    path = "/api/post/user/posts",
    tag = "Posts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's posts", body = Vec<PostDto>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_all_posts_for_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PostDto>>> {
    let posts = state
        .post_service
        .get_all_posts_for_user(&current_user)
        .await?;

    Ok(Json(to_dtos(&state, &posts)))
}

/// Get one of the caller's posts
#[utoipa::path(
    get,
    path = "/api/post/{post_id}",
    tag = "Posts",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post", body = PostDto),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_post(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<PostDto>> {
    let post = state
        .post_service
        .get_post_by_id(post_id, &current_user)
        .await?;

    Ok(Json(state.post_facade.post_to_post_dto(&post)))
}

/// Toggle a like on a post
#[utoipa::path(
    post,
    path = "/api/post/{post_id}/{username}/like",
    tag = "Posts",
    security(("bearer_auth" = [])),
    params(
        ("post_id" = i64, Path, description = "Post ID"),
        ("username" = String, Path, description = "Liking user")
    ),
    responses(
        (status = 200, description = "Updated post", body = PostDto),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn like_post(
    State(state): State<AppState>,
    Path((post_id, username)): Path<(i64, String)>,
) -> AppResult<Json<PostDto>> {
    let post = state.post_service.like_post(post_id, &username).await?;

    Ok(Json(state.post_facade.post_to_post_dto(&post)))
}

/// Delete one of the caller's posts
#[utoipa::path(
    post,
    path = "/api/post/{post_id}/delete",
    tag = "Posts",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn delete_post(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.post_service.delete_post(post_id, &current_user).await?;

    Ok(Json(MessageResponse::new(MSG_POST_DELETED)))
}
