//! Comment handlers.

use axum::{
    extract::{Extension, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::MSG_COMMENT_DELETED;
use crate::domain::CommentDto;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create comment routes
///
/// The leading segment is a post id for create/all and a comment id for
/// delete; the router needs one parameter name per position.
pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/create", post(create_comment))
        .route("/:id/all", get(get_all_comments_to_post))
        .route("/:id/delete", post(delete_comment))
}

/// Comment on a post
#[utoipa::path(
    post,
    path = "/api/comment/{post_id}/create",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    request_body = CommentDto,
    responses(
        (status = 200, description = "Comment created", body = CommentDto),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Post not found")
    )
)]
pub async fn create_comment(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CommentDto>,
) -> AppResult<Json<CommentDto>> {
    let comment = state
        .comment_service
        .create_comment(post_id, payload, &current_user)
        .await?;

    Ok(Json(state.comment_facade.comment_to_comment_dto(&comment)))
}

/// List comments of a post
#[utoipa::path(
    get,
    path = "/api/comment/{post_id}/all",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments", body = Vec<CommentDto>),
        (status = 404, description = "Post not found")
    )
)]
pub async fn get_all_comments_to_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<Vec<CommentDto>>> {
    let comments = state
        .comment_service
        .get_all_comments_for_post(post_id)
        .await?;

    Ok(Json(
        comments
            .iter()
            .map(|comment| state.comment_facade.comment_to_comment_dto(comment))
            .collect(),
    ))
}

/// Delete a comment; unknown ids succeed silently
#[utoipa::path(
    post,
    path = "/api/comment/{comment_id}/delete",
    tag = "Comments",
    security(("bearer_auth" = [])),
    params(("comment_id" = i64, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse)
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.comment_service.delete_comment(comment_id).await?;

    Ok(Json(MessageResponse::new(MSG_COMMENT_DELETED)))
}
