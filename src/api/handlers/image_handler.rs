//! Image upload and download handlers.

use axum::{
    extract::{DefaultBodyLimit, Extension, Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ImageUpload;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::{MAX_IMAGE_BYTES, MSG_IMAGE_UPLOADED};
use crate::domain::ImageModel;
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// Create image routes
pub fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_image_to_user))
        .route("/:post_id/upload", post(upload_image_to_post))
        .route("/profile_image", get(get_image_for_user))
        .route("/:post_id/image", get(get_image_to_post))
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES))
}

/// Upload the caller's profile image
#[utoipa::path(
    post,
    path = "/api/image/upload",
    tag = "Images",
    security(("bearer_auth" = [])),
    request_body(content = String, content_type = "multipart/form-data", description = "Image in field `file`"),
    responses(
        (status = 200, description = "Image stored", body = MessageResponse),
        (status = 400, description = "Missing file"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn upload_image_to_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    upload: ImageUpload,
) -> AppResult<Json<MessageResponse>> {
    state
        .image_service
        .upload_image_to_user(upload.name, upload.bytes, &current_user)
        .await?;

    Ok(Json(MessageResponse::new(MSG_IMAGE_UPLOADED)))
}

/// Attach an image to one of the caller's posts
#[utoipa::path(
    post,
    path = "/api/image/{post_id}/upload",
    tag = "Images",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    request_body(content = String, content_type = "multipart/form-data", description = "Image in field `file`"),
    responses(
        (status = 200, description = "Image stored", body = MessageResponse),
        (status = 404, description = "Post not found")
    )
)]
pub async fn upload_image_to_post(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    upload: ImageUpload,
) -> AppResult<Json<MessageResponse>> {
    state
        .image_service
        .upload_image_to_post(post_id, upload.name, upload.bytes, &current_user)
        .await?;

    Ok(Json(MessageResponse::new(MSG_IMAGE_UPLOADED)))
}

/// The caller's profile image, `null` when unset
#[utoipa::path(
    get,
    path = "/api/image/profile_image",
    tag = "Images",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile image", body = Option<ImageModel>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_image_for_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
) -> AppResult<Json<Option<ImageModel>>> {
    let image = state.image_service.get_image_to_user(&current_user).await?;

    Ok(Json(image))
}

/// Image attached to a post
#[utoipa::path(
    get,
    path = "/api/image/{post_id}/image",
    tag = "Images",
    security(("bearer_auth" = [])),
    params(("post_id" = i64, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post image", body = ImageModel),
        (status = 404, description = "Image not found")
    )
)]
pub async fn get_image_to_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> AppResult<Json<ImageModel>> {
    let image = state.image_service.get_image_to_post(post_id).await?;

    Ok(Json(image))
}
