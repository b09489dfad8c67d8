//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, comment_handler, image_handler, post_handler, user_handler,
};
use crate::domain::{CommentDto, ImageModel, PostDto, UserDto};
use crate::types::{
    InvalidLoginResponse, JwtTokenSuccessResponse, LoginRequest, MessageResponse, SignupRequest,
};

/// OpenAPI documentation for the Snapgram API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Snapgram API",
        version = "0.1.0",
        description = "Image sharing backend: accounts, posts, likes, comments and images",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        auth_handler::register_user,
        auth_handler::authenticate_user,
        user_handler::get_current_user,
        user_handler::get_user_profile,
        user_handler::update_user,
        post_handler::create_post,
        post_handler::get_all_posts,
        post_handler::get_all_posts_for_user,
        post_handler::get_post,
        post_handler::like_post,
        post_handler::delete_post,
        comment_handler::create_comment,
        comment_handler::get_all_comments_to_post,
        comment_handler::delete_comment,
        image_handler::upload_image_to_user,
        image_handler::upload_image_to_post,
        image_handler::get_image_for_user,
        image_handler::get_image_to_post,
    ),
    components(
        schemas(
            UserDto,
            PostDto,
            CommentDto,
            ImageModel,
            SignupRequest,
            LoginRequest,
            MessageResponse,
            JwtTokenSuccessResponse,
            InvalidLoginResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign up and sign in"),
        (name = "Users", description = "Profiles"),
        (name = "Posts", description = "Posts and likes"),
        (name = "Comments", description = "Comments on posts"),
        (name = "Images", description = "Profile and post images")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/signin"))
                        .build(),
                ),
            );
        }
    }
}
