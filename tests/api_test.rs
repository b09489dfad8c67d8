//! Integration tests for API endpoints.
//!
//! These tests drive the full router with fake services, so no database is
//! needed. The database handle is disconnected on purpose.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;

use snapgram_api::api::{create_router, AppState};
use snapgram_api::config::SecurityConfig;
use snapgram_api::domain::{
    Comment, CommentDto, ImageModel, Post, PostDto, PostOwner, Principal, User, UserDto,
};
use snapgram_api::errors::{AppError, AppResult};
use snapgram_api::infra::Database;
use snapgram_api::services::{
    AuthService, Claims, CommentService, ImageService, PostService, ServiceContainer,
    UserService,
};
use snapgram_api::types::{JwtTokenSuccessResponse, SignupRequest};

const VALID_TOKEN: &str = "valid-test-token";

// =============================================================================
// Fake Services for Testing
// =============================================================================

fn test_user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        name: "Alice".to_string(),
        lastname: "Smith".to_string(),
        email: format!("{}@example.com", username),
        bio: Some("Photographer".to_string()),
        password_hash: "hashed".to_string(),
        created_date: Utc::now(),
    }
}

fn test_post(id: i64) -> Post {
    Post {
        id,
        owner: Some(PostOwner {
            id: 1,
            username: "alice".to_string(),
        }),
        title: Some("Sunset".to_string()),
        caption: Some("Golden hour".to_string()),
        location: None,
        likes: 1,
        liked_users: BTreeSet::from(["bob".to_string()]),
        created_date: Utc::now(),
    }
}

struct FakeAuthService;

#[async_trait]
impl AuthService for FakeAuthService {
    async fn register(&self, request: SignupRequest) -> AppResult<User> {
        if request.username == "taken" {
            return Err(AppError::conflict(
                "The user taken already exist. Please check credentials",
            ));
        }
        Ok(test_user(2, &request.username))
    }

    async fn login(&self, username: String, password: String) -> AppResult<JwtTokenSuccessResponse> {
        if username == "alice" && password == "abc123" {
            Ok(JwtTokenSuccessResponse::new("Bearer mock-token"))
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token != VALID_TOKEN {
            return Err(AppError::Unauthorized);
        }
        Ok(Claims {
            sub: "1".to_string(),
            id: 1,
            username: "alice".to_string(),
            firstname: "Alice".to_string(),
            lastname: "Smith".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 600,
        })
    }
}

struct FakeUserService;

#[async_trait]
impl UserService for FakeUserService {
    async fn get_current_user(&self, principal: &dyn Principal) -> AppResult<User> {
        Ok(test_user(1, principal.username()))
    }

    async fn get_user_by_id(&self, user_id: i64) -> AppResult<User> {
        match user_id {
            1 => Ok(test_user(1, "alice")),
            _ => Err(AppError::user_not_found(user_id.to_string())),
        }
    }

    async fn update_user(&self, data: UserDto, principal: &dyn Principal) -> AppResult<User> {
        let mut user = test_user(1, principal.username());
        user.apply_profile(data);
        Ok(user)
    }
}

struct FakePostService;

#[async_trait]
impl PostService for FakePostService {
    async fn create_post(&self, _data: PostDto, _principal: &dyn Principal) -> AppResult<Post> {
        Ok(Post {
            id: 3,
            owner: None,
            title: None,
            caption: None,
            location: None,
            likes: 0,
            liked_users: BTreeSet::new(),
            created_date: Utc::now(),
        })
    }

    async fn get_all_posts(&self) -> AppResult<Vec<Post>> {
        Ok(vec![test_post(2), test_post(1)])
    }

    async fn get_post_by_id(&self, post_id: i64, principal: &dyn Principal) -> AppResult<Post> {
        if post_id == 1 {
            Ok(test_post(1))
        } else {
            Err(AppError::post_not_found(format!(
                "Post cannot be found for username: {}@example.com",
                principal.username()
            )))
        }
    }

    async fn get_all_posts_for_user(&self, _principal: &dyn Principal) -> AppResult<Vec<Post>> {
        Ok(vec![test_post(1)])
    }

    async fn like_post(&self, post_id: i64, username: &str) -> AppResult<Post> {
        let mut post = test_post(post_id);
        post.toggle_like(username);
        Ok(post)
    }

    async fn delete_post(&self, post_id: i64, principal: &dyn Principal) -> AppResult<()> {
        self.get_post_by_id(post_id, principal).await.map(|_| ())
    }
}

struct FakeCommentService;

#[async_trait]
impl CommentService for FakeCommentService {
    async fn create_comment(
        &self,
        post_id: i64,
        data: CommentDto,
        principal: &dyn Principal,
    ) -> AppResult<Comment> {
        Ok(Comment {
            id: 10,
            post_id,
            user_id: 1,
            username: principal.username().to_string(),
            message: data.message,
            created_date: Utc::now(),
        })
    }

    async fn get_all_comments_for_post(&self, post_id: i64) -> AppResult<Vec<Comment>> {
        if post_id == 1 {
            Ok(vec![])
        } else {
            Err(AppError::post_not_found("Post not found"))
        }
    }

    async fn delete_comment(&self, _comment_id: i64) -> AppResult<()> {
        Ok(())
    }
}

struct FakeImageService;

#[async_trait]
impl ImageService for FakeImageService {
    async fn upload_image_to_user(
        &self,
        name: String,
        bytes: Vec<u8>,
        _principal: &dyn Principal,
    ) -> AppResult<ImageModel> {
        Ok(ImageModel {
            id: 1,
            name,
            image_bytes: bytes,
            user_id: Some(1),
            post_id: None,
        })
    }

    async fn upload_image_to_post(
        &self,
        post_id: i64,
        name: String,
        bytes: Vec<u8>,
        _principal: &dyn Principal,
    ) -> AppResult<ImageModel> {
        Ok(ImageModel {
            id: 2,
            name,
            image_bytes: bytes,
            user_id: None,
            post_id: Some(post_id),
        })
    }

    async fn get_image_to_user(&self, _principal: &dyn Principal) -> AppResult<Option<ImageModel>> {
        Ok(None)
    }

    async fn get_image_to_post(&self, post_id: i64) -> AppResult<ImageModel> {
        if post_id == 7 {
            return Ok(ImageModel {
                id: 5,
                name: "trail.png".to_string(),
                image_bytes: vec![1, 2, 3],
                user_id: None,
                post_id: Some(post_id),
            });
        }
        Err(AppError::image_not_found(format!(
            "Cannot find image to Post: {}",
            post_id
        )))
    }
}

struct FakeServices;

impl ServiceContainer for FakeServices {
    fn auth(&self) -> Arc<dyn AuthService> {
        Arc::new(FakeAuthService)
    }

    fn users(&self) -> Arc<dyn UserService> {
        Arc::new(FakeUserService)
    }

    fn posts(&self) -> Arc<dyn PostService> {
        Arc::new(FakePostService)
    }

    fn comments(&self) -> Arc<dyn CommentService> {
        Arc::new(FakeCommentService)
    }

    fn images(&self) -> Arc<dyn ImageService> {
        Arc::new(FakeImageService)
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    let database = Arc::new(Database::from_connection(
        sea_orm::DatabaseConnection::Disconnected,
    ));
    let state = AppState::new(&FakeServices, database, SecurityConfig::default());

    create_router(state, &["http://localhost:4200".to_string()])
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", VALID_TOKEN))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value, authorized: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if authorized {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", VALID_TOKEN));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn signup_body(password: &str, confirm: &str) -> Value {
    json!({
        "email": "alice@example.com",
        "firstname": "Alice",
        "lastname": "Smith",
        "username": "alice",
        "password": password,
        "confirmPassword": confirm,
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_degraded_database() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"]["status"], "unhealthy");
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_protected_route_without_token() {
    let request = Request::builder()
        .uri("/api/post/all")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body,
        json!({"username": "Invalid Username", "password": "Invalid Password"})
    );
}

#[tokio::test]
async fn test_protected_route_with_bad_token() {
    let request = Request::builder()
        .uri("/api/post/all")
        .header(header::AUTHORIZATION, "Bearer forged")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_without_prefix_is_rejected() {
    let request = Request::builder()
        .uri("/api/post/all")
        .header(header::AUTHORIZATION, VALID_TOKEN)
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_signin_is_public() {
    let request = post_json(
        "/api/auth/signin",
        json!({"username": "alice", "password": "abc123"}),
        false,
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "message": "Bearer mock-token"}));
}

#[tokio::test]
async fn test_signin_bad_credentials() {
    let request = post_json(
        "/api/auth/signin",
        json!({"username": "alice", "password": "nope-nope"}),
        false,
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_signup_success() {
    let request = post_json("/api/auth/signup", signup_body("abc123", "abc123"), false);
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User registered successfully!");
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    let request = post_json("/api/auth/signup", signup_body("abc123", "abc124"), false);
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Password do not match"));
}

#[tokio::test]
async fn test_signup_duplicate_user() {
    let mut payload = signup_body("abc123", "abc123");
    payload["username"] = json!("taken");
    let (status, body) = send(post_json("/api/auth/signup", payload, false)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"]["message"],
        "The user taken already exist. Please check credentials"
    );
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_current_user_profile_hides_credentials() {
    let (status, body) = send(get("/api/user/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["firstname"], "Alice");
    assert_eq!(body["lastname"], "Smith");
    assert!(body.get("email").is_none());
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_unknown_user_profile() {
    let (status, body) = send(get("/api/user/77")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_update_user_returns_new_profile() {
    let request = post_json(
        "/api/user/update",
        json!({"firstname": "Alicia", "lastname": "Jones", "bio": "hi"}),
        true,
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["firstname"], "Alicia");
    assert_eq!(body["bio"], "hi");
}

// =============================================================================
// Posts
// =============================================================================

#[tokio::test]
async fn test_all_posts_as_dtos() {
    let (status, body) = send(get("/api/post/all")).await;

    assert_eq!(status, StatusCode::OK);
    let posts = body.as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0]["id"], 2);
    assert_eq!(posts[0]["username"], "alice");
    assert_eq!(posts[0]["usersLiked"], json!(["bob"]));
}

#[tokio::test]
async fn test_create_post_returns_empty_post() {
    let request = post_json(
        "/api/post/create",
        json!({"title": "Sunset", "caption": "Golden hour", "location": "Lisbon"}),
        true,
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likes"], 0);
    assert_eq!(body["usersLiked"], json!([]));
    assert!(body["title"].is_null());
}

#[tokio::test]
async fn test_like_post_uses_path_username() {
    let request = post_json("/api/post/1/bob/like", Value::Null, true);
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["likes"], 2);
    assert_eq!(body["usersLiked"], json!(["bob"]));
}

#[tokio::test]
async fn test_delete_foreign_post() {
    let request = post_json("/api/post/5/delete", Value::Null, true);
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_own_post() {
    let request = post_json("/api/post/1/delete", Value::Null, true);
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Post was deleted");
}

// =============================================================================
// Comments
// =============================================================================

#[tokio::test]
async fn test_create_comment() {
    let request = post_json("/api/comment/1/create", json!({"message": "Nice"}), true);
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Nice");
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn test_comment_requires_message() {
    let request = post_json("/api/comment/1/create", json!({"message": ""}), true);
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comments_for_missing_post() {
    let (status, body) = send(get("/api/comment/9/all")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Post not found");
}

#[tokio::test]
async fn test_delete_comment_always_succeeds() {
    let request = post_json("/api/comment/404/delete", Value::Null, true);
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Comment was deleted");
}

// =============================================================================
// Images
// =============================================================================

#[tokio::test]
async fn test_profile_image_absent_is_null() {
    let (status, body) = send(get("/api/image/profile_image")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_missing_post_image() {
    let (status, body) = send(get("/api/image/3/image")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "IMAGE_NOT_FOUND");
}

#[tokio::test]
async fn test_post_image_bytes_are_base64() {
    let (status, body) = send(get("/api/image/7/image")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imageBytes"], "AQID");
    assert_eq!(body["postId"], 7);
}

#[tokio::test]
async fn test_upload_profile_image() {
    let boundary = "X-BOUNDARY";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"me.png\"\r\nContent-Type: image/png\r\n\r\nPNGDATA\r\n--{b}--\r\n",
        b = boundary
    );
    let request = Request::builder()
        .method("POST")
        .uri("/api/image/upload")
        .header(header::AUTHORIZATION, format!("Bearer {}", VALID_TOKEN))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Image Uploaded Successfully");
}
