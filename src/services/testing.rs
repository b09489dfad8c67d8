//! Fixtures shared by the service unit tests.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::domain::{Comment, ImageModel, Post, PostOwner, User};
use crate::infra::{
    CommentRepository, ImageRepository, MockCommentRepository, MockImageRepository,
    MockPostRepository, MockUserRepository, PostRepository, UnitOfWork, UserRepository,
};

/// Unit of Work over mocked repositories. Unset repositories reject every call.
pub(crate) struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    posts: Arc<MockPostRepository>,
    comments: Arc<MockCommentRepository>,
    images: Arc<MockImageRepository>,
}

impl TestUnitOfWork {
    pub(crate) fn new() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            posts: Arc::new(MockPostRepository::new()),
            comments: Arc::new(MockCommentRepository::new()),
            images: Arc::new(MockImageRepository::new()),
        }
    }

    pub(crate) fn with_users(mut self, users: MockUserRepository) -> Self {
        self.users = Arc::new(users);
        self
    }

    pub(crate) fn with_posts(mut self, posts: MockPostRepository) -> Self {
        self.posts = Arc::new(posts);
        self
    }

    pub(crate) fn with_comments(mut self, comments: MockCommentRepository) -> Self {
        self.comments = Arc::new(comments);
        self
    }

    pub(crate) fn with_images(mut self, images: MockImageRepository) -> Self {
        self.images = Arc::new(images);
        self
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn posts(&self) -> Arc<dyn PostRepository> {
        self.posts.clone()
    }

    fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comments.clone()
    }

    fn images(&self) -> Arc<dyn ImageRepository> {
        self.images.clone()
    }
}

pub(crate) fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        name: "Alice".to_string(),
        lastname: "Smith".to_string(),
        email: format!("{}@example.com", username),
        bio: None,
        password_hash: "hashed".to_string(),
        created_date: Utc::now(),
    }
}

/// Post owned by `owner`, created `day` days into 2024
pub(crate) fn post(id: i64, owner: &User, day: u32) -> Post {
    Post {
        id,
        owner: Some(PostOwner {
            id: owner.id,
            username: owner.username.clone(),
        }),
        title: Some(format!("post {}", id)),
        caption: None,
        location: None,
        likes: 0,
        liked_users: BTreeSet::new(),
        created_date: Utc
            .with_ymd_and_hms(2024, 1, day, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    }
}

pub(crate) fn comment(id: i64, post_id: i64, author: &User) -> Comment {
    Comment {
        id,
        post_id,
        user_id: author.id,
        username: author.username.clone(),
        message: format!("comment {}", id),
        created_date: Utc::now(),
    }
}

pub(crate) fn image(id: i64, user_id: Option<i64>, post_id: Option<i64>) -> ImageModel {
    ImageModel {
        id,
        name: "photo.png".to_string(),
        image_bytes: vec![1, 2, 3],
        user_id,
        post_id,
    }
}
