//! Unit of Work - single access point for all repositories.
//!
//! Each repository call is atomic on its own; services that chain several
//! calls (like toggles, post deletion) do so without a surrounding
//! transaction.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    CommentRepository, CommentStore, ImageRepository, ImageStore, PostRepository, PostStore,
    UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn posts(&self) -> Arc<dyn PostRepository>;

    fn comments(&self) -> Arc<dyn CommentRepository>;

    fn images(&self) -> Arc<dyn ImageRepository>;
}

/// SeaORM implementation of UnitOfWork sharing one connection pool
pub struct Persistence {
    user_repo: Arc<UserStore>,
    post_repo: Arc<PostStore>,
    comment_repo: Arc<CommentStore>,
    image_repo: Arc<ImageStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            post_repo: Arc::new(PostStore::new(db.clone())),
            comment_repo: Arc::new(CommentStore::new(db.clone())),
            image_repo: Arc::new(ImageStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn posts(&self) -> Arc<dyn PostRepository> {
        self.post_repo.clone()
    }

    fn comments(&self) -> Arc<dyn CommentRepository> {
        self.comment_repo.clone()
    }

    fn images(&self) -> Arc<dyn ImageRepository> {
        self.image_repo.clone()
    }
}
