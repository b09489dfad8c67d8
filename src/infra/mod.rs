//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - SeaORM repositories
//! - Unit of Work for repository access

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CommentRepository, CommentStore, ImageRepository, ImageStore, PostRepository, PostStore,
    UserRepository, UserStore,
};
pub use unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCommentRepository, MockImageRepository, MockPostRepository, MockUserRepository,
};
