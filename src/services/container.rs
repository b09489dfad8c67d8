//! Service Container - Centralized service access.
//!
//! SOLID (DIP): Handlers depend on service traits, not implementations.

use std::sync::Arc;

use super::{AuthService, CommentService, ImageService, PostService, UserService};
use crate::config::SecurityConfig;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn users(&self) -> Arc<dyn UserService>;

    fn posts(&self) -> Arc<dyn PostService>;

    fn comments(&self) -> Arc<dyn CommentService>;

    fn images(&self) -> Arc<dyn ImageService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    post_service: Arc<dyn PostService>,
    comment_service: Arc<dyn CommentService>,
    image_service: Arc<dyn ImageService>,
}

impl Services {
    /// Assemble a container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        post_service: Arc<dyn PostService>,
        comment_service: Arc<dyn CommentService>,
        image_service: Arc<dyn ImageService>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            post_service,
            comment_service,
            image_service,
        }
    }

    /// Create service container from database connection and security settings
    pub fn from_connection(db: sea_orm::DatabaseConnection, security: SecurityConfig) -> Self {
        use super::{Authenticator, CommentManager, ImageManager, PostManager, UserManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), security)),
            user_service: Arc::new(UserManager::new(uow.clone())),
            post_service: Arc::new(PostManager::new(uow.clone())),
            comment_service: Arc::new(CommentManager::new(uow.clone())),
            image_service: Arc::new(ImageManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn posts(&self) -> Arc<dyn PostService> {
        self.post_service.clone()
    }

    fn comments(&self) -> Arc<dyn CommentService> {
        self.comment_service.clone()
    }

    fn images(&self) -> Arc<dyn ImageService> {
        self.image_service.clone()
    }
}
