//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::{Config, SecurityConfig};
use crate::facade::{CommentFacade, PostFacade, UserFacade};
use crate::infra::Database;
use crate::services::{
    AuthService, CommentService, ImageService, PostService, ServiceContainer, Services,
    UserService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub post_service: Arc<dyn PostService>,
    pub comment_service: Arc<dyn CommentService>,
    pub image_service: Arc<dyn ImageService>,
    /// Database connection
    pub database: Arc<Database>,
    /// Token settings used by the auth middleware
    pub security: SecurityConfig,
    pub user_facade: UserFacade,
    pub post_facade: PostFacade,
    pub comment_facade: CommentFacade,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(
            database.get_connection(),
            config.security.clone(),
        );

        Self::new(&container, database, config.security.clone())
    }

    /// Create application state from any service container.
    pub fn new(
        services: &dyn ServiceContainer,
        database: Arc<Database>,
        security: SecurityConfig,
    ) -> Self {
        Self {
            auth_service: services.auth(),
            user_service: services.users(),
            post_service: services.posts(),
            comment_service: services.comments(),
            image_service: services.images(),
            database,
            security,
            user_facade: UserFacade,
            post_facade: PostFacade,
            comment_facade: CommentFacade,
        }
    }
}
