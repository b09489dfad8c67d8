//! User service - Handles profile lookups and edits.
//!
//! DDD: Orchestrates domain operations via Unit of Work.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Principal, User, UserDto};
use crate::errors::{AppError, AppResult};
use crate::infra::{UnitOfWork, UserRepository};

/// Resolve the account behind `principal` by username.
pub(crate) async fn user_by_principal(
    users: &dyn UserRepository,
    principal: &dyn Principal,
) -> AppResult<User> {
    let username = principal.username();
    users
        .find_by_username(username)
        .await?
        .ok_or_else(|| AppError::user_not_found(username))
}

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Account of the authenticated caller
    async fn get_current_user(&self, principal: &dyn Principal) -> AppResult<User>;

    /// Any account by id
    async fn get_user_by_id(&self, user_id: i64) -> AppResult<User>;

    /// Update first name, last name and bio of the caller
    async fn update_user(&self, data: UserDto, principal: &dyn Principal) -> AppResult<User>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_current_user(&self, principal: &dyn Principal) -> AppResult<User> {
        user_by_principal(self.uow.users().as_ref(), principal).await
    }

    async fn get_user_by_id(&self, user_id: i64) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::user_not_found(user_id.to_string()))
    }

    async fn update_user(&self, data: UserDto, principal: &dyn Principal) -> AppResult<User> {
        let users = self.uow.users();
        let mut user = user_by_principal(users.as_ref(), principal).await?;
        user.apply_profile(data);

        tracing::info!(user_id = user.id, "Updating profile");
        users.save(user).await
    }
}
