//! Authentication service - Handles account registration and token issuance.
//!
//! DDD: Uses domain Password value object for hashing.
//! DDD: Uses Unit of Work for repository access.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::SecurityConfig;
use crate::domain::{NewUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;
use crate::types::{JwtTokenSuccessResponse, SignupRequest};

/// Verified against when the username is unknown so both paths do the same work.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$ZHVtbXloYXNoMTIzNDU2Nzg5MDEyMzQ1Njc4OTAxMg";

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a string
    pub sub: String,
    pub id: i64,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub iat: i64,
    pub exp: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account
    async fn register(&self, request: SignupRequest) -> AppResult<User>;

    /// Check credentials and issue a bearer token
    async fn login(&self, username: String, password: String) -> AppResult<JwtTokenSuccessResponse>;

    /// Verify a raw JWT (without prefix) and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Sign a token for `user`.
fn generate_token(user: &User, security: &SecurityConfig) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::milliseconds(security.expiration_time_ms);

    let claims = Claims {
        sub: user.id.to_string(),
        id: user.id,
        username: user.username.clone(),
        firstname: user.name.clone(),
        lastname: user.lastname.clone(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(security.secret_bytes()),
    )?;

    Ok(token)
}

fn verify_token_internal(token: &str, security: &SecurityConfig) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(security.secret_bytes()),
        &Validation::new(Algorithm::HS512),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    security: SecurityConfig,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, security: SecurityConfig) -> Self {
        Self { uow, security }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, request: SignupRequest) -> AppResult<User> {
        let users = self.uow.users();

        let username_taken = users.find_by_username(&request.username).await?.is_some();
        if username_taken || users.find_by_email(&request.email).await?.is_some() {
            tracing::error!(username = %request.username, "Error during registration");
            return Err(AppError::conflict(format!(
                "The user {} already exist. Please check credentials",
                request.username
            )));
        }

        let password_hash = Password::new(&request.password)?.into_string();

        tracing::info!(username = %request.username, "Saving User");
        users
            .create(NewUser {
                username: request.username,
                name: request.firstname,
                lastname: request.lastname,
                email: request.email,
                password_hash,
            })
            .await
    }

    async fn login(&self, username: String, password: String) -> AppResult<JwtTokenSuccessResponse> {
        let user = self.uow.users().find_by_username(&username).await?;

        let stored = Password::from_hash(
            user.as_ref()
                .map(|u| u.password_hash.as_str())
                .unwrap_or(DUMMY_HASH),
        );
        let password_valid = stored.verify(&password);

        match user {
            Some(user) if password_valid => {
                let token = generate_token(&user, &self.security)?;
                Ok(JwtTokenSuccessResponse::new(format!(
                    "{}{}",
                    self.security.token_prefix, token
                )))
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.security)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use crate::services::testing::{user, TestUnitOfWork};

    fn signup(username: &str, email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            firstname: "Alice".to_string(),
            lastname: "Smith".to_string(),
            username: username.to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
        }
    }

    fn authenticator(users: MockUserRepository) -> Authenticator<TestUnitOfWork> {
        Authenticator::new(
            Arc::new(TestUnitOfWork::new().with_users(users)),
            SecurityConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|new_user| {
                new_user.username == "alice"
                    && new_user.name == "Alice"
                    && new_user.password_hash != "abc123"
                    && Password::from_hash(new_user.password_hash.clone()).verify("abc123")
            })
            .times(1)
            .returning(|new_user| {
                let mut created = user(1, &new_user.username);
                created.password_hash = new_user.password_hash;
                Ok(created)
            });

        let created = authenticator(users)
            .register(signup("alice", "alice@example.com"))
            .await
            .unwrap();
        assert_eq!(created.username, "alice");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|name| Ok(Some(user(1, name))));
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_create().never();

        let result = authenticator(users)
            .register(signup("alice", "other@example.com"))
            .await;

        match result {
            Err(AppError::Conflict(msg)) => {
                assert_eq!(msg, "The user alice already exist. Please check credentials")
            }
            other => panic!("expected Conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(user(2, "bob"))));
        users.expect_create().never();

        let result = authenticator(users)
            .register(signup("alice", "bob@example.com"))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_login_issues_prefixed_token() {
        let hash = Password::new("abc123").unwrap().into_string();
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(move |name| {
            let mut found = user(5, name);
            found.password_hash = hash.clone();
            Ok(Some(found))
        });

        let auth = authenticator(users);
        let response = auth
            .login("alice".to_string(), "abc123".to_string())
            .await
            .unwrap();

        assert!(response.success);
        let raw = response.message.strip_prefix("Bearer ").unwrap();
        let claims = auth.verify_token(raw).unwrap();
        assert_eq!(claims.id, 5);
        assert_eq!(claims.sub, "5");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.firstname, "Alice");
        assert_eq!(claims.exp - claims.iat, 600);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let hash = Password::new("abc123").unwrap().into_string();
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(move |name| {
            let mut found = user(5, name);
            found.password_hash = hash.clone();
            Ok(Some(found))
        });

        let result = authenticator(users)
            .login("alice".to_string(), "wrong-pass".to_string())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let result = authenticator(users)
            .login("ghost".to_string(), "abc123".to_string())
            .await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_verify_rejects_foreign_secret() {
        let other = SecurityConfig::default().with_secret("another-secret-that-is-long-enough-123");
        let token = generate_token(&user(1, "alice"), &other).unwrap();

        let auth = authenticator(MockUserRepository::new());
        assert!(matches!(auth.verify_token(&token), Err(AppError::Jwt(_))));
    }

    #[test]
    fn test_verify_rejects_expired() {
        let expired = SecurityConfig::default().with_expiration_ms(-3_600_000);
        let token = generate_token(&user(1, "alice"), &expired).unwrap();

        let auth = authenticator(MockUserRepository::new());
        assert!(auth.verify_token(&token).is_err());
    }
}
