//! Snapgram API - backend for an image sharing service
//!
//! Users sign up, sign in with JWT bearer tokens, publish posts, like and
//! comment on them, and attach images to posts or their profile.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration, security settings and constants
//! - **domain**: Core entities, DTOs and value objects
//! - **facade**: Entity to DTO projections
//! - **validations**: Cross-field request checks
//! - **services**: Application use cases and business logic
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Request and response payloads
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod facade;
pub mod infra;
pub mod services;
pub mod types;
pub mod validations;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, SecurityConfig};
pub use domain::{Password, Principal, User};
pub use errors::{AppError, AppResult};
