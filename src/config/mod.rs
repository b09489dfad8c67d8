//! Application configuration module
//!
//! Handles environment variables, JWT settings and application-wide constants.

mod constants;
mod security;
mod settings;

pub use constants::*;
pub use security::SecurityConfig;
pub use settings::Config;
