//! Cross-field request validation.

mod password_matches;

pub use password_matches::{is_valid, password_matches, PasswordConfirmation};
