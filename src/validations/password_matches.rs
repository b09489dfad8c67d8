//! Password / confirmation equality check for signup payloads.

use std::borrow::Cow;

use validator::ValidationError;

/// A payload carrying a password and its confirmation.
pub trait PasswordConfirmation {
    fn password(&self) -> &str;
    fn confirm_password(&self) -> &str;
}

impl<T: PasswordConfirmation + ?Sized> PasswordConfirmation for &T {
    fn password(&self) -> &str {
        (**self).password()
    }

    fn confirm_password(&self) -> &str {
        (**self).confirm_password()
    }
}

/// True iff both fields are exactly equal.
pub fn is_valid<T: PasswordConfirmation + ?Sized>(payload: &T) -> bool {
    payload.password() == payload.confirm_password()
}

/// Struct-level hook for `#[validate(schema(function = "password_matches"))]`.
pub fn password_matches<T: PasswordConfirmation + ?Sized>(
    payload: &T,
) -> Result<(), ValidationError> {
    if is_valid(payload) {
        Ok(())
    } else {
        let mut error = ValidationError::new("password_matches");
        error.message = Some(Cow::Borrowed("Password do not match"));
        Err(error)
    }
}
