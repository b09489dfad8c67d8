//! JWT settings handed to the auth service and middleware at startup.

use super::constants::{
    AUTH_HEADER, BEARER_TOKEN_PREFIX, DEFAULT_JWT_EXPIRATION_MS, DEFAULT_JWT_SECRET,
    JSON_CONTENT_TYPE, SIGN_UP_URLS,
};

/// Token issuance and verification settings.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Path pattern exempt from authentication (`/**` suffix = subtree)
    pub sign_up_urls: String,
    secret: String,
    pub token_prefix: String,
    pub header_string: String,
    pub content_type: String,
    pub expiration_time_ms: i64,
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("sign_up_urls", &self.sign_up_urls)
            .field("secret", &"[REDACTED]")
            .field("token_prefix", &self.token_prefix)
            .field("header_string", &self.header_string)
            .field("content_type", &self.content_type)
            .field("expiration_time_ms", &self.expiration_time_ms)
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            sign_up_urls: SIGN_UP_URLS.to_string(),
            secret: DEFAULT_JWT_SECRET.to_string(),
            token_prefix: BEARER_TOKEN_PREFIX.to_string(),
            header_string: AUTH_HEADER.to_string(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            expiration_time_ms: DEFAULT_JWT_EXPIRATION_MS,
        }
    }
}

impl SecurityConfig {
    /// Replace the signing secret.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }

    /// Replace the token lifetime.
    pub fn with_expiration_ms(mut self, expiration_time_ms: i64) -> Self {
        self.expiration_time_ms = expiration_time_ms;
        self
    }

    /// Secret bytes for token signing/verification.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// Whether `path` may be served without a token.
    pub fn permits(&self, path: &str) -> bool {
        match self.sign_up_urls.strip_suffix("/**") {
            Some(prefix) => {
                path == prefix
                    || path
                        .strip_prefix(prefix)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            None => path == self.sign_up_urls,
        }
    }

    /// Strip the configured prefix from a raw header value.
    pub fn extract_token<'a>(&self, header_value: &'a str) -> Option<&'a str> {
        header_value
            .strip_prefix(self.token_prefix.as_str())
            .filter(|token| !token.is_empty())
    }
}
