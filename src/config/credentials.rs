//! Access key resolution.
//!
//! The key comes from `api.access_key` first and the
//! `UNSPLASH_ACCESS_KEY` environment variable second. It is wrapped in
//! [`SecureString`] so it never ends up in logs.

use super::types::ApiConfig;

/// Environment variable consulted when the config has no access key.
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ApiConfig {
    /// Resolve the access key from config, then the environment.
    ///
    /// Called once when the client is built.
    pub fn resolve_access_key(&self) -> Option<SecureString> {
        resolve_access_key_from(
            self.access_key.as_deref(),
            std::env::var(ACCESS_KEY_ENV).ok().as_deref(),
        )
    }
}

/// Pick the first non-blank candidate: configured value, then environment.
pub fn resolve_access_key_from(
    configured: Option<&str>,
    environment: Option<&str>,
) -> Option<SecureString> {
    [configured, environment]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(|key| SecureString::new(key.to_string()))
}
