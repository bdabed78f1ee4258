//! Configuration loaded from `config.toml`.

mod credentials;
mod loader;
mod types;

pub use credentials::{resolve_access_key_from, SecureString, ACCESS_KEY_ENV};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, UiConfig};
