//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_PATH` - Path of the JSON storage document
//!   (default: `.go-marketplace/storage.json`)
//! - `CART_STORAGE_KEY` - Namespaced key the cart is stored under
//!   (default: `@GoMarketplace:products`)

use std::path::PathBuf;

use thiserror::Error;

/// Default storage document location, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = ".go-marketplace/storage.json";

/// The namespaced key the serialized cart lives under.
pub const DEFAULT_STORAGE_KEY: &str = "@GoMarketplace:products";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set but empty.
    #[error("Environment variable {0} is set but empty")]
    EmptyEnvVar(String),
}

/// Cart store configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the JSON storage document.
    pub storage_path: PathBuf,
    /// Key the serialized cart is stored under.
    pub storage_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Unset variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an empty value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_path =
            PathBuf::from(get_env_or_default("CART_STORAGE_PATH", DEFAULT_STORAGE_PATH)?);
        let storage_key = get_env_or_default("CART_STORAGE_KEY", DEFAULT_STORAGE_KEY)?;

        Ok(Self {
            storage_path,
            storage_key,
        })
    }
}

/// Get an environment variable with a default value, rejecting empty values.
fn get_env_or_default(key: &str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.is_empty() => Err(ConfigError::EmptyEnvVar(key.to_string())),
        Ok(value) => Ok(value),
        Err(_) => Ok(default.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.storage_path, PathBuf::from(DEFAULT_STORAGE_PATH));
        assert_eq!(config.storage_key, "@GoMarketplace:products");
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_overrides_and_empty_rejection() {
        // set_var/remove_var are unsafe in edition 2024; this test owns
        // these variables exclusively.
        unsafe {
            std::env::set_var("CART_STORAGE_PATH", "/tmp/cart-test/storage.json");
            std::env::set_var("CART_STORAGE_KEY", "@Test:products");
        }

        let config = CartConfig::from_env().unwrap();
        assert_eq!(
            config.storage_path,
            PathBuf::from("/tmp/cart-test/storage.json")
        );
        assert_eq!(config.storage_key, "@Test:products");

        unsafe {
            std::env::set_var("CART_STORAGE_KEY", "");
        }
        assert!(CartConfig::from_env().is_err());

        unsafe {
            std::env::remove_var("CART_STORAGE_PATH");
            std::env::remove_var("CART_STORAGE_KEY");
        }
    }
}
