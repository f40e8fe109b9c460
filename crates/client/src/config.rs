//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `TRADEPOST_API_BASE_URL` - Base URL of the marketplace API
//!   (e.g., `https://api.tradepost.example`)
//!
//! ## Optional
//! - `TRADEPOST_PLACEHOLDER_IMAGE_URL` - Image URL used when a listing has
//!   no photo or its photo cannot be fetched
//!   (default: `https://placehold.co/400`)
//! - `TRADEPOST_PAGE_SIZE` - Page size for listing fetches (default: 99)

use thiserror::Error;
use url::Url;

/// Default placeholder shown for listings without a resolvable photo.
const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/400";

/// Default page size for listing fetches.
const DEFAULT_PAGE_SIZE: u32 = 99;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Tradepost client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the marketplace API.
    pub api_base_url: Url,
    /// Fallback image URL for missing/unfetchable photos.
    pub placeholder_image_url: String,
    /// Page size used for paged listing fetches.
    pub page_size: u32,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_required_env("TRADEPOST_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TRADEPOST_API_BASE_URL".to_string(), e.to_string())
            })?;
        let placeholder_image_url = get_env_or_default(
            "TRADEPOST_PLACEHOLDER_IMAGE_URL",
            DEFAULT_PLACEHOLDER_IMAGE_URL,
        );
        let page_size = get_env_or_default("TRADEPOST_PAGE_SIZE", "99")
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("TRADEPOST_PAGE_SIZE".to_string(), e.to_string())
            })?;

        Ok(Self {
            api_base_url,
            placeholder_image_url,
            page_size,
        })
    }

    /// Build a configuration directly from a base URL, with defaults for
    /// everything else. Intended for tests and embedding callers that do
    /// not use environment configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `base_url` is not a valid URL.
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: base_url.parse::<Url>().map_err(|e| {
                ConfigError::InvalidEnvVar("base_url".to_string(), e.to_string())
            })?,
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_for_base_url_defaults() {
        let config = ClientConfig::for_base_url("http://localhost:8080").unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.placeholder_image_url, DEFAULT_PLACEHOLDER_IMAGE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_for_base_url_rejects_garbage() {
        assert!(ClientConfig::for_base_url("not a url").is_err());
    }
}
