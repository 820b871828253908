use crate::constants::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials for the Rossum API
pub struct Credentials {
    /// Username of the Rossum account
    pub username: String,
    /// Password of the Rossum account, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every resource path is joined onto
    pub base_url: String,
    /// Timeout in seconds for a single request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Rossum API client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Number of items requested per page on list endpoints
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present, then reads `ROSSUM_USERNAME`,
    /// `ROSSUM_PASSWORD`, `ROSSUM_BASE_URL`, `ROSSUM_TIMEOUT` and
    /// `ROSSUM_PAGE_SIZE`. Missing values fall back to defaults.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("ROSSUM_USERNAME", String::new());
        let password = get_env_or_default("ROSSUM_PASSWORD", String::new());

        if username.is_empty() {
            error!("ROSSUM_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("ROSSUM_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("ROSSUM_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("ROSSUM_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            page_size: get_env_or_default("ROSSUM_PAGE_SIZE", DEFAULT_PAGE_SIZE),
        }
    }

    /// Creates a configuration with the given credentials and default settings
    ///
    /// Does not touch the environment.
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            rest_api: RestApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replaces the base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}
