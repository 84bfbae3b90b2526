// Process configuration: everything the uploader takes from the
// environment. It is read once in `main` and passed down explicitly.

use std::fmt;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_ENDPOINT: &str = "https://fontys.cloud-builders.nl/api/v1/send-image";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Name of the variable holding the credential.
pub const API_KEY_VAR: &str = "API_KEY";
/// Optional override of the upload endpoint.
pub const ENDPOINT_VAR: &str = "SEND_IMAGE_API_URL";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Config {
    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup. An empty
    /// `API_KEY` counts as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .filter(|k| !k.is_empty())
            .ok_or(AppError::MissingApiKey)?;
        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());
        Ok(Config {
            api_key,
            endpoint,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
