use std::env;

use crate::error::{AppError, AppResult};

pub const DEFAULT_API_BASE: &str = "https://api.devrev.ai";

/// Fixed page size for the list call; there is no pagination beyond it.
pub const LIST_LIMIT: u32 = 10;

const API_BASE_ENV: &str = "WORKDECK_API_BASE";

/// Runtime settings. Deliberately small: the only secret in this program is
/// the access token, which lives in session state and is never stored, so
/// there is no config file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// A CLI flag wins over `WORKDECK_API_BASE`; both fall back to the
    /// public API address.
    pub fn load(base_url_override: Option<String>) -> AppResult<Self> {
        let api_base_url = base_url_override
            .or_else(|| env::var(API_BASE_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self::from_base_url(api_base_url)
    }

    fn from_base_url(api_base_url: String) -> AppResult<Self> {
        let trimmed = api_base_url.trim();
        if trimmed.is_empty() {
            return Err(AppError::Configuration(
                "API base URL must not be empty".to_string(),
            ));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(AppError::Configuration(format!(
                "API base URL must start with http:// or https://, got '{trimmed}'"
            )));
        }

        Ok(Self {
            api_base_url: trimmed.to_string(),
        })
    }
}
