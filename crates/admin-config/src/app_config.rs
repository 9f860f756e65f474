//! Application configuration
//!
//! Configuration loaded from `.listing-admin.toml`.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "LISTING_ADMIN_API_URL";

/// Application configuration loaded from .listing-admin.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend (without trailing slash)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Number of entities requested per list page (`limit`)
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Confirmation text for deletions, `{name}` is replaced by the entity name
    #[serde(default = "default_delete_confirm_message")]
    pub delete_confirm_message: String,

    /// Confirmation text for marking an enquiry as seen
    #[serde(default = "default_mark_seen_confirm_message")]
    pub mark_seen_confirm_message: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_delete_confirm_message() -> String {
    "Are you sure you want to delete {name}? This cannot be undone.".to_string()
}

fn default_mark_seen_confirm_message() -> String {
    "Mark the enquiry from {name} as seen?".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            delete_confirm_message: default_delete_confirm_message(),
            mark_seen_confirm_message: default_mark_seen_confirm_message(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults.
    ///
    /// `LISTING_ADMIN_API_URL` takes precedence over the file value.
    pub fn load() -> Self {
        let mut config = Self::from_file().unwrap_or_default();

        if let Ok(url) = env::var(API_URL_ENV) {
            log::info!("Using API base URL from {}", API_URL_ENV);
            config.api_base_url = url;
        }

        config.normalized()
    }

    fn from_file() -> Option<Self> {
        let (path, content) = crate::read_config_file()?;
        match toml::from_str(&content) {
            Ok(config) => {
                log::info!("Loaded app config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Strip a trailing slash from the base URL and keep the page size positive
    pub fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        if self.page_size == 0 {
            log::warn!("page_size must be positive, falling back to default");
            self.page_size = default_page_size();
        }
        self
    }

    /// Render the delete confirmation text for an entity
    pub fn delete_confirmation(&self, name: &str) -> String {
        self.delete_confirm_message.replace("{name}", name)
    }

    /// Render the mark-seen confirmation text for an enquiry
    pub fn mark_seen_confirmation(&self, name: &str) -> String {
        self.mark_seen_confirm_message.replace("{name}", name)
    }
}
