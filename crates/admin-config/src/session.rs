//! Session context
//!
//! Provides the bearer token and signed-in user to the REST client.
//! The token is never looked up ad hoc; it is injected through
//! [`SessionContext`] so tests can substitute a [`StaticSession`].
//!
//! # Token resolution
//!
//! 1. `LISTING_ADMIN_TOKEN` env var
//! 2. `token` in `~/.config/listing-admin/session.toml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

/// Environment variable that overrides the stored token
pub const TOKEN_ENV: &str = "LISTING_ADMIN_TOKEN";

/// The signed-in admin user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Backend user type (e.g. "admin", "super_admin")
    #[serde(default)]
    pub user_type: String,
}

/// Capabilities the application needs from the session
pub trait SessionContext: Send + Sync + std::fmt::Debug {
    /// Bearer token for API requests, if signed in
    fn token(&self) -> Option<String>;

    /// The signed-in user, if known
    fn user(&self) -> Option<SessionUser>;
}

/// On-disk session file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    token: Option<String>,
    user: Option<SessionUser>,
}

/// Session backed by `session.toml` with an env override for the token
#[derive(Debug, Clone, Default)]
pub struct FileSession {
    token: Option<String>,
    user: Option<SessionUser>,
}

impl FileSession {
    /// Load the session, falling back to an empty session
    pub fn load() -> Self {
        let mut session = match paths::session_path() {
            Ok(path) if path.exists() => match Self::load_from_path(&path) {
                Ok(session) => {
                    log::info!("Loaded session from {:?}", path);
                    session
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable session file: {:#}", e);
                    Self::default()
                }
            },
            _ => {
                log::info!("No session file found");
                Self::default()
            }
        };

        if let Ok(token) = std::env::var(TOKEN_ENV) {
            log::debug!("Using token from {}", TOKEN_ENV);
            session.token = Some(token);
        }

        session
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Parse a session from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let file: SessionFile = toml::from_str(content)?;
        Ok(Self {
            token: file.token.filter(|t| !t.trim().is_empty()),
            user: file.user,
        })
    }
}

impl SessionContext for FileSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn user(&self) -> Option<SessionUser> {
        self.user.clone()
    }
}

/// Fixed session, used for injection in tests
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl StaticSession {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl SessionContext for StaticSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn user(&self) -> Option<SessionUser> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_session() {
        let session = FileSession::parse(
            r#"
            token = "abc123"

            [user]
            name = "Ada"
            email = "ada@example.com"
            user_type = "admin"
            "#,
        )
        .unwrap();

        assert_eq!(session.token(), Some("abc123".to_string()));
        let user = session.user().unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.user_type, "admin");
    }

    #[test]
    fn test_blank_token_is_treated_as_signed_out() {
        let session = FileSession::parse("token = \"  \"").unwrap();
        assert_eq!(session.token(), None);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_static_session() {
        assert_eq!(
            StaticSession::with_token("t").token(),
            Some("t".to_string())
        );
        assert_eq!(StaticSession::anonymous().token(), None);
    }
}
