//! Everything the console reads from the user's machine before it starts:
//! `.listing-admin.toml` ([`AppConfig`]), the per-user directories, and the
//! session ([`SessionContext`]) that supplies the bearer token.

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod session;

pub use app_config::AppConfig;
pub use config_file::{read_config_file, CONFIG_FILE_NAME};
pub use paths::{cache_dir, config_dir, session_path};
pub use session::{FileSession, SessionContext, SessionUser, StaticSession};
