//! Session log file
//!
//! The terminal belongs to the UI, so every run writes `debug-<time>.log`
//! next to the binary's working directory in debug builds and under the
//! admin cache directory in release builds.

use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        admin_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Level from `RUST_LOG` ("warn", "trace", ...); debug when unset or unparsable
fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Debug)
}

/// Start writing the session log; returns where it goes
pub fn init() -> io::Result<PathBuf> {
    let log_file = log_file_path();

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c)
        // reqwest and hyper are chatty at debug
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .build();

    let file = File::create(&log_file)?;
    WriteLogger::init(level_from_env(), config, file).map_err(io::Error::other)?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names_parse_case_insensitively() {
        assert_eq!("WARN".parse::<LevelFilter>().ok(), Some(LevelFilter::Warn));
        assert!("chatty".parse::<LevelFilter>().is_err());
    }
}
