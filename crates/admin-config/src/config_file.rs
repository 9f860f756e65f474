//! Locating `.listing-admin.toml`

use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = ".listing-admin.toml";

/// Places searched for the config file, in order: the working directory,
/// then the home directory
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE_NAME));
    }
    candidates
}

/// Path and content of the first readable config file
pub fn read_config_file() -> Option<(PathBuf, String)> {
    config_candidates().into_iter().find_map(|path| {
        let content = fs::read_to_string(&path).ok()?;
        Some((path, content))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_directory_is_searched_first() {
        let candidates = config_candidates();
        assert_eq!(candidates[0], PathBuf::from(CONFIG_FILE_NAME));
        assert!(candidates.iter().all(|p| p.ends_with(CONFIG_FILE_NAME)));
    }
}
