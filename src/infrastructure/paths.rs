//! Path handling for the Zellij plugin sandbox.
//!
//! In the sandbox the host filesystem is mounted under `/host`, which
//! normally resolves to the directory Zellij was started from (usually the
//! user's home directory).

use std::path::PathBuf;

/// Default location of the persisted record and the trace file.
const DEFAULT_DATA_DIR: &str = "/host/.local/share/zellij/joke-sorter";

/// Returns the data directory, honouring an optional configured override.
///
/// # Examples
///
/// ```
/// use joke_sorter::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir(None).to_str(), Some("/host/.local/share/zellij/joke-sorter"));
/// assert_eq!(get_data_dir(Some("~/jokes")).to_str(), Some("/host/jokes"));
/// ```
#[must_use]
pub fn get_data_dir(configured: Option<&str>) -> PathBuf {
    configured
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), |dir| PathBuf::from(expand_tilde(dir)))
}

/// Expands `~` to the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use joke_sorter::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/jokes"), "/host/jokes");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data"), "/data");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
