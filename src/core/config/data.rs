use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A tutoring mode: the identifier sent to the backend and a human label.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ModeOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the tutoring backend (e.g., "http://localhost:5000")
    pub server_url: Option<String>,
    /// Language preselected on the configuration screen
    pub default_language: Option<String>,
    /// Orchestration type preselected on the configuration screen
    pub default_orchestration: Option<String>,
    /// Mode id preselected on the configuration screen
    pub default_mode: Option<String>,
    pub request_timeout_secs: Option<u64>,
    /// Replaces the built-in language list when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    /// Replaces the built-in orchestration list when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub orchestrations: Vec<String>,
    /// Replaces the built-in mode list when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modes: Vec<ModeOption>,
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
