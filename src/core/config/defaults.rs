use std::time::Duration;

use crate::core::config::data::{Config, ModeOption};
use crate::core::constants::{
    BUILTIN_LANGUAGES, BUILTIN_MODES, BUILTIN_ORCHESTRATIONS, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVER_URL,
};
use crate::utils::url::normalize_base_url;

impl Config {
    /// Resolve the backend URL: explicit override, then config, then the
    /// stock local address.
    pub fn server_url(&self, override_url: Option<&str>) -> String {
        let raw = override_url
            .or(self.server_url.as_deref())
            .unwrap_or(DEFAULT_SERVER_URL);
        normalize_base_url(raw)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    pub fn language_options(&self) -> Vec<String> {
        if self.languages.is_empty() {
            BUILTIN_LANGUAGES.iter().map(|s| s.to_string()).collect()
        } else {
            self.languages.clone()
        }
    }

    pub fn orchestration_options(&self) -> Vec<String> {
        if self.orchestrations.is_empty() {
            BUILTIN_ORCHESTRATIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.orchestrations.clone()
        }
    }

    pub fn mode_options(&self) -> Vec<ModeOption> {
        if self.modes.is_empty() {
            BUILTIN_MODES
                .iter()
                .map(|(id, label)| ModeOption {
                    id: id.to_string(),
                    label: label.to_string(),
                })
                .collect()
        } else {
            self.modes.clone()
        }
    }
}
