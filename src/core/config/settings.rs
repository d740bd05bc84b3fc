use crate::core::config::data::Config;

/// Keys accepted by `tutorchat set` / `tutorchat unset`.
pub const SETTABLE_KEYS: &[&str] = &[
    "server-url",
    "default-language",
    "default-orchestration",
    "default-mode",
    "request-timeout",
];

impl Config {
    pub fn set_key(&mut self, key: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        if value.is_empty() {
            return Err(format!("A value is required for {key}"));
        }
        match key {
            "server-url" => self.server_url = Some(value.to_string()),
            "default-language" => self.default_language = Some(value.to_string()),
            "default-orchestration" => self.default_orchestration = Some(value.to_string()),
            "default-mode" => self.default_mode = Some(value.to_string()),
            "request-timeout" => {
                let secs = value
                    .trim_end_matches('s')
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| {
                        format!("request-timeout must be a positive number of seconds, got '{value}'")
                    })?;
                self.request_timeout_secs = Some(secs);
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    pub fn unset_key(&mut self, key: &str) -> Result<(), String> {
        match key {
            "server-url" => self.server_url = None,
            "default-language" => self.default_language = None,
            "default-orchestration" => self.default_orchestration = None,
            "default-mode" => self.default_mode = None,
            "request-timeout" => self.request_timeout_secs = None,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: {key} (expected one of: {})",
        SETTABLE_KEYS.join(", ")
    )
}
