use crate::core::config::data::Config;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.server_url {
            Some(url) => println!("  server-url: {url}"),
            None => println!("  server-url: (unset, using {})", self.server_url(None)),
        }
        print_optional("default-language", self.default_language.as_deref());
        print_optional("default-orchestration", self.default_orchestration.as_deref());
        print_optional("default-mode", self.default_mode.as_deref());
        match self.request_timeout_secs {
            Some(secs) => println!("  request-timeout: {secs}s"),
            None => println!(
                "  request-timeout: (unset, using {}s)",
                self.request_timeout().as_secs()
            ),
        }
        println!("  languages: {}", self.language_options().join(", "));
        println!("  orchestrations: {}", self.orchestration_options().join(", "));
        println!("  modes:");
        for mode in self.mode_options() {
            println!("    {}: {}", mode.id, mode.label);
        }
    }
}

fn print_optional(key: &str, value: Option<&str>) {
    match value {
        Some(value) => println!("  {key}: {value}"),
        None => println!("  {key}: (unset)"),
    }
}
