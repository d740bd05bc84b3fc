//! Shared constants used across the application

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Tutor replies come from a local LLM and can take a while.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Options the stock backend offers; config.toml may replace them.
pub const BUILTIN_LANGUAGES: &[&str] = &["Python", "Java", "C++", "Go", "C"];

pub const BUILTIN_ORCHESTRATIONS: &[&str] = &["single", "multi-agent"];

/// `(id, label)` pairs.
pub const BUILTIN_MODES: &[(&str, &str)] = &[
    ("adaptive", "Adaptive (Adjusts to user's needs)"),
    ("debug", "Debug (Fix code issues)"),
    ("fundamentals", "Fundamentals (Learn the basics)"),
    ("examples", "Examples (See sample implementations)"),
    ("exercises", "Exercises (Practice your skills)"),
    ("feedback", "Feedback (Review your code)"),
];

pub const LOADING_TEXT: &str = "Loading...";

pub const EMPTY_CONVERSATIONS_TEXT: &str = "No previous conversations";

/// Chat title before any conversation is active.
pub const DEFAULT_CHAT_TITLE: &str = "Tutor";

pub fn chat_title_for(language: &str) -> String {
    format!("{language} Tutor")
}
