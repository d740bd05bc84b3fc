use std::error::Error;

use chrono::NaiveDateTime;

use crate::api::{ConversationSummary, TutorBackend};
use crate::core::constants::EMPTY_CONVERSATIONS_TEXT;

/// Stored conversations as the server reports them, newest first.
pub async fn list_conversations(backend: &dyn TutorBackend) -> Result<(), Box<dyn Error>> {
    let conversations = backend.conversations().await?;

    if conversations.is_empty() {
        println!("{EMPTY_CONVERSATIONS_TEXT}");
        return Ok(());
    }

    println!("Conversations:\n");
    for summary in &conversations {
        println!("  {}", format_summary_row(summary));
    }
    println!();
    println!("Open one with: tutorchat show <ID>");
    Ok(())
}

pub fn format_summary_row(summary: &ConversationSummary) -> String {
    let mut row = format!("{}  {}", summary.id, summary.label());
    if !summary.config.mode.is_empty() {
        row.push_str(&format!(" ({})", summary.config.mode));
    }
    if let Some(count) = summary.message_count {
        let noun = if count == 1 { "message" } else { "messages" };
        row.push_str(&format!("  {count} {noun}"));
    }
    if let Some(updated) = summary
        .update_time
        .as_deref()
        .filter(|time| !time.is_empty())
    {
        row.push_str(&format!("  updated {}", format_update_time(updated)));
    }
    row
}

/// Shorten the server's ISO-8601 timestamps; anything unparseable is shown
/// as sent.
pub fn format_update_time(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::create_test_summary;

    #[test]
    fn row_includes_label_mode_count_and_time() {
        let mut summary = create_test_summary("20251019_1403", "Python", "single");
        summary.message_count = Some(4);
        summary.update_time = Some("2025-10-19T14:05:31.123456".to_string());
        assert_eq!(
            format_summary_row(&summary),
            "20251019_1403  Python - single (adaptive)  4 messages  updated 2025-10-19 14:05"
        );
    }

    #[test]
    fn row_omits_missing_details() {
        let mut summary = create_test_summary("a", "Go", "multi-agent");
        summary.config.mode = String::new();
        summary.message_count = Some(1);
        summary.update_time = Some(String::new());
        assert_eq!(format_summary_row(&summary), "a  Go - multi-agent  1 message");
    }

    #[test]
    fn unparseable_times_are_kept() {
        assert_eq!(format_update_time("yesterday"), "yesterday");
        assert_eq!(format_update_time("2025-10-19T09:00:00"), "2025-10-19 09:00");
    }
}
