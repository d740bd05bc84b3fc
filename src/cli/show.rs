use std::error::Error;

use tracing::warn;

use crate::api::{ConversationRecord, TutorBackend};
use crate::core::constants::chat_title_for;
use crate::utils::logging::LoggingState;

/// Print a stored conversation, copying it to the transcript when logging.
pub async fn show_conversation(
    backend: &dyn TutorBackend,
    id: &str,
    logging: &LoggingState,
) -> Result<(), Box<dyn Error>> {
    let record = backend.load_conversation(id).await?;
    print!("{}", format_transcript(id, &record));

    if logging.is_active() {
        let title = chat_title_for(&record.config.language);
        logging.log_header(&title, id)?;
        for message in &record.messages {
            if let Err(err) = logging.log_message(message) {
                warn!("transcript write failed: {err}");
            }
        }
    }
    Ok(())
}

pub fn format_transcript(id: &str, record: &ConversationRecord) -> String {
    let config = &record.config;
    let mut out = format!("{} ({id})\n", chat_title_for(&config.language));
    if !config.orchestration_type.is_empty() || !config.mode.is_empty() {
        out.push_str(&format!(
            "orchestration: {}, mode: {}\n",
            config.orchestration_type, config.mode
        ));
    }
    out.push('\n');

    if record.messages.is_empty() {
        out.push_str("(no messages yet)\n");
    }
    for message in &record.messages {
        out.push_str(&format!(
            "{}: {}\n\n",
            message.role.display_name(),
            message.content
        ));
    }
    out
}
