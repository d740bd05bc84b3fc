use crate::core::message::Message;
use std::error::Error;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append-only chat transcript enabled with `--log <FILE>`.
pub struct LoggingState {
    file_path: Option<String>,
    is_active: bool,
}

impl LoggingState {
    pub fn new(log_file: Option<String>) -> Result<Self, Box<dyn Error>> {
        let logging = LoggingState {
            is_active: log_file.is_some(),
            file_path: log_file,
        };

        if let Some(path) = &logging.file_path {
            logging.test_file_access(path)?;
        }

        Ok(logging)
    }

    pub fn disabled() -> Self {
        LoggingState {
            file_path: None,
            is_active: false,
        }
    }

    pub fn log_message(&self, message: &Message) -> Result<(), Box<dyn Error>> {
        self.write_block(&format!(
            "{}: {}",
            message.role.display_name(),
            message.content
        ))
    }

    /// Mark the start of a conversation in the transcript.
    pub fn log_header(&self, title: &str, conversation_id: &str) -> Result<(), Box<dyn Error>> {
        self.write_block(&format!("## {title} ({conversation_id})"))
    }

    fn write_block(&self, content: &str) -> Result<(), Box<dyn Error>> {
        let Some(file_path) = self.file_path.as_ref().filter(|_| self.is_active) else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file_path)?;
        let mut writer = BufWriter::new(file);

        for line in content.lines() {
            writeln!(writer, "{line}")?;
        }

        // Blank line between entries, matching the chat pane spacing
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn get_status_string(&self) -> String {
        match (&self.file_path, self.is_active) {
            (Some(path), true) => format!(
                "logging to {}",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            ),
            _ => "not logging".to_string(),
        }
    }

    fn test_file_access(&self, path: &str) -> Result<(), Box<dyn Error>> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.flush()?;
        Ok(())
    }
}
