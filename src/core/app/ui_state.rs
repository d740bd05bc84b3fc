use crate::api::ConversationSummary;
use crate::core::constants::DEFAULT_CHAT_TITLE;
use crate::core::message::Message;
use crate::ui::renderer::wrapped_display_lines;
use crate::ui::theme::Theme;
use crate::utils::scroll;
use ratatui::layout::Rect;

/// The two mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Config,
    Chat,
}

/// Which region receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The configuration form (config screen) or the chat input (chat screen).
    Main,
    /// The conversation list sidebar.
    Sidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntry {
    Message(Message),
    /// Placeholder for an outstanding `send_message` request.
    Loading { request_id: u64 },
}

/// Rendered contents of the chat pane.
///
/// `generation` changes whenever the pane is replaced wholesale, so replies
/// issued against an earlier pane can be recognized and dropped.
#[derive(Debug, Default)]
pub struct ChatPane {
    entries: Vec<ChatEntry>,
    generation: u64,
}

impl ChatPane {
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(|entry| match entry {
            ChatEntry::Message(message) => Some(message),
            ChatEntry::Loading { .. } => None,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn replace(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.entries = messages.into_iter().map(ChatEntry::Message).collect();
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.replace(std::iter::empty());
    }

    pub fn push_message(&mut self, message: Message) {
        self.entries.push(ChatEntry::Message(message));
    }

    pub fn push_loading(&mut self, request_id: u64) {
        self.entries.push(ChatEntry::Loading { request_id });
    }

    pub fn remove_loading(&mut self, request_id: u64) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| *entry != ChatEntry::Loading { request_id });
        self.entries.len() != before
    }

    pub fn is_loading(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry, ChatEntry::Loading { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One selectable row of the conversation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub id: String,
    pub label: String,
    pub active: bool,
}

/// Last conversation listing received from the backend.
#[derive(Debug, Default)]
pub struct ConversationList {
    summaries: Vec<ConversationSummary>,
    loaded: bool,
    pub selected: usize,
}

impl ConversationList {
    /// Replace the listing wholesale, keeping the cursor on the active entry
    /// when there is one.
    pub fn replace(&mut self, summaries: Vec<ConversationSummary>, active_id: Option<&str>) {
        self.summaries = summaries;
        self.loaded = true;
        self.selected = active_id
            .and_then(|id| self.summaries.iter().position(|s| s.id == id))
            .unwrap_or_else(|| self.selected.min(self.summaries.len().saturating_sub(1)));
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True when the backend reported no conversations at all.
    pub fn shows_placeholder(&self) -> bool {
        self.loaded && self.summaries.is_empty()
    }

    pub fn entries(&self, active_id: Option<&str>) -> Vec<ConversationEntry> {
        self.summaries
            .iter()
            .map(|summary| ConversationEntry {
                id: summary.id.clone(),
                label: summary.label(),
                active: active_id == Some(summary.id.as_str()),
            })
            .collect()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.summaries.get(self.selected).map(|s| s.id.as_str())
    }

    pub fn move_up(&mut self) {
        if !self.summaries.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.summaries.len() - 1);
        }
    }

    pub fn move_down(&mut self) {
        if !self.summaries.is_empty() {
            self.selected = (self.selected + 1) % self.summaries.len();
        }
    }
}

pub struct UiState {
    pub screen: Screen,
    pub focus: Focus,
    pub chat_title: String,
    pub chat: ChatPane,
    pub conversations: ConversationList,
    pub input: String,
    pub status: Option<StatusMessage>,
    /// Rows scrolled up from the bottom of the chat pane.
    pub scroll_from_bottom: u16,
    /// Inner area of the chat pane as last laid out by the terminal.
    pub chat_viewport: Rect,
    pub exit_requested: bool,
    pub theme: Theme,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Config,
            focus: Focus::Main,
            chat_title: DEFAULT_CHAT_TITLE.to_string(),
            chat: ChatPane::default(),
            conversations: ConversationList::default(),
            input: String::new(),
            status: None,
            scroll_from_bottom: 0,
            chat_viewport: Rect::default(),
            exit_requested: false,
            theme: Theme::dark_default(),
        }
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text: text.into(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_from_bottom = 0;
    }

    /// Furthest the chat pane can scroll up in the current viewport.
    pub fn calculate_max_scroll_offset(&self) -> u16 {
        let rows = wrapped_display_lines(self, self.chat_viewport.width).len();
        scroll::max_scroll_offset(rows, self.chat_viewport.height)
    }
}
