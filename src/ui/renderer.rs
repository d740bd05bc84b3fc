use crate::core::app::{App, ChatEntry, Focus, FormField, Screen, StatusKind, UiState};
use crate::core::constants::{EMPTY_CONVERSATIONS_TEXT, LOADING_TEXT};
use crate::core::message::Role;
use crate::ui::picker::PickerState;
use crate::ui::theme::Theme;
use crate::utils::scroll::{max_scroll_offset, prewrap_lines};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const SIDEBAR_WIDTH: u16 = 32;

struct ScreenLayout {
    sidebar: Rect,
    main: Rect,
    status: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    ScreenLayout {
        sidebar: columns[0],
        main: columns[1],
        status: rows[1],
    }
}

/// Split the chat screen into the messages pane and the input box.
fn chat_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Inner area of the chat messages pane for a frame of the given size.
pub fn chat_viewport(frame_area: Rect) -> Rect {
    let (messages, _) = chat_layout(screen_layout(frame_area).main);
    Block::default().borders(Borders::ALL).inner(messages)
}

/// Chat pane lines wrapped to `width` columns, one entry per screen row.
pub fn wrapped_display_lines(ui: &UiState, width: u16) -> Vec<Line<'static>> {
    prewrap_lines(&build_display_lines(ui), width)
}

pub fn ui(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area());

    render_sidebar(f, app, layout.sidebar);
    match app.ui.screen {
        Screen::Config => render_config_screen(f, app, layout.main),
        Screen::Chat => render_chat_screen(f, app, layout.main),
    }
    render_status_line(f, app, layout.status);
}

fn bordered<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.focused_border_style
        } else {
            theme.border_style
        })
        .title(Span::styled(title, theme.title_style))
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let focused = app.ui.focus == Focus::Sidebar;
    let block = bordered("Conversations", focused, theme);
    let list = &app.ui.conversations;

    if !list.is_loaded() || list.shows_placeholder() {
        let text = if list.is_loaded() {
            EMPTY_CONVERSATIONS_TEXT
        } else {
            LOADING_TEXT
        };
        let placeholder = Paragraph::new(Span::styled(text, theme.placeholder_style))
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .conversation_entries()
        .into_iter()
        .map(|entry| {
            if entry.active {
                ListItem::new(Line::from(vec![
                    Span::styled("● ", theme.active_item_style),
                    Span::styled(entry.label, theme.active_item_style),
                ]))
            } else {
                ListItem::new(Line::from(format!("  {}", entry.label)))
            }
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(theme.selected_item_style);
    let mut state = ListState::default();
    if focused {
        state.select(Some(list.selected));
    }
    f.render_stateful_widget(widget, area, &mut state);
}

fn render_config_screen(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let main_focused = app.ui.focus == Focus::Main;
    let outer = bordered("New session", main_focused, theme);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let picker_height = |picker: &PickerState| picker.items.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(picker_height(&app.form.language)),
            Constraint::Length(picker_height(&app.form.orchestration)),
            Constraint::Length(picker_height(&app.form.mode)),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (index, field) in FormField::ALL.into_iter().enumerate() {
        let focused = main_focused && app.form.focused == field;
        render_picker(f, app.form.field(field), focused, theme, chunks[index]);
    }

    let hint = Paragraph::new(Span::styled(
        "Up/Down: change value • Left/Right: change field • Enter: start session",
        theme.hint_style,
    ));
    f.render_widget(hint, chunks[3]);
}

fn render_picker(f: &mut Frame, picker: &PickerState, focused: bool, theme: &Theme, area: Rect) {
    let items: Vec<ListItem> = picker
        .items
        .iter()
        .map(|item| ListItem::new(item.label.clone()))
        .collect();
    let widget = List::new(items)
        .block(bordered(&picker.title, focused, theme))
        .highlight_symbol("> ")
        .highlight_style(if focused {
            theme.selected_item_style
        } else {
            theme.active_item_style
        });
    let mut state = ListState::default().with_selected(picker.selected_item().map(|_| picker.selected));
    f.render_stateful_widget(widget, area, &mut state);
}

fn render_chat_screen(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let (messages_chunk, input_chunk) = chat_layout(area);

    let messages_block = bordered(&app.ui.chat_title, false, theme);
    let messages_area = messages_block.inner(messages_chunk);
    let lines = wrapped_display_lines(&app.ui, messages_area.width);
    let max_offset = max_scroll_offset(lines.len(), messages_area.height);
    let scroll = max_offset - app.ui.scroll_from_bottom.min(max_offset);

    // Lines are already wrapped, so the row count above is exact
    let messages = Paragraph::new(lines)
        .block(messages_block)
        .scroll((scroll, 0));
    f.render_widget(messages, messages_chunk);

    let input_focused = app.ui.focus == Focus::Main;
    let input_block = bordered("Message (Enter: send • Esc: new session)", input_focused, theme);
    let input_inner = input_block.inner(input_chunk);

    // Keep the end of long input visible
    let input_width =
        u16::try_from(UnicodeWidthStr::width(app.ui.input.as_str())).unwrap_or(u16::MAX);
    let horizontal = input_width.saturating_sub(input_inner.width.saturating_sub(1));
    let input = Paragraph::new(app.ui.input.as_str())
        .block(input_block)
        .scroll((0, horizontal));
    f.render_widget(input, input_chunk);

    if input_focused && input_inner.width > 0 {
        let cursor_x = input_inner.x + (input_width - horizontal).min(input_inner.width - 1);
        f.set_cursor_position((cursor_x, input_inner.y));
    }
}

fn render_status_line(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.ui.theme;
    let line = match &app.ui.status {
        Some(status) => {
            let style = match status.kind {
                StatusKind::Info => theme.info_style,
                StatusKind::Error => theme.error_style,
            };
            Line::from(Span::styled(status.text.clone(), style))
        }
        None => Line::from(Span::styled(
            format!(
                "Tab: switch focus • F5: refresh list • Ctrl+C: quit • {}",
                app.session.logging.get_status_string()
            ),
            theme.hint_style,
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

/// Lines of the chat pane: each message prefixed with its speaker, a
/// loading line per outstanding request, and a blank line between entries.
pub fn build_display_lines(ui: &UiState) -> Vec<Line<'static>> {
    let theme = &ui.theme;
    let mut lines = Vec::new();

    for (index, entry) in ui.chat.entries().iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        match entry {
            ChatEntry::Message(message) => {
                let (prefix_style, text_style) = speaker_styles(message.role, theme);
                let prefix = format!("{}: ", message.role.display_name());
                let mut content = message.content.lines();
                let first = content.next().unwrap_or_default().to_string();
                lines.push(Line::from(vec![
                    Span::styled(prefix, prefix_style),
                    Span::styled(first, text_style),
                ]));
                lines.extend(content.map(|rest| Line::from(Span::styled(rest.to_string(), text_style))));
            }
            ChatEntry::Loading { .. } => {
                let prefix = format!("{}: ", Role::Assistant.display_name());
                lines.push(Line::from(vec![
                    Span::styled(prefix, theme.tutor_prefix_style),
                    Span::styled(LOADING_TEXT, theme.loading_style),
                ]));
            }
        }
    }
    lines
}

fn speaker_styles(role: Role, theme: &Theme) -> (Style, Style) {
    match role {
        Role::User => (theme.user_prefix_style, theme.user_text_style),
        Role::Assistant => (theme.tutor_prefix_style, theme.tutor_text_style),
    }
}
