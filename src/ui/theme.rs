use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub tutor_prefix_style: Style,
    pub tutor_text_style: Style,
    pub loading_style: Style,

    // Chrome
    pub title_style: Style,
    pub border_style: Style,
    pub focused_border_style: Style,
    pub selected_item_style: Style,
    pub active_item_style: Style,
    pub placeholder_style: Style,

    // Status line
    pub info_style: Style,
    pub error_style: Style,
    pub hint_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_default()
    }
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            tutor_prefix_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            tutor_text_style: Style::default().fg(Color::White),
            loading_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            title_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            border_style: Style::default().fg(Color::DarkGray),
            focused_border_style: Style::default().fg(Color::Cyan),
            selected_item_style: Style::default().add_modifier(Modifier::REVERSED),
            active_item_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            placeholder_style: Style::default().fg(Color::DarkGray),

            info_style: Style::default().fg(Color::Gray),
            error_style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            hint_style: Style::default().fg(Color::DarkGray),
        }
    }
}
