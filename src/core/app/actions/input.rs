use super::{App, AppAction, AppCommand};
use crate::core::app::ui_state::{Focus, Screen};

pub(super) fn handle_input_action(app: &mut App, action: AppAction) -> Option<AppCommand> {
    match action {
        AppAction::FormFieldNext => app.form.focus_next(),
        AppAction::FormFieldPrevious => app.form.focus_previous(),
        AppAction::FormValueNext => {
            let field = app.form.focused;
            app.form.field_mut(field).move_down();
        }
        AppAction::FormValuePrevious => {
            let field = app.form.focused;
            app.form.field_mut(field).move_up();
        }
        AppAction::ToggleFocus => {
            app.ui.focus = match app.ui.focus {
                Focus::Main => Focus::Sidebar,
                Focus::Sidebar => Focus::Main,
            };
        }
        AppAction::InsertChar { ch } => {
            if app.ui.screen == Screen::Chat {
                app.ui.input.push(ch);
            }
        }
        AppAction::Backspace => {
            if app.ui.screen == Screen::Chat {
                app.ui.input.pop();
            }
        }
        AppAction::ClearInput => {
            if app.ui.screen == Screen::Chat {
                app.ui.input.clear();
            }
        }
        AppAction::ScrollUp { lines } => {
            let max_offset = app.ui.calculate_max_scroll_offset();
            app.ui.scroll_from_bottom = app
                .ui
                .scroll_from_bottom
                .saturating_add(lines)
                .min(max_offset);
        }
        AppAction::ScrollDown { lines } => {
            app.ui.scroll_from_bottom = app.ui.scroll_from_bottom.saturating_sub(lines);
        }
        AppAction::Quit => app.ui.exit_requested = true,
        _ => unreachable!("non-input action routed to input handler"),
    }
    None
}
