use crate::api::ConfigureRequest;
use crate::core::config::data::Config;
use crate::ui::picker::{PickerItem, PickerState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Language,
    Orchestration,
    Mode,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Language, FormField::Orchestration, FormField::Mode];

    fn next(self) -> Self {
        match self {
            FormField::Language => FormField::Orchestration,
            FormField::Orchestration => FormField::Mode,
            FormField::Mode => FormField::Language,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormField::Language => FormField::Mode,
            FormField::Orchestration => FormField::Language,
            FormField::Mode => FormField::Orchestration,
        }
    }
}

/// The configuration screen: one picker per tutoring parameter.
///
/// Values are forwarded to the backend verbatim; the form never checks them
/// against what the server accepts.
pub struct ConfigForm {
    pub language: PickerState,
    pub orchestration: PickerState,
    pub mode: PickerState,
    pub focused: FormField,
}

impl ConfigForm {
    pub fn from_config(config: &Config) -> Self {
        let mut form = Self {
            language: PickerState::new(
                "Language",
                config
                    .language_options()
                    .into_iter()
                    .map(PickerItem::plain)
                    .collect(),
                0,
            ),
            orchestration: PickerState::new(
                "Orchestration",
                config
                    .orchestration_options()
                    .into_iter()
                    .map(PickerItem::plain)
                    .collect(),
                0,
            ),
            mode: PickerState::new(
                "Mode",
                config
                    .mode_options()
                    .into_iter()
                    .map(|mode| PickerItem {
                        id: mode.id,
                        label: mode.label,
                    })
                    .collect(),
                0,
            ),
            focused: FormField::Language,
        };

        if let Some(language) = &config.default_language {
            form.language.select_or_insert(language);
        }
        if let Some(orchestration) = &config.default_orchestration {
            form.orchestration.select_or_insert(orchestration);
        }
        if let Some(mode) = &config.default_mode {
            form.mode.select_or_insert(mode);
        }
        form
    }

    pub fn field(&self, field: FormField) -> &PickerState {
        match field {
            FormField::Language => &self.language,
            FormField::Orchestration => &self.orchestration,
            FormField::Mode => &self.mode,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut PickerState {
        match field {
            FormField::Language => &mut self.language,
            FormField::Orchestration => &mut self.orchestration,
            FormField::Mode => &mut self.mode,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    /// Current choices, or `None` when a list has nothing to choose from.
    pub fn selection(&self) -> Option<ConfigureRequest> {
        Some(ConfigureRequest {
            language: self.language.selected_id()?.to_string(),
            orchestration_type: self.orchestration.selected_id()?.to_string(),
            mode: self.mode.selected_id()?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_config() {
        let config = Config {
            default_language: Some("Go".to_string()),
            default_orchestration: Some("multi-agent".to_string()),
            default_mode: Some("debug".to_string()),
            ..Default::default()
        };
        let form = ConfigForm::from_config(&config);
        assert_eq!(
            form.selection(),
            Some(ConfigureRequest {
                language: "Go".to_string(),
                orchestration_type: "multi-agent".to_string(),
                mode: "debug".to_string(),
            })
        );
    }

    #[test]
    fn unlisted_default_is_still_offered() {
        let config = Config {
            default_mode: Some("practice".to_string()),
            ..Default::default()
        };
        let form = ConfigForm::from_config(&config);
        assert_eq!(form.mode.selected_id(), Some("practice"));
        assert_eq!(form.mode.items.len(), 7);
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut form = ConfigForm::from_config(&Config::default());
        for expected in [FormField::Orchestration, FormField::Mode, FormField::Language] {
            form.focus_next();
            assert_eq!(form.focused, expected);
        }
        form.focus_previous();
        assert_eq!(form.focused, FormField::Mode);
    }

    #[test]
    fn empty_option_list_yields_no_selection() {
        let mut form = ConfigForm::from_config(&Config::default());
        form.mode.items.clear();
        assert_eq!(form.selection(), None);
    }
}
