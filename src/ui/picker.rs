#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerItem {
    pub id: String,
    pub label: String,
}

impl PickerItem {
    /// Item whose label is its id.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            id: value,
        }
    }
}

/// A titled single-choice list with wrap-around movement.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub title: String,
    pub items: Vec<PickerItem>,
    pub selected: usize,
}

impl PickerState {
    pub fn new<T: Into<String>>(title: T, items: Vec<PickerItem>, selected: usize) -> Self {
        let selected = selected.min(items.len().saturating_sub(1));
        Self {
            title: title.into(),
            items,
            selected,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.items.get(self.selected).map(|i| i.id.as_str())
    }

    pub fn selected_item(&self) -> Option<&PickerItem> {
        self.items.get(self.selected)
    }

    /// Select the item with `id`, returning whether it exists.
    pub fn select_id(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Select `id`, adding it as a plain item when it is not offered.
    pub fn select_or_insert(&mut self, id: &str) {
        if !self.select_id(id) {
            self.items.push(PickerItem::plain(id));
            self.selected = self.items.len() - 1;
        }
    }

    pub fn move_up(&mut self) {
        if !self.items.is_empty() {
            if self.selected == 0 {
                self.selected = self.items.len() - 1;
            } else {
                self.selected -= 1;
            }
        }
    }

    pub fn move_down(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1) % self.items.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> PickerState {
        PickerState::new(
            "Language",
            vec![PickerItem::plain("Python"), PickerItem::plain("Go")],
            0,
        )
    }

    #[test]
    fn movement_wraps_in_both_directions() {
        let mut picker = picker();
        picker.move_up();
        assert_eq!(picker.selected_id(), Some("Go"));
        picker.move_down();
        assert_eq!(picker.selected_id(), Some("Python"));
    }

    #[test]
    fn select_or_insert_keeps_unknown_values() {
        let mut picker = picker();
        picker.select_or_insert("Go");
        assert_eq!(picker.selected, 1);
        picker.select_or_insert("Haskell");
        assert_eq!(picker.items.len(), 3);
        assert_eq!(picker.selected_id(), Some("Haskell"));
    }

    #[test]
    fn empty_picker_has_no_selection() {
        let mut picker = PickerState::new("Mode", Vec::new(), 3);
        picker.move_down();
        assert_eq!(picker.selected_id(), None);
    }
}
