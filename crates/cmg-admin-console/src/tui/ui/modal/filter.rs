/*
[INPUT]:  Selected column and typed search value
[OUTPUT]: Filter value for the category list
[POS]:    TUI UI modal - column filter prompt
[UPDATE]: When filter prompt behavior changes
*/

use crossterm::event::KeyCode;

use cmg_admin_adapter::CategoryField;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) struct FilterModal {
    field: CategoryField,
    header: String,
    value: String,
    focus_index: usize,
}

impl FilterModal {
    pub(in crate::tui) fn new(field: CategoryField, header: &str, value: &str) -> Self {
        Self {
            field,
            header: header.to_string(),
            value: value.to_string(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn field(&self) -> CategoryField {
        self.field
    }

    pub(in crate::tui) fn value(&self) -> &str {
        &self.value
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: format!("Filter by {}", self.header),
            description: Some("Leave empty to clear the filter".to_string()),
            focus_index: self.focus_index,
            fields: vec![
                Field::text("Search", &self.value),
                Field::button("Search", ModalAction::Submit),
                Field::button("Cancel", ModalAction::Cancel),
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        // Enter in the text field searches right away
        if key == KeyCode::Enter && self.focus_index == 0 {
            return ModalAction::Submit;
        }
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.focus_index = modal.focus_index;
        if let Some(value) = Field::text_at(&modal.fields, 0) {
            self.value = value.to_string();
        }
        action
    }
}
