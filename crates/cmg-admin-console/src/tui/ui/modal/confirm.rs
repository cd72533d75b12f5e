/*
[INPUT]:  Row selected for deletion
[OUTPUT]: Delete confirmation modal
[POS]:    TUI UI modal - delete confirmation
[UPDATE]: When confirmation wording changes
*/

use crossterm::event::KeyCode;
use uuid::Uuid;

use super::{Field, Modal, ModalAction, handle_modal_key};

pub(in crate::tui) struct ConfirmDeleteModal {
    category_id: Uuid,
    label: String,
    focus_index: usize,
}

impl ConfirmDeleteModal {
    pub(in crate::tui) fn new(category_id: Uuid, label: impl Into<String>) -> Self {
        Self {
            category_id,
            label: label.into(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: "Delete category".to_string(),
            description: Some(format!(
                "Do you really want to delete the category \"{}\"?",
                self.label
            )),
            focus_index: self.focus_index,
            fields: vec![
                Field::button("Delete", ModalAction::Submit),
                Field::button("Cancel", ModalAction::Cancel),
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.focus_index = modal.focus_index;
        action
    }
}
