/*
[INPUT]:  Category form keystrokes and the row being edited
[OUTPUT]: CategoryDraft for create/update submission
[POS]:    TUI UI modal - create and update category forms
[UPDATE]: When category form fields change
*/

use crossterm::event::KeyCode;

use cmg_admin_adapter::{Category, CategoryType};

use crate::form::CategoryDraft;

use super::{Field, Modal, ModalAction, handle_modal_key};

const LABEL_FIELD: usize = 0;
const VALUE_DEFINITION_FIELD: usize = 1;
const DESCRIPTION_FIELD: usize = 2;
const TYPE_FIELD: usize = 3;
const PRIORITY_FIELD: usize = 4;

#[derive(Debug, Clone)]
pub(in crate::tui) enum FormMode {
    Create,
    Update(Category),
}

pub(in crate::tui) struct CategoryFormModal {
    mode: FormMode,
    draft: CategoryDraft,
    focus_index: usize,
}

impl CategoryFormModal {
    pub(in crate::tui) fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: CategoryDraft::default(),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn update(category: &Category) -> Self {
        Self {
            mode: FormMode::Update(category.clone()),
            draft: CategoryDraft::from(category),
            focus_index: 0,
        }
    }

    pub(in crate::tui) fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub(in crate::tui) fn draft(&self) -> &CategoryDraft {
        &self.draft
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        let (title, submit_label) = match self.mode {
            FormMode::Create => ("Create Category", "Create"),
            FormMode::Update(_) => ("Update Category", "Update"),
        };
        let type_index = CategoryType::ALL
            .iter()
            .position(|kind| *kind == self.draft.category_type)
            .unwrap_or(0);

        Modal {
            title: title.to_string(),
            description: None,
            focus_index: self.focus_index,
            fields: vec![
                Field::text("Label", &self.draft.label),
                Field::text("Value definition", &self.draft.value_definition),
                Field::text("Description", &self.draft.description),
                Field::Select {
                    label: "Type".to_string(),
                    options: CategoryType::ALL
                        .iter()
                        .map(|kind| kind.label().to_string())
                        .collect(),
                    selected: type_index,
                },
                Field::text("Priority", &self.draft.priority),
                Field::button(submit_label, ModalAction::Submit),
                Field::button("Cancel", ModalAction::Cancel),
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal);
        action
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(value) = Field::text_at(&modal.fields, LABEL_FIELD) {
            self.draft.label = value.to_string();
        }
        if let Some(value) = Field::text_at(&modal.fields, VALUE_DEFINITION_FIELD) {
            self.draft.value_definition = value.to_string();
        }
        if let Some(value) = Field::text_at(&modal.fields, DESCRIPTION_FIELD) {
            self.draft.description = value.to_string();
        }
        if let Some(Field::Select { selected, .. }) = modal.fields.get(TYPE_FIELD) {
            if let Some(kind) = CategoryType::ALL.get(*selected) {
                self.draft.category_type = *kind;
            }
        }
        if let Some(value) = Field::text_at(&modal.fields, PRIORITY_FIELD) {
            self.draft.priority = value.to_string();
        }
    }
}
