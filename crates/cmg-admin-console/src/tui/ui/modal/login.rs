/*
[INPUT]:  Login form keystrokes
[OUTPUT]: Email/password draft for AuthManager::login
[POS]:    TUI UI modal - login screen form
[UPDATE]: When login form fields change
*/

use crossterm::event::KeyCode;

use crate::form::LoginDraft;

use super::{Field, Modal, ModalAction, handle_modal_key};

const EMAIL_FIELD: usize = 0;
const PASSWORD_FIELD: usize = 1;

#[derive(Default)]
pub(in crate::tui) struct LoginModal {
    draft: LoginDraft,
    focus_index: usize,
}

impl LoginModal {
    pub(in crate::tui) fn new() -> Self {
        Self::default()
    }

    pub(in crate::tui) fn to_modal(&self) -> Modal {
        Modal {
            title: "Log in".to_string(),
            description: Some("Sign in with your administrator account".to_string()),
            focus_index: self.focus_index,
            fields: vec![
                Field::text("Email", &self.draft.email),
                Field::TextInput {
                    label: "Password".to_string(),
                    value: self.draft.password.clone(),
                    masked: true,
                },
                Field::button("Log in", ModalAction::Submit),
            ],
        }
    }

    pub(in crate::tui) fn handle_key(&mut self, key: KeyCode) -> ModalAction {
        let mut modal = self.to_modal();
        let action = handle_modal_key(&mut modal, key);
        self.apply_modal_state(&modal);
        action
    }

    pub(in crate::tui) fn draft(&self) -> &LoginDraft {
        &self.draft
    }

    /// Drop the typed password, keeping the email for the next attempt
    pub(in crate::tui) fn clear_password(&mut self) {
        self.draft.password.clear();
        self.focus_index = PASSWORD_FIELD;
    }

    fn apply_modal_state(&mut self, modal: &Modal) {
        self.focus_index = modal.focus_index;
        if let Some(value) = Field::text_at(&modal.fields, EMAIL_FIELD) {
            self.draft.email = value.to_string();
        }
        if let Some(value) = Field::text_at(&modal.fields, PASSWORD_FIELD) {
            self.draft.password = value.to_string();
        }
    }
}
