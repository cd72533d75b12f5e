/*
[INPUT]:  Crossterm key codes
[OUTPUT]: TUI event routing to AppState actions
[POS]:    TUI key handling
[UPDATE]: When changing keybindings or modal submission
*/

use crossterm::event::KeyCode;

use cmg_admin_adapter::SortOrder;

use super::app::{ActiveModal, AppState, Screen, Tab};
use super::ui::modal::ModalAction;

enum ModalSubmit {
    CategoryForm,
    Delete(uuid::Uuid),
    Filter {
        field: cmg_admin_adapter::CategoryField,
        value: String,
    },
}

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) async fn handle_key_event(app: &mut AppState, key: KeyCode) -> bool {
    if app.screen == Screen::Login {
        return handle_login_key_event(app, key).await;
    }
    if app.active_modal.is_some() {
        handle_modal_key_event(app, key).await;
        return false;
    }

    match key {
        KeyCode::Char('q') => return true,
        KeyCode::Tab => app.next_tab(),
        KeyCode::Char('L') => app.logout(),
        _ if app.current_tab == Tab::Logs => {}
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Left => app.move_column(-1),
        KeyCode::Right => app.move_column(1),
        KeyCode::Char('[') => app.prev_page().await,
        KeyCode::Char(']') => app.next_page().await,
        KeyCode::Char('-') => app.change_page_size(-1).await,
        KeyCode::Char('+') | KeyCode::Char('=') => app.change_page_size(1).await,
        KeyCode::Char('a') => app.sort_selected_column(SortOrder::Asc).await,
        KeyCode::Char('z') => app.sort_selected_column(SortOrder::Desc).await,
        KeyCode::Char('/') => app.open_filter(),
        KeyCode::Char('R') => app.reset_filter().await,
        KeyCode::Char('r') => app.load_categories().await,
        KeyCode::Char('n') => app.open_create(),
        KeyCode::Char('e') => app.open_update(),
        KeyCode::Char('d') => app.open_delete(),
        _ => {}
    }
    false
}

async fn handle_login_key_event(app: &mut AppState, key: KeyCode) -> bool {
    match app.login_form.handle_key(key) {
        ModalAction::Cancel => true,
        ModalAction::Submit => {
            app.submit_login().await;
            false
        }
        ModalAction::None => false,
    }
}

async fn handle_modal_key_event(app: &mut AppState, key: KeyCode) {
    let (action, submit) = match app.active_modal_mut() {
        Some(ActiveModal::CategoryForm(modal)) => {
            let action = modal.handle_key(key);
            (action, Some(ModalSubmit::CategoryForm))
        }
        Some(ActiveModal::ConfirmDelete(modal)) => {
            let action = modal.handle_key(key);
            (action, Some(ModalSubmit::Delete(modal.category_id())))
        }
        Some(ActiveModal::Filter(modal)) => {
            let action = modal.handle_key(key);
            let submit = ModalSubmit::Filter {
                field: modal.field(),
                value: modal.value().to_string(),
            };
            (action, Some(submit))
        }
        None => return,
    };

    match (action, submit) {
        (ModalAction::Cancel, _) => app.close_modal(),
        (ModalAction::Submit, Some(ModalSubmit::CategoryForm)) => {
            app.submit_category_form().await;
        }
        (ModalAction::Submit, Some(ModalSubmit::Delete(id))) => app.confirm_delete(id).await,
        (ModalAction::Submit, Some(ModalSubmit::Filter { field, value })) => {
            app.close_modal();
            app.apply_filter(field, &value).await;
        }
        _ => {}
    }
}
