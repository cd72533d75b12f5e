/*
[INPUT]:  AuthManager, log buffer, operator actions
[OUTPUT]: AppState helpers for TUI rendering and category operations
[POS]:    TUI app state and API orchestration
[UPDATE]: When adding screens, modals or category operations
*/

use ratatui::widgets::TableState;
use uuid::Uuid;

use cmg_admin_adapter::{AdminError, AuthManager, Category, CategoryField, SortOrder};

use crate::browser::{COLUMNS, CategoryBrowser, column_field};
use crate::toast::{self, Toast, ToastQueue};
use crate::tui::LogBufferHandle;
use crate::tui::ui::modal::{
    CategoryFormModal, ConfirmDeleteModal, FilterModal, FormMode, LoginModal,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Screen {
    Login,
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Tab {
    Categories,
    Logs,
}

pub(super) enum ActiveModal {
    CategoryForm(CategoryFormModal),
    ConfirmDelete(ConfirmDeleteModal),
    Filter(FilterModal),
}

pub(super) struct AppState {
    pub(super) auth: AuthManager,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) screen: Screen,
    pub(super) login_form: LoginModal,
    pub(super) browser: CategoryBrowser,
    pub(super) table_state: TableState,
    pub(super) selected_column: usize,
    pub(super) current_tab: Tab,
    pub(super) status_message: String,
    pub(super) toasts: ToastQueue,
    pub(super) active_modal: Option<ActiveModal>,
}

impl AppState {
    pub(super) fn new(auth: AuthManager, log_buffer: LogBufferHandle, page_size: u32) -> Self {
        let screen = if auth.is_authenticated() {
            Screen::Categories
        } else {
            Screen::Login
        };
        Self {
            auth,
            log_buffer,
            screen,
            login_form: LoginModal::new(),
            browser: CategoryBrowser::new(page_size),
            table_state: TableState::default(),
            selected_column: 1,
            current_tab: Tab::Categories,
            status_message: "Ready".to_string(),
            toasts: ToastQueue::new(),
            active_modal: None,
        }
    }

    pub(super) fn tick(&mut self) {
        self.toasts.tick();
    }

    pub(super) fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Categories => Tab::Logs,
            Tab::Logs => Tab::Categories,
        };
    }

    pub(super) fn selected_category(&self) -> Option<&Category> {
        let idx = self.table_state.selected()?;
        self.browser.rows().get(idx)
    }

    pub(super) fn selected_field(&self) -> Option<CategoryField> {
        column_field(self.selected_column)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.browser.rows().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (len - 1) as isize) as usize;
        self.table_state.select(Some(next));
    }

    pub(super) fn move_column(&mut self, delta: isize) {
        let last = (COLUMNS.len() - 1) as isize;
        self.selected_column = (self.selected_column as isize + delta).clamp(0, last) as usize;
    }

    fn clamp_selection(&mut self) {
        let len = self.browser.rows().len();
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            None => self.table_state.select(Some(0)),
            Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    pub(super) async fn load_categories(&mut self) {
        self.browser.loading = true;
        let result = self.auth.client().list_categories(self.browser.query()).await;
        self.browser.loading = false;

        match result {
            Ok(page) => {
                tracing::debug!(
                    page = self.browser.page(),
                    rows = page.items.len(),
                    total = page.total,
                    "categories loaded"
                );
                self.browser.apply_page(page);
                self.clamp_selection();
                self.status_message = format!(
                    "Page {} of {} ({} categories)",
                    self.browser.page(),
                    self.browser.total_pages(),
                    self.browser.total()
                );
            }
            Err(err) => self.handle_failure(err, None),
        }
    }

    /// Surface an API error. An expired session sends the operator back to login.
    fn handle_failure(&mut self, err: AdminError, toast_text: Option<&str>) {
        tracing::warn!("admin api call failed: {err}");
        if err.is_auth_error() {
            if let Err(clear_err) = self.auth.logout() {
                tracing::warn!("failed to clear session: {clear_err}");
            }
            self.active_modal = None;
            self.screen = Screen::Login;
            self.current_tab = Tab::Categories;
            self.login_form.clear_password();
            self.toasts.push(Toast::error(toast::SESSION_EXPIRED));
            self.status_message = toast::SESSION_EXPIRED.to_string();
            return;
        }

        let message = err.user_message();
        self.toasts
            .push(Toast::error(toast_text.unwrap_or(message.as_str())));
        self.status_message = message;
    }

    pub(super) async fn submit_login(&mut self) {
        let credentials = match self.login_form.draft().to_login_data() {
            Ok(credentials) => credentials,
            Err(errors) => {
                self.status_message = errors.join("; ");
                return;
            }
        };

        match self.auth.login(&credentials).await {
            Ok(_) => {
                self.login_form = LoginModal::new();
                self.screen = Screen::Categories;
                self.browser.reset();
                self.table_state.select(None);
                self.toasts.push(Toast::success(toast::LOGIN_SUCCESS));
                self.load_categories().await;
            }
            Err(err) => {
                tracing::warn!("login failed: {err}");
                let message = err.user_message();
                self.toasts.push(Toast::error(message.clone()));
                self.status_message = message;
                self.login_form.clear_password();
            }
        }
    }

    pub(super) fn logout(&mut self) {
        if let Err(err) = self.auth.logout() {
            self.status_message = format!("logout failed: {err}");
            return;
        }
        self.active_modal = None;
        self.screen = Screen::Login;
        self.current_tab = Tab::Categories;
        self.login_form = LoginModal::new();
        self.browser = CategoryBrowser::new(self.browser.default_page_size());
        self.table_state.select(None);
        self.status_message = "Logged out".to_string();
    }

    pub(super) async fn next_page(&mut self) {
        if self.browser.next_page() {
            self.load_categories().await;
        }
    }

    pub(super) async fn prev_page(&mut self) {
        if self.browser.prev_page() {
            self.load_categories().await;
        }
    }

    pub(super) async fn change_page_size(&mut self, delta: i32) {
        if self.browser.cycle_page_size(delta) {
            self.load_categories().await;
        }
    }

    pub(super) async fn sort_selected_column(&mut self, order: SortOrder) {
        let Some(field) = self.selected_field() else {
            return;
        };
        self.browser.sort(field, order);
        self.load_categories().await;
    }

    pub(super) async fn apply_filter(&mut self, field: CategoryField, value: &str) {
        self.browser.filter(field, value);
        self.table_state.select(None);
        self.load_categories().await;
    }

    pub(super) async fn reset_filter(&mut self) {
        self.browser.reset();
        self.table_state.select(None);
        self.load_categories().await;
    }

    pub(super) fn open_create(&mut self) {
        self.active_modal = Some(ActiveModal::CategoryForm(CategoryFormModal::create()));
    }

    pub(super) fn open_update(&mut self) {
        match self.selected_category() {
            Some(category) => {
                let modal = CategoryFormModal::update(category);
                self.active_modal = Some(ActiveModal::CategoryForm(modal));
            }
            None => self.status_message = "select a category first".to_string(),
        }
    }

    pub(super) fn open_delete(&mut self) {
        match self.selected_category() {
            Some(category) => {
                let modal = ConfirmDeleteModal::new(category.id, category.label.clone());
                self.active_modal = Some(ActiveModal::ConfirmDelete(modal));
            }
            None => self.status_message = "select a category first".to_string(),
        }
    }

    pub(super) fn open_filter(&mut self) {
        let Some(field) = self.selected_field() else {
            return;
        };
        let query = self.browser.query();
        let current = match query.active_filter() {
            Some((active, value)) if active == field => value,
            _ => "",
        };
        let header = COLUMNS[self.selected_column];
        self.active_modal = Some(ActiveModal::Filter(FilterModal::new(field, header, current)));
    }

    pub(super) fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub(super) fn active_modal_mut(&mut self) -> Option<&mut ActiveModal> {
        self.active_modal.as_mut()
    }

    pub(super) async fn submit_category_form(&mut self) {
        let Some(ActiveModal::CategoryForm(modal)) = self.active_modal.as_ref() else {
            return;
        };
        let mode = modal.mode().clone();
        let draft = modal.draft().clone();

        match mode {
            FormMode::Create => {
                let new = match draft.to_new_category() {
                    Ok(new) => new,
                    Err(errors) => {
                        self.status_message = errors.join("; ");
                        return;
                    }
                };
                match self.auth.client().create_category(&new).await {
                    Ok(created) => {
                        self.close_modal();
                        self.toasts.push(Toast::success(toast::CREATE_SUCCESS));
                        self.status_message = format!("created {}", created.label);
                        self.load_categories().await;
                    }
                    Err(err) => self.handle_failure(err, Some(toast::CREATE_FAILURE)),
                }
            }
            FormMode::Update(original) => {
                let update = match draft.to_update(&original) {
                    Ok(update) => update,
                    Err(errors) => {
                        self.status_message = errors.join("; ");
                        return;
                    }
                };
                if update.is_empty() {
                    self.close_modal();
                    self.status_message = "Nothing to update".to_string();
                    return;
                }
                match self.auth.client().update_category(original.id, &update).await {
                    Ok(updated) => {
                        self.close_modal();
                        self.browser.replace_row(updated);
                        self.toasts.push(Toast::success(toast::UPDATE_SUCCESS));
                        self.status_message = toast::UPDATE_SUCCESS.to_string();
                    }
                    Err(err) => self.handle_failure(err, Some(toast::UPDATE_FAILURE)),
                }
            }
        }
    }

    pub(super) async fn confirm_delete(&mut self, id: Uuid) {
        self.close_modal();
        match self.auth.client().delete_category(id).await {
            Ok(_) => {
                self.browser.remove_row(id);
                self.clamp_selection();
                self.toasts.push(Toast::success(toast::DELETE_SUCCESS));
                self.status_message = toast::DELETE_SUCCESS.to_string();
                if self.browser.rows().is_empty() && self.browser.prev_page() {
                    self.load_categories().await;
                }
            }
            Err(err) => self.handle_failure(err, Some(toast::DELETE_FAILURE)),
        }
    }
}
