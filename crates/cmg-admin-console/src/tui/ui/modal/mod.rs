/*
[INPUT]:  Modal state, fields, and key events
[OUTPUT]: Modal rendering output and modal action results
[POS]:    TUI UI modal module root
[UPDATE]: When adding modal kinds or field types
*/

mod category_form;
mod confirm;
mod filter;
mod login;

pub(in crate::tui) use category_form::{CategoryFormModal, FormMode};
pub(in crate::tui) use confirm::ConfirmDeleteModal;
pub(in crate::tui) use filter::FilterModal;
pub(in crate::tui) use login::LoginModal;

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::runtime::border_style;

pub(in crate::tui) struct Modal {
    pub(super) title: String,
    pub(super) description: Option<String>,
    pub(super) focus_index: usize,
    pub(super) fields: Vec<Field>,
}

pub(in crate::tui) enum Field {
    TextInput {
        label: String,
        value: String,
        masked: bool,
    },
    Select {
        label: String,
        options: Vec<String>,
        selected: usize,
    },
    Button {
        label: String,
        action: ModalAction,
    },
}

impl Field {
    pub(super) fn text(label: &str, value: &str) -> Self {
        Field::TextInput {
            label: label.to_string(),
            value: value.to_string(),
            masked: false,
        }
    }

    pub(super) fn button(label: &str, action: ModalAction) -> Self {
        Field::Button {
            label: label.to_string(),
            action,
        }
    }

    /// Current text of a text input at `index`
    pub(super) fn text_at(fields: &[Field], index: usize) -> Option<&str> {
        match fields.get(index) {
            Some(Field::TextInput { value, .. }) => Some(value.as_str()),
            _ => None,
        }
    }

    fn display(&self) -> String {
        match self {
            Field::TextInput {
                label,
                value,
                masked,
            } => {
                if *masked {
                    format!("{label}: {}", "*".repeat(value.chars().count()))
                } else {
                    format!("{label}: {value}")
                }
            }
            Field::Select {
                label,
                options,
                selected,
            } => {
                let selected_value = options.get(*selected).map(String::as_str).unwrap_or("-");
                format!("{label}: < {selected_value} >")
            }
            Field::Button { label, .. } => format!("[{label}]"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui) enum ModalAction {
    Submit,
    Cancel,
    None,
}

pub(in crate::tui) fn draw_modal(frame: &mut ratatui::Frame, area: Rect, modal: &Modal) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(modal.title.as_str());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    if let Some(description) = &modal.description {
        lines.push(Line::from(description.as_str()));
        lines.push(Line::from(""));
    }
    let first_field_row = lines.len();

    for (index, field) in modal.fields.iter().enumerate() {
        let style = if index == modal.focus_index {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(field.display(), style)));
    }

    if let Some(field @ Field::TextInput { .. }) = modal.fields.get(modal.focus_index) {
        let column = UnicodeWidthStr::width(field.display().as_str()) as u16;
        let row = (first_field_row + modal.focus_index) as u16;
        if column < inner.width && row < inner.height {
            frame.set_cursor_position(Position::new(inner.x + column, inner.y + row));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

pub(in crate::tui) fn handle_modal_key(modal: &mut Modal, key: KeyCode) -> ModalAction {
    let field_count = modal.fields.len();
    match key {
        KeyCode::Esc => ModalAction::Cancel,
        KeyCode::Tab => {
            if field_count > 0 {
                modal.focus_index = (modal.focus_index + 1) % field_count;
            }
            ModalAction::None
        }
        KeyCode::BackTab => {
            if field_count > 0 {
                modal.focus_index = (modal.focus_index + field_count - 1) % field_count;
            }
            ModalAction::None
        }
        KeyCode::Up | KeyCode::Left => {
            if let Some(Field::Select { selected, .. }) = modal.fields.get_mut(modal.focus_index) {
                *selected = selected.saturating_sub(1);
            }
            ModalAction::None
        }
        KeyCode::Down | KeyCode::Right => {
            if let Some(Field::Select {
                selected, options, ..
            }) = modal.fields.get_mut(modal.focus_index)
            {
                if *selected + 1 < options.len() {
                    *selected += 1;
                }
            }
            ModalAction::None
        }
        KeyCode::Backspace => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.pop();
            }
            ModalAction::None
        }
        KeyCode::Char(ch) => {
            if let Some(Field::TextInput { value, .. }) = modal.fields.get_mut(modal.focus_index) {
                value.push(ch);
            }
            ModalAction::None
        }
        KeyCode::Enter => {
            if let Some(Field::Button { action, .. }) = modal.fields.get(modal.focus_index) {
                return *action;
            }
            if field_count > 0 {
                modal.focus_index = (modal.focus_index + 1) % field_count;
            }
            ModalAction::None
        }
        _ => ModalAction::None,
    }
}
