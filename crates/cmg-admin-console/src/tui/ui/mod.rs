/*
[INPUT]:  TUI app state for UI components
[OUTPUT]: UI component render functions and module exports
[POS]:    TUI UI module root
[UPDATE]: When adding or removing panels
*/

mod layout;
mod logs;
mod pagination;
mod status;
mod table;
mod toasts;

pub mod modal;

pub(in crate::tui) use layout::draw_tabs;
pub(in crate::tui) use logs::draw_logs;
pub(in crate::tui) use pagination::draw_pagination;
pub(in crate::tui) use status::draw_session_status;
pub(in crate::tui) use table::draw_category_table;
pub(in crate::tui) use toasts::draw_toasts;
