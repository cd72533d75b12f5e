/*
[INPUT]:  AuthManager, log buffer and terminal input
[OUTPUT]: Ratatui-based categories panel
[POS]:    TUI module for the cmg-admin binary
[UPDATE]: When changing TUI layout, keybindings, or runtime controls
*/

mod app;
mod events;
mod runtime;
mod terminal;
mod ui;

pub use runtime::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};
