/*
[INPUT]:  Public API exports for cmg-admin-console crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod browser;
pub mod cli;
pub mod config;
pub mod form;
pub mod toast;
pub mod tui;

// Re-export main types for convenience
pub use browser::CategoryBrowser;
pub use config::ConsoleConfig;
pub use form::{CategoryDraft, LoginDraft};
pub use toast::{Toast, ToastKind, ToastQueue};
