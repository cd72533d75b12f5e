/*
[INPUT]:  Outcomes of operator actions
[OUTPUT]: Short-lived notifications aged by UI ticks
[POS]:    Operator notifications for the successor panel
[UPDATE]: When notification wording or lifetime changes
*/

use std::collections::VecDeque;

pub const MAX_TOASTS: usize = 5;
/// 250 ms ticks, roughly five seconds
pub const DEFAULT_TOAST_TICKS: u32 = 20;

pub const LOGIN_SUCCESS: &str = "You were logged in successfully";
pub const CREATE_SUCCESS: &str = "Category was created successfully";
pub const CREATE_FAILURE: &str = "Error during category creation";
pub const UPDATE_SUCCESS: &str = "Category was updated successfully";
pub const UPDATE_FAILURE: &str = "Error during category update";
pub const DELETE_SUCCESS: &str = "Category deleted successfully";
pub const DELETE_FAILURE: &str = "Error during category deletion";
pub const SESSION_EXPIRED: &str = "Session expired, please log in again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub text: String,
    pub ticks_left: u32,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Success".to_string(),
            text: text.into(),
            ticks_left: DEFAULT_TOAST_TICKS,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            title: "Error".to_string(),
            text: text.into(),
            ticks_left: DEFAULT_TOAST_TICKS,
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Age every toast by one tick and drop the expired ones
    pub fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
        }
        self.toasts.retain(|toast| toast.ticks_left > 0);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_newest_five() {
        let mut queue = ToastQueue::new();
        for index in 0..7 {
            queue.push(Toast::success(format!("toast {index}")));
        }
        assert_eq!(queue.len(), MAX_TOASTS);
        assert_eq!(queue.visible().next().unwrap().text, "toast 2");
    }

    #[test]
    fn test_tick_expires_toasts() {
        let mut queue = ToastQueue::new();
        queue.push(Toast {
            ticks_left: 1,
            ..Toast::error(DELETE_FAILURE)
        });
        queue.push(Toast::success(DELETE_SUCCESS));

        queue.tick();
        assert_eq!(queue.len(), 1);
        let remaining = queue.visible().next().unwrap();
        assert_eq!(remaining.kind, ToastKind::Success);
        assert_eq!(remaining.title, "Success");
        assert_eq!(remaining.ticks_left, DEFAULT_TOAST_TICKS - 1);
    }
}
