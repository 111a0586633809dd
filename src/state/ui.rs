//! Transient UI chrome state, currently just the toast notification slot.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`session`, `journal`)
//! so the session contract stays free of notification plumbing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastTone {
    #[default]
    Info,
    Success,
    Error,
}

/// A transient user-visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub tone: ToastTone,
}

impl Toast {
    #[must_use]
    pub fn success(title: &str, message: &str) -> Self {
        Self { title: title.to_owned(), message: message.to_owned(), tone: ToastTone::Success }
    }

    #[must_use]
    pub fn error(title: &str, message: &str) -> Self {
        Self { title: title.to_owned(), message: message.to_owned(), tone: ToastTone::Error }
    }
}

/// App-level UI state provided via context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// The toast currently on screen, if any. New toasts replace it.
    pub toast: Option<Toast>,
    /// Bumped on every `push_toast` so auto-dismiss timers can tell whether
    /// the toast they were armed for is still the visible one.
    pub toast_seq: u64,
}

impl UiState {
    pub fn push_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
        self.toast_seq += 1;
    }

    pub fn clear_toast(&mut self) {
        self.toast = None;
    }
}
