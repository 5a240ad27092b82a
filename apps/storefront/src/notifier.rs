//! # Notifiers
//!
//! Where cart notices end up. The storefront UI shows them as toasts; the
//! CLI prints them; tests record them.

use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rocketshoes_core::{Locale, Notice, NoticeKind, Severity};

/// Surfaces transient user-facing messages.
///
/// Called synchronously, at most once per cart operation.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

/// Prints notices to stderr in the configured locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    locale: Locale,
}

impl ConsoleNotifier {
    pub fn new(locale: Locale) -> Self {
        ConsoleNotifier { locale }
    }

    /// The line printed for a notice.
    pub fn render(&self, notice: Notice) -> String {
        let marker = match notice.severity {
            Severity::Success => "✔",
            Severity::Error => "✖",
        };
        format!("{} {}", marker, notice.message(self.locale))
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let line = self.render(notice);
        // A closed stderr is not worth failing a cart operation over.
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

/// Keeps every notice in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.lock().clone()
    }

    pub fn kinds(&self) -> Vec<NoticeKind> {
        self.lock().iter().map(|n| n.kind).collect()
    }

    /// Drains the recorded notices.
    pub fn take(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notice>> {
        self.notices.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.lock().push(notice);
    }
}
