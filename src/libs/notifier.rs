//! Break notification presentation.
//!
//! The scheduler talks to a [`Notifier`] and never to a concrete window
//! toolkit. A notifier returns a [`NotificationHandle`] that resolves to
//! exactly one [`CloseReason`] once the reminder goes away. The crate ships
//! [`ConsoleNotifier`], a text presenter that closes itself after the
//! configured delay; graphical presenters implement the same trait and
//! additionally honor the close-button delay before allowing manual
//! dismissal.

use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use tokio::sync::oneshot;
use tokio::time::Duration;

/// How a reminder went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The user dismissed the reminder themselves.
    UserClosed,
    /// The reminder timed out and closed on its own.
    AutoClosed,
}

/// A single reminder to display. Built per trigger, not retained afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    /// Escalated variant shown after repeated dismissals.
    pub warning: bool,
    /// Message overriding the default reminder text.
    pub message: Option<String>,
}

/// Close side of an open reminder. Consumed by reporting the outcome.
pub struct NotificationCloser {
    tx: oneshot::Sender<CloseReason>,
}

impl NotificationCloser {
    pub fn close(self, reason: CloseReason) {
        // The receiver may already be gone on shutdown.
        let _ = self.tx.send(reason);
    }
}

/// Awaitable close outcome of a reminder that was shown.
pub struct NotificationHandle {
    rx: oneshot::Receiver<CloseReason>,
}

impl NotificationHandle {
    /// Creates a connected closer/handle pair.
    pub fn channel() -> (NotificationCloser, NotificationHandle) {
        let (tx, rx) = oneshot::channel();
        (NotificationCloser { tx }, NotificationHandle { rx })
    }

    /// Waits for the close outcome.
    ///
    /// A presenter that drops its closer without reporting counts as an
    /// automatic close, so the scheduler always receives exactly one outcome.
    pub async fn closed(self) -> CloseReason {
        self.rx.await.unwrap_or(CloseReason::AutoClosed)
    }
}

/// Displays break reminders.
pub trait Notifier: Send {
    /// Shows a reminder and returns the handle resolving to its close
    /// outcome. An `Err` means the reminder could not be displayed at all;
    /// the caller is expected to fall back to a plain text reminder rather
    /// than skip it.
    fn notify(&mut self, request: &NotificationRequest) -> Result<NotificationHandle>;
}

/// Text presenter writing reminders to the console.
///
/// There is no close button to press on a terminal, so every reminder ends
/// as an automatic close after `auto_close_seconds`.
pub struct ConsoleNotifier {
    auto_close_seconds: u64,
}

impl ConsoleNotifier {
    pub fn new(auto_close_seconds: u64) -> Self {
        ConsoleNotifier { auto_close_seconds }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, request: &NotificationRequest) -> Result<NotificationHandle> {
        print_reminder(request);
        Ok(auto_close_handle(self.auto_close_seconds))
    }
}

/// Prints the reminder text for a request.
fn print_reminder(request: &NotificationRequest) {
    match &request.message {
        Some(message) => msg_print!(Message::ReminderCustom(message.clone()), true),
        None => msg_print!(Message::ReminderBreakTime, true),
    }
}

/// Text-only fallback used when a presenter fails to display a reminder.
///
/// Prints the reminder and synthesizes the auto-close outcome so the
/// scheduler cycle still restarts normally.
pub fn text_fallback(request: &NotificationRequest, auto_close_seconds: u64) -> NotificationHandle {
    print_reminder(request);
    auto_close_handle(auto_close_seconds)
}

fn auto_close_handle(auto_close_seconds: u64) -> NotificationHandle {
    let (closer, handle) = NotificationHandle::channel();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(auto_close_seconds)).await;
        closer.close(CloseReason::AutoClosed);
    });
    handle
}
