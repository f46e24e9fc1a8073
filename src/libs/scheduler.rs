//! Break scheduling state machine.
//!
//! Driven once per poll period by the reminder service, the scheduler
//! accumulates continuous active time and decides when a reminder must be
//! raised. It owns no timer of its own: the host loop supplies the tick
//! instants and feeds the close outcome of every reminder back in.

use crate::libs::config::ReminderConfig;
use crate::libs::messages::Message;
use crate::libs::notifier::{text_fallback, CloseReason, NotificationHandle, NotificationRequest, Notifier};
use crate::libs::tracker::ActivityTracker;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use std::time::Instant;

/// The two operating modes of the scheduler.
///
/// There is no terminal mode; the machine runs for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerMode {
    /// Accumulating continuous active time towards the next reminder.
    MonitoringActivity,
    /// A reminder was raised; waiting out the interval before repeating it.
    WaitingForTimer,
}

/// Polling state machine deciding when to raise break reminders.
pub struct BreakScheduler {
    pub config: ReminderConfig,
    pub tracker: ActivityTracker,
    notifier: Box<dyn Notifier>,
    pub mode: SchedulerMode,
    pub accumulated_active_seconds: f64,
    pub last_tick: Instant,
    pub window_open_since: Option<Instant>,
    /// Guards against ticks and duplicate close signals while a reminder
    /// window is up.
    pub window_open: bool,
    /// Consecutive user dismissals since the last escalation.
    pub dismiss_count: u32,
    pub reminders_shown: u32,
    pub total_dismissals: u32,
}

impl BreakScheduler {
    pub fn new(config: ReminderConfig, tracker: ActivityTracker, notifier: Box<dyn Notifier>, now: Instant) -> Self {
        BreakScheduler {
            config,
            tracker,
            notifier,
            mode: SchedulerMode::MonitoringActivity,
            accumulated_active_seconds: 0.0,
            last_tick: now,
            window_open_since: None,
            window_open: false,
            dismiss_count: 0,
            reminders_shown: 0,
            total_dismissals: 0,
        }
    }

    /// Advances the state machine by one tick.
    ///
    /// Returns the handle of a reminder raised on this tick, if any. Ticks
    /// that arrive while a reminder window is open are ignored entirely:
    /// open-window time is neither active nor idle time.
    pub fn on_tick(&mut self, now: Instant) -> Result<Option<NotificationHandle>> {
        if self.window_open {
            return Ok(None);
        }

        match self.mode {
            SchedulerMode::MonitoringActivity => {
                let elapsed = now.saturating_duration_since(self.last_tick).as_secs_f64();
                let idle = self.tracker.seconds_since_last_activity(now);

                if idle < self.config.inactivity_timeout as f64 && self.tracker.is_currently_active(now) {
                    self.accumulated_active_seconds += elapsed;
                } else {
                    // Idle gap: continuous use is over, start counting afresh.
                    self.accumulated_active_seconds = 0.0;
                }
                self.last_tick = now;

                if self.accumulated_active_seconds >= self.config.notification_interval as f64 {
                    msg_debug!(format!("activity threshold reached, stats: {:?}", self.tracker.stats()));
                    let handle = self.trigger_reminder()?;
                    self.mode = SchedulerMode::WaitingForTimer;
                    self.window_open_since = Some(now);
                    return Ok(Some(handle));
                }
                Ok(None)
            }
            SchedulerMode::WaitingForTimer => {
                // Reached only when the previous reminder never reported a
                // close outcome; repeat it once per interval.
                if let Some(opened) = self.window_open_since {
                    if now.saturating_duration_since(opened).as_secs_f64() > self.config.notification_interval as f64 {
                        let handle = self.trigger_reminder()?;
                        self.window_open_since = Some(now);
                        return Ok(Some(handle));
                    }
                }
                Ok(None)
            }
        }
    }

    /// Builds and displays a reminder.
    ///
    /// After `dismiss_threshold` consecutive user dismissals the reminder
    /// escalates to the warning variant, and the dismissal streak resets.
    /// A presenter that fails to display fails open to a plain text
    /// reminder so the break is never silently skipped.
    pub fn trigger_reminder(&mut self) -> Result<NotificationHandle> {
        let warning = self.dismiss_count >= self.config.dismiss_threshold;
        let request = NotificationRequest {
            warning,
            message: warning.then(|| Message::ReminderEscalation(self.dismiss_count).to_string()),
        };
        if warning {
            self.dismiss_count = 0;
        }
        self.reminders_shown += 1;
        self.window_open = true;

        match self.notifier.notify(&request) {
            Ok(handle) => Ok(handle),
            Err(e) => {
                msg_warning!(Message::NotifierDisplayFailed(e.to_string()));
                Ok(text_fallback(&request, self.config.auto_close_seconds))
            }
        }
    }

    /// Feeds the close outcome of a reminder back into the machine.
    ///
    /// Whatever the outcome, the monitoring cycle restarts cleanly: the
    /// accumulator drops to zero and `last_tick` moves to `now`, so the time
    /// the window spent open is never double-counted. Duplicate close
    /// signals for the same reminder are ignored.
    pub fn on_notification_closed(&mut self, reason: CloseReason, now: Instant) {
        if !self.window_open {
            return;
        }
        self.window_open = false;

        if reason == CloseReason::UserClosed {
            self.dismiss_count += 1;
            self.total_dismissals += 1;
        }
        self.accumulated_active_seconds = 0.0;
        self.last_tick = now;
        self.mode = SchedulerMode::MonitoringActivity;
    }
}
