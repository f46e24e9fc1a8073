//! The break reminder service.
//!
//! One context object wires the tracker, the input listener, the scheduler
//! and the presenter together and drives them from a fixed-rate ticker. The
//! ticker belongs to the service, not to the scheduler: the state machine
//! only ever sees tick instants and close outcomes.

use crate::libs::config::ReminderConfig;
use crate::libs::listener::InputListener;
use crate::libs::messages::Message;
use crate::libs::notifier::{ConsoleNotifier, Notifier};
use crate::libs::scheduler::BreakScheduler;
use crate::libs::tracker::ActivityTracker;
use crate::msg_info;
use anyhow::Result;
use std::time::Instant;
use tokio::time::{self, Duration, MissedTickBehavior};

/// Owns the full reminder pipeline for one process.
pub struct Reminder {
    config: ReminderConfig,
    pub tracker: ActivityTracker,
    pub scheduler: BreakScheduler,
    listener: InputListener,
}

impl Reminder {
    /// Builds the pipeline with the console presenter.
    pub fn new(config: ReminderConfig) -> Self {
        let notifier = Box::new(ConsoleNotifier::new(config.auto_close_seconds));
        Self::with_notifier(config, notifier)
    }

    /// Builds the pipeline around a caller-supplied presenter.
    pub fn with_notifier(config: ReminderConfig, notifier: Box<dyn Notifier>) -> Self {
        let tracker = ActivityTracker::new();
        let listener = InputListener::new(tracker.clone());
        let scheduler = BreakScheduler::new(config.clone(), tracker.clone(), notifier, Instant::now());
        Reminder {
            config,
            tracker,
            scheduler,
            listener,
        }
    }

    /// Starts the input listener and runs the tick loop until cancelled.
    ///
    /// Ticks are serialized by construction: while a reminder is on screen
    /// the loop awaits its close outcome, so the scheduler never observes a
    /// tick with a window open, and the next tick is not armed before the
    /// previous handler returns.
    pub async fn run(&mut self) -> Result<()> {
        self.listener.start()?;
        msg_info!(Message::ReminderStarted {
            notification_interval: self.config.notification_interval,
            inactivity_timeout: self.config.inactivity_timeout,
            poll_interval: self.config.poll_interval,
        });

        let mut ticker = time::interval(Duration::from_millis(self.config.poll_interval));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if let Some(handle) = self.scheduler.on_tick(Instant::now())? {
                let reason = handle.closed().await;
                self.scheduler.on_notification_closed(reason, Instant::now());
            }
        }
    }

    /// Stops the input listener. Safe to call more than once.
    pub fn stop(&mut self) {
        self.listener.stop();
    }
}
