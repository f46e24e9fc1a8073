//! Global input hook glue.
//!
//! Bridges the blocking `rdev` listener to the [`ActivityTracker`]. Mouse
//! moves, clicks and scrolls feed the mouse accumulator; key presses feed the
//! keyboard accumulator. The listener restarts itself if the OS hook errors
//! mid-run.

use crate::libs::messages::Message;
use crate::libs::tracker::ActivityTracker;
use crate::{msg_error_anyhow, msg_warning};
use anyhow::Result;
use rdev::{listen, Event, EventType};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct InputListener {
    tracker: ActivityTracker,
    running: Arc<AtomicBool>,
    started: bool,
}

impl InputListener {
    pub fn new(tracker: ActivityTracker) -> Self {
        InputListener {
            tracker,
            running: Arc::new(AtomicBool::new(false)),
            started: false,
        }
    }

    /// Spawns the listener thread.
    ///
    /// Failure to spawn the thread is fatal and surfaced to the operator;
    /// a hook error after startup only logs a warning and retries, so one
    /// transient failure does not end monitoring for the whole session.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Ok(());
        }
        self.running.store(true, Ordering::SeqCst);

        let tracker = self.tracker.clone();
        let running = self.running.clone();
        std::thread::Builder::new()
            .name("ergon-input".to_string())
            .spawn(move || {
                while running.load(Ordering::SeqCst) {
                    let tracker_for_listener = tracker.clone();
                    let running_for_listener = running.clone();
                    if let Err(e) = listen(move |event: Event| {
                        if !running_for_listener.load(Ordering::SeqCst) {
                            return;
                        }
                        let now = Instant::now();
                        match event.event_type {
                            EventType::KeyPress(_) => tracker_for_listener.record_keyboard_event(now),
                            EventType::MouseMove { .. } | EventType::ButtonPress(_) | EventType::Wheel { .. } => {
                                tracker_for_listener.record_mouse_event(now)
                            }
                            _ => {}
                        }
                    }) {
                        msg_warning!(Message::ListenerHookError(format!("{:?}", e)));
                        std::thread::sleep(Duration::from_secs(1));
                    } else {
                        // rdev::listen blocks for the process lifetime; a
                        // clean return means the hook is gone for good.
                        break;
                    }
                }
            })
            .map_err(|e| msg_error_anyhow!(Message::ListenerSpawnFailed(e.to_string())))?;

        self.started = true;
        Ok(())
    }

    /// Marks the listener stopped; subsequent hook callbacks become no-ops.
    ///
    /// `rdev` offers no unhook, so the OS resource itself is released at
    /// process exit.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.started = false;
    }
}
