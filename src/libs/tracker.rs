//! Input activity tracking.
//!
//! Maintains the time of the last input event (globally and per device) and
//! debounced per-device active-time accumulators. Event callbacks arrive from
//! the input listener thread while the scheduler reads from the tick loop, so
//! all state lives behind a single mutex shared through cloned handles.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

/// Gap between same-device events above which time is not credited as active.
/// The same window decides whether the user counts as "currently active".
pub const DEBOUNCE_THRESHOLD: f64 = 1.0;

/// Read-only snapshot of accumulated per-device active time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityStats {
    pub mouse_active_seconds: f64,
    pub keyboard_active_seconds: f64,
}

#[derive(Debug)]
struct TrackerState {
    last_event: Instant,
    last_mouse_event: Option<Instant>,
    last_keyboard_event: Option<Instant>,
    mouse_active_seconds: f64,
    keyboard_active_seconds: f64,
}

/// Tracks user input activity across the mouse and keyboard.
///
/// Cloning produces another handle to the same shared state, so one clone can
/// live inside the listener callback while the scheduler polls the original.
#[derive(Debug, Clone)]
pub struct ActivityTracker {
    state: Arc<Mutex<TrackerState>>,
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self::with_origin(Instant::now())
    }

    /// Creates a tracker whose "last event" starts at the given instant.
    ///
    /// Monitoring begins as if the user had just been active, matching the
    /// listener start moment. Tests use this to pin the time base.
    pub fn with_origin(origin: Instant) -> Self {
        ActivityTracker {
            state: Arc::new(Mutex::new(TrackerState {
                last_event: origin,
                last_mouse_event: None,
                last_keyboard_event: None,
                mouse_active_seconds: 0.0,
                keyboard_active_seconds: 0.0,
            })),
        }
    }

    /// Records a mouse event (move, click or scroll) at the given instant.
    ///
    /// The gap since the previous mouse event is credited to the mouse
    /// accumulator only when it stays under [`DEBOUNCE_THRESHOLD`]. The first
    /// event after an idle stretch therefore credits nothing: a mouse that
    /// sat untouched for five minutes must not turn those minutes into
    /// active time.
    pub fn record_mouse_event(&self, now: Instant) {
        let mut state = self.state.lock();
        if let Some(prev) = state.last_mouse_event {
            // saturating_duration_since clamps a backwards clock step to zero
            let gap = now.saturating_duration_since(prev).as_secs_f64();
            if gap < DEBOUNCE_THRESHOLD {
                state.mouse_active_seconds += gap;
            }
        }
        state.last_mouse_event = Some(now);
        state.last_event = state.last_event.max(now);
    }

    /// Records a keyboard event at the given instant.
    ///
    /// Same debounce rule as [`Self::record_mouse_event`], applied to the
    /// keyboard accumulator.
    pub fn record_keyboard_event(&self, now: Instant) {
        let mut state = self.state.lock();
        if let Some(prev) = state.last_keyboard_event {
            let gap = now.saturating_duration_since(prev).as_secs_f64();
            if gap < DEBOUNCE_THRESHOLD {
                state.keyboard_active_seconds += gap;
            }
        }
        state.last_keyboard_event = Some(now);
        state.last_event = state.last_event.max(now);
    }

    /// Seconds elapsed since the last input event on any device.
    pub fn seconds_since_last_activity(&self, now: Instant) -> f64 {
        let state = self.state.lock();
        now.saturating_duration_since(state.last_event).as_secs_f64()
    }

    /// Whether an input event arrived within the last second.
    pub fn is_currently_active(&self, now: Instant) -> bool {
        self.seconds_since_last_activity(now) < DEBOUNCE_THRESHOLD
    }

    /// Snapshot of the per-device accumulators, rounded to two decimals.
    pub fn stats(&self) -> ActivityStats {
        let state = self.state.lock();
        ActivityStats {
            mouse_active_seconds: round2(state.mouse_active_seconds),
            keyboard_active_seconds: round2(state.keyboard_active_seconds),
        }
    }
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
