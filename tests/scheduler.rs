#[cfg(test)]
mod tests {
    use anyhow::{anyhow, Result};
    use ergon::libs::config::ReminderConfig;
    use ergon::libs::notifier::{CloseReason, NotificationHandle, NotificationRequest, Notifier};
    use ergon::libs::scheduler::{BreakScheduler, SchedulerMode};
    use ergon::libs::tracker::ActivityTracker;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    /// Presenter double that records every request and never resolves the
    /// close outcome on its own.
    #[derive(Clone, Default)]
    struct RecordingNotifier {
        requests: Arc<Mutex<Vec<NotificationRequest>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, request: &NotificationRequest) -> Result<NotificationHandle> {
            self.requests.lock().push(request.clone());
            let (_closer, handle) = NotificationHandle::channel();
            Ok(handle)
        }
    }

    /// Presenter double that always fails to display.
    struct FailingNotifier;

    impl Notifier for FailingNotifier {
        fn notify(&mut self, _request: &NotificationRequest) -> Result<NotificationHandle> {
            Err(anyhow!("display is gone"))
        }
    }

    fn config() -> ReminderConfig {
        ReminderConfig {
            notification_interval: 5,
            inactivity_timeout: 5,
            poll_interval: 1000,
            dismiss_threshold: 3,
            auto_close_seconds: 0,
            close_button_delay: 0,
        }
    }

    fn scheduler(base: Instant) -> (BreakScheduler, ActivityTracker, RecordingNotifier) {
        let tracker = ActivityTracker::with_origin(base);
        let notifier = RecordingNotifier::default();
        let scheduler = BreakScheduler::new(config(), tracker.clone(), Box::new(notifier.clone()), base);
        (scheduler, tracker, notifier)
    }

    #[test]
    fn test_reminder_fires_exactly_at_threshold() {
        let base = Instant::now();
        let (mut scheduler, tracker, notifier) = scheduler(base);

        for i in 1..=5u64 {
            let now = base + Duration::from_secs(i);
            tracker.record_mouse_event(now);
            let fired = scheduler.on_tick(now).unwrap();
            if i < 5 {
                assert!(fired.is_none(), "no reminder before tick 5");
                assert_eq!(scheduler.mode, SchedulerMode::MonitoringActivity);
            } else {
                assert!(fired.is_some(), "reminder fires exactly at tick 5");
            }
        }

        assert_eq!(scheduler.mode, SchedulerMode::WaitingForTimer);
        assert_eq!(scheduler.window_open_since, Some(base + Duration::from_secs(5)));
        assert_eq!(notifier.requests.lock().len(), 1);
    }

    #[test]
    fn test_inactivity_resets_accumulator() {
        let base = Instant::now();
        let (mut scheduler, tracker, notifier) = scheduler(base);

        for i in 1..=3u64 {
            let now = base + Duration::from_secs(i);
            tracker.record_mouse_event(now);
            scheduler.on_tick(now).unwrap();
        }
        assert_eq!(scheduler.accumulated_active_seconds, 3.0);

        // Six silent ticks: the streak dies, nothing ever fires
        for i in 4..=9u64 {
            let fired = scheduler.on_tick(base + Duration::from_secs(i)).unwrap();
            assert!(fired.is_none());
        }

        assert_eq!(scheduler.accumulated_active_seconds, 0.0);
        assert_eq!(scheduler.mode, SchedulerMode::MonitoringActivity);
        assert!(notifier.requests.lock().is_empty());
    }

    #[test]
    fn test_waiting_mode_repeats_after_interval() {
        let base = Instant::now();
        let (mut scheduler, _tracker, notifier) = scheduler(base);
        scheduler.mode = SchedulerMode::WaitingForTimer;
        scheduler.window_open_since = Some(base);

        // Exactly the interval is not yet past it
        assert!(scheduler.on_tick(base + Duration::from_secs(5)).unwrap().is_none());

        let fired = scheduler.on_tick(base + Duration::from_secs(6)).unwrap();
        assert!(fired.is_some(), "one repeat fires once the interval is exceeded");
        assert_eq!(scheduler.window_open_since, Some(base + Duration::from_secs(6)));
        assert_eq!(scheduler.mode, SchedulerMode::WaitingForTimer);

        // The repeat opened a window; further ticks are suppressed
        assert!(scheduler.on_tick(base + Duration::from_secs(20)).unwrap().is_none());
        assert_eq!(notifier.requests.lock().len(), 1);
    }

    #[test]
    fn test_ticks_suppressed_while_window_open() {
        let base = Instant::now();
        let (mut scheduler, tracker, _notifier) = scheduler(base);

        scheduler.trigger_reminder().unwrap();
        let accumulated = scheduler.accumulated_active_seconds;

        // Activity while the reminder is on screen must not count
        let now = base + Duration::from_secs(1);
        tracker.record_mouse_event(now);
        assert!(scheduler.on_tick(now).unwrap().is_none());
        assert_eq!(scheduler.accumulated_active_seconds, accumulated);
        assert_eq!(scheduler.last_tick, base);
    }

    #[test]
    fn test_close_restarts_monitoring_without_double_counting() {
        let base = Instant::now();
        let (mut scheduler, tracker, _notifier) = scheduler(base);

        for i in 1..=5u64 {
            let now = base + Duration::from_secs(i);
            tracker.record_mouse_event(now);
            scheduler.on_tick(now).unwrap();
        }
        assert_eq!(scheduler.mode, SchedulerMode::WaitingForTimer);

        // The window stayed open for a minute before closing on its own
        let closed_at = base + Duration::from_secs(65);
        scheduler.on_notification_closed(CloseReason::AutoClosed, closed_at);
        assert_eq!(scheduler.mode, SchedulerMode::MonitoringActivity);
        assert_eq!(scheduler.accumulated_active_seconds, 0.0);
        assert_eq!(scheduler.dismiss_count, 0, "an automatic close is not a dismissal");

        // The first tick after the close only counts time since the close
        let now = closed_at + Duration::from_secs(1);
        tracker.record_mouse_event(now);
        scheduler.on_tick(now).unwrap();
        assert_eq!(scheduler.accumulated_active_seconds, 1.0);
    }

    #[test]
    fn test_escalation_after_three_dismissals() {
        let base = Instant::now();
        let (mut scheduler, _tracker, notifier) = scheduler(base);

        for _ in 0..3 {
            scheduler.trigger_reminder().unwrap();
            scheduler.on_notification_closed(CloseReason::UserClosed, base);
        }
        assert_eq!(scheduler.dismiss_count, 3);

        scheduler.trigger_reminder().unwrap();

        let requests = notifier.requests.lock();
        assert!(!requests[2].warning, "the third reminder is still the normal variant");
        assert!(requests[3].warning, "the fourth reminder escalates");
        assert!(requests[3].message.is_some(), "the warning variant carries its message");
        drop(requests);

        assert_eq!(scheduler.dismiss_count, 0, "escalating resets the dismissal streak");
        assert_eq!(scheduler.total_dismissals, 3);
    }

    #[test]
    fn test_duplicate_close_signal_is_ignored() {
        let base = Instant::now();
        let (mut scheduler, _tracker, _notifier) = scheduler(base);

        scheduler.trigger_reminder().unwrap();
        scheduler.on_notification_closed(CloseReason::UserClosed, base);
        scheduler.on_notification_closed(CloseReason::UserClosed, base);

        assert_eq!(scheduler.dismiss_count, 1, "a duplicate close signal must not double-count");
        assert_eq!(scheduler.total_dismissals, 1);
    }

    #[tokio::test]
    async fn test_presenter_failure_falls_back_to_text() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);
        let mut scheduler = BreakScheduler::new(config(), tracker, Box::new(FailingNotifier), base);

        let handle = scheduler.trigger_reminder().expect("the reminder must not be skipped");
        assert_eq!(handle.closed().await, CloseReason::AutoClosed);
        assert_eq!(scheduler.reminders_shown, 1);
    }
}
