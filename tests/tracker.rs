#[cfg(test)]
mod tests {
    use ergon::libs::tracker::ActivityTracker;
    use std::time::{Duration, Instant};

    #[test]
    fn test_sub_second_mouse_gaps_accumulate() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);

        tracker.record_mouse_event(base);
        tracker.record_mouse_event(base + Duration::from_millis(500));
        tracker.record_mouse_event(base + Duration::from_millis(900));

        let stats = tracker.stats();
        assert_eq!(stats.mouse_active_seconds, 0.9, "active time is the sum of sub-second gaps");
        assert_eq!(stats.keyboard_active_seconds, 0.0, "mouse events must not credit the keyboard");
    }

    #[test]
    fn test_idle_gap_contributes_nothing() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);

        tracker.record_mouse_event(base);
        // A mouse that did not move for five minutes is not five minutes of work
        tracker.record_mouse_event(base + Duration::from_secs(300));
        assert_eq!(tracker.stats().mouse_active_seconds, 0.0);

        // The next sub-second gap counts again
        tracker.record_mouse_event(base + Duration::from_secs(300) + Duration::from_millis(800));
        assert_eq!(tracker.stats().mouse_active_seconds, 0.8);
    }

    #[test]
    fn test_first_event_is_debounced() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);

        tracker.record_keyboard_event(base + Duration::from_secs(10));
        assert_eq!(tracker.stats().keyboard_active_seconds, 0.0, "the very first event has no gap to credit");
    }

    #[test]
    fn test_exactly_one_second_gap_is_excluded() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);

        tracker.record_keyboard_event(base);
        tracker.record_keyboard_event(base + Duration::from_secs(1));
        assert_eq!(tracker.stats().keyboard_active_seconds, 0.0, "the debounce threshold is exclusive");
    }

    #[test]
    fn test_devices_accumulate_independently() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);

        tracker.record_mouse_event(base);
        tracker.record_keyboard_event(base + Duration::from_millis(200));
        tracker.record_mouse_event(base + Duration::from_millis(400));
        tracker.record_keyboard_event(base + Duration::from_millis(700));

        let stats = tracker.stats();
        assert_eq!(stats.mouse_active_seconds, 0.4);
        assert_eq!(stats.keyboard_active_seconds, 0.5);
    }

    #[test]
    fn test_seconds_since_last_activity_resets_on_events() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);

        assert_eq!(tracker.seconds_since_last_activity(base + Duration::from_secs(3)), 3.0);

        tracker.record_mouse_event(base + Duration::from_secs(3));
        assert_eq!(tracker.seconds_since_last_activity(base + Duration::from_secs(3)), 0.0);
        assert_eq!(
            tracker.seconds_since_last_activity(base + Duration::from_millis(3500)),
            0.5
        );
    }

    #[test]
    fn test_is_currently_active_window() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);

        tracker.record_keyboard_event(base);
        assert!(tracker.is_currently_active(base + Duration::from_millis(500)));
        assert!(!tracker.is_currently_active(base + Duration::from_millis(1500)));
    }

    #[test]
    fn test_backwards_time_does_not_decrease_state() {
        let base = Instant::now();
        let tracker = ActivityTracker::with_origin(base);

        tracker.record_mouse_event(base + Duration::from_secs(2));
        // An event stamped earlier than the previous one must not produce a
        // negative gap or roll the last-activity instant backwards
        tracker.record_mouse_event(base + Duration::from_secs(1));

        let stats = tracker.stats();
        assert_eq!(stats.mouse_active_seconds, 0.0);
        assert_eq!(tracker.seconds_since_last_activity(base + Duration::from_secs(2)), 0.0);
    }
}
