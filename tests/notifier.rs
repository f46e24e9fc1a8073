#[cfg(test)]
mod tests {
    use ergon::libs::notifier::{text_fallback, CloseReason, ConsoleNotifier, NotificationHandle, NotificationRequest, Notifier};

    fn request() -> NotificationRequest {
        NotificationRequest {
            warning: false,
            message: None,
        }
    }

    #[tokio::test]
    async fn test_handle_reports_user_close() {
        let (closer, handle) = NotificationHandle::channel();
        closer.close(CloseReason::UserClosed);
        assert_eq!(handle.closed().await, CloseReason::UserClosed);
    }

    #[tokio::test]
    async fn test_handle_reports_auto_close() {
        let (closer, handle) = NotificationHandle::channel();
        closer.close(CloseReason::AutoClosed);
        assert_eq!(handle.closed().await, CloseReason::AutoClosed);
    }

    #[tokio::test]
    async fn test_dropped_closer_counts_as_auto_close() {
        let (closer, handle) = NotificationHandle::channel();
        drop(closer);
        assert_eq!(handle.closed().await, CloseReason::AutoClosed);
    }

    #[tokio::test]
    async fn test_console_notifier_auto_closes() {
        let mut notifier = ConsoleNotifier::new(0);
        let handle = notifier.notify(&request()).unwrap();
        assert_eq!(handle.closed().await, CloseReason::AutoClosed);
    }

    #[tokio::test]
    async fn test_console_notifier_shows_warning_variant() {
        let mut notifier = ConsoleNotifier::new(0);
        let warning = NotificationRequest {
            warning: true,
            message: Some("please step away".to_string()),
        };
        let handle = notifier.notify(&warning).unwrap();
        assert_eq!(handle.closed().await, CloseReason::AutoClosed);
    }

    #[tokio::test]
    async fn test_text_fallback_synthesizes_auto_close() {
        let handle = text_fallback(&request(), 0);
        assert_eq!(handle.closed().await, CloseReason::AutoClosed);
    }
}
