//! Display implementation for ergon application messages.
//!
//! The central localization point for all user-facing text: every `Message`
//! variant is turned into its final wording here and nowhere else, so the
//! rest of the code never carries string literals for the user.

use super::types::Message;
use crate::libs::formatter::format_duration;
use chrono::Duration;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleReminder => "Break reminder settings".to_string(),
            Message::PromptConfigureReminder => "Configure break reminders?".to_string(),
            Message::PromptNotificationInterval => "Continuous activity before a reminder (seconds)".to_string(),
            Message::PromptInactivityTimeout => "Inactivity that resets the active stretch (seconds)".to_string(),
            Message::PromptPollInterval => "Poll interval (milliseconds)".to_string(),
            Message::PromptDismissThreshold => "Dismissals in a row before the warning variant".to_string(),
            Message::PromptAutoCloseSeconds => "Reminder auto-close delay (seconds)".to_string(),
            Message::PromptCloseButtonDelay => "Delay before a reminder can be dismissed (seconds)".to_string(),

            // === REMINDER MESSAGES ===
            Message::ReminderStarted {
                notification_interval,
                inactivity_timeout,
                poll_interval,
            } => format!(
                "Break reminders active: every {} of continuous work, inactivity timeout {}s, polling every {}ms",
                format_duration(&Duration::seconds(*notification_interval as i64)),
                inactivity_timeout,
                poll_interval
            ),
            Message::ReminderBreakTime => "Time for a break! Step away from the screen and stretch for a moment.".to_string(),
            Message::ReminderCustom(message) => message.clone(),
            Message::ReminderEscalation(count) => format!(
                "You have dismissed {} reminders in a row. Please take your health seriously and step away now.",
                count
            ),
            Message::ReminderExitedNormally => "Reminder service exited normally".to_string(),
            Message::ReminderShuttingDown => "Shutting down reminder service...".to_string(),
            Message::ReminderError(error) => format!("Reminder service error: {}", error),
            Message::NotifierDisplayFailed(error) => format!("Failed to display reminder window, falling back to text: {}", error),
            Message::SessionSummaryHeader => "Session activity summary".to_string(),

            // === LISTENER MESSAGES ===
            Message::ListenerSpawnFailed(error) => format!("Failed to start input listener: {}", error),
            Message::ListenerHookError(error) => format!("Input hook error: {}. Retrying in 1 second...", error),

            // === WATCHER/DAEMON MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher with PID {} stopped", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStartingForeground => "Starting watcher in foreground mode...".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher (PID: {})...", pid),
            Message::WatcherFailedToStopExisting(error) => format!("Failed to stop existing watcher: {}", error),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher with PID {}", pid),
            Message::WatcherReceivedSigterm => "Received SIGTERM, shutting down...".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT, shutting down...".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(error) => format!("Failed to listen for Ctrl+C: {}", error),
            Message::WatcherSignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::InvalidPidFileContent => "PID file contains invalid content".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error code: {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (error code: {})", code),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
        };
        write!(f, "{}", text)
    }
}
