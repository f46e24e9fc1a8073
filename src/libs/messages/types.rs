#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleReminder,
    PromptConfigureReminder,
    PromptNotificationInterval,
    PromptInactivityTimeout,
    PromptPollInterval,
    PromptDismissThreshold,
    PromptAutoCloseSeconds,
    PromptCloseButtonDelay,

    // === REMINDER MESSAGES ===
    ReminderStarted {
        notification_interval: u64,
        inactivity_timeout: u64,
        poll_interval: u64,
    },
    ReminderBreakTime,
    ReminderCustom(String),
    ReminderEscalation(u32), // dismissals in a row
    ReminderExitedNormally,
    ReminderShuttingDown,
    ReminderError(String),
    NotifierDisplayFailed(String),
    SessionSummaryHeader,

    // === LISTENER MESSAGES ===
    ListenerSpawnFailed(String),
    ListenerHookError(String),

    // === WATCHER/DAEMON MESSAGES ===
    WatcherStarted(u32), // PID
    WatcherStopped(u32), // PID
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStartingForeground,
    WatcherStoppingExisting(String),     // PID
    WatcherFailedToStopExisting(String), // error
    WatcherFailedToStop(u32),            // PID
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String), // error
    WatcherSignalHandlingNotSupported,
    DaemonModeNotSupported,
    FailedToGetCurrentExecutable,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    InvalidPidFileContent,
    FailedToOpenProcess(u32),      // OS error code
    FailedToTerminateProcess(u32), // OS error code
    ProcessTerminationNotSupported,
}
