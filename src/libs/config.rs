//! Configuration management for the ergon application.
//!
//! Settings are stored as JSON in the platform application data directory
//! and edited either by hand or through the interactive `ergon init`
//! wizard. Every value has a compiled-in default, so the tool runs without
//! any configuration file at all.
//!
//! ## Timing Configuration
//!
//! The reminder section controls the break policy:
//!
//! - **Notification interval**: how much continuous active time earns a break
//! - **Inactivity timeout**: how long input may pause before the continuous
//!   stretch is considered over
//! - **Poll interval**: how often the scheduler re-evaluates
//! - **Dismissal threshold and window timings**: how insistently reminders
//!   escalate and how long they stay on screen

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Break reminder configuration settings.
///
/// All timing values are plain seconds except `poll_interval`, which is in
/// milliseconds. The defaults mirror a typical office rhythm: two hours of
/// continuous work earn a break, a minute of silence resets the count.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReminderConfig {
    /// Seconds of continuous activity before a reminder is raised.
    ///
    /// Doubles as the spacing between repeat reminders when an earlier one
    /// never reported a close outcome.
    pub notification_interval: u64,

    /// Seconds of no input before accumulated active time resets.
    ///
    /// Short thinking pauses below this value keep the continuous stretch
    /// alive; anything longer counts as a real break taken voluntarily.
    pub inactivity_timeout: u64,

    /// Poll interval in milliseconds for the scheduler tick loop.
    pub poll_interval: u64,

    /// Consecutive user dismissals before the warning variant is shown.
    pub dismiss_threshold: u32,

    /// Seconds a reminder stays up before it closes on its own.
    pub auto_close_seconds: u64,

    /// Seconds before a reminder window allows manual dismissal.
    ///
    /// Honored by graphical presenters; the console presenter has no close
    /// button and ignores it.
    pub close_button_delay: u64,
}

impl Default for ReminderConfig {
    /// Default values:
    /// - 7200 seconds (2 hours) of continuous activity per reminder
    /// - 60 seconds inactivity timeout
    /// - 1000ms polling interval
    /// - 3 dismissals before escalation
    /// - 60 seconds on screen unattended
    /// - 7 seconds before the close button becomes available
    fn default() -> Self {
        ReminderConfig {
            notification_interval: 7200,
            inactivity_timeout: 60,
            poll_interval: 1000,
            dismiss_threshold: 3,
            auto_close_seconds: 60,
            close_button_delay: 7,
        }
    }
}

/// Main configuration container for the entire application.
///
/// Sections are optional; a missing section means its defaults apply. The
/// `skip_serializing_if` attribute keeps unconfigured sections out of the
/// JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Break reminder policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error: the default configuration is
    /// returned, so the application works with zero setup.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values (or the defaults) pre-fill every prompt, so the
    /// wizard doubles as an editor for an already-configured installation.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        if !Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfigureReminder.to_string())
            .default(true)
            .interact()?
        {
            return Ok(config);
        }

        let default = config.reminder.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReminder);
        config.reminder = Some(ReminderConfig {
            // Continuous activity required before a break reminder fires
            notification_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptNotificationInterval.to_string())
                .default(default.notification_interval)
                .interact_text()?,

            // Input silence that ends a continuous stretch
            inactivity_timeout: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptInactivityTimeout.to_string())
                .default(default.inactivity_timeout)
                .interact_text()?,

            // Frequency of scheduler evaluations
            poll_interval: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPollInterval.to_string())
                .default(default.poll_interval)
                .interact_text()?,

            // Dismissals tolerated before the stronger warning
            dismiss_threshold: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDismissThreshold.to_string())
                .default(default.dismiss_threshold)
                .interact_text()?,

            // Unattended on-screen time of a reminder
            auto_close_seconds: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptAutoCloseSeconds.to_string())
                .default(default.auto_close_seconds)
                .interact_text()?,

            // Delay before manual dismissal is possible
            close_button_delay: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCloseButtonDelay.to_string())
                .default(default.close_button_delay)
                .interact_text()?,
        });

        Ok(config)
    }
}
