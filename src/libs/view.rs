use super::formatter::format_seconds;
use super::tracker::ActivityStats;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the end-of-session activity summary.
    pub fn session(stats: &ActivityStats, reminders_shown: u32, dismissals: u32) -> Result<()> {
        msg_print!(Message::SessionSummaryHeader, true);

        let mut table = Table::new();
        table.add_row(row!["MOUSE ACTIVE", "KEYBOARD ACTIVE", "REMINDERS", "DISMISSED"]);
        table.add_row(row![
            format_seconds(stats.mouse_active_seconds),
            format_seconds(stats.keyboard_active_seconds),
            reminders_shown,
            dismissals
        ]);
        table.printstd();

        Ok(())
    }
}
