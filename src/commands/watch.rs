//! Activity watcher command.
//!
//! By default `ergon watch` detaches a background process and returns; the
//! flags select the other lifecycle operations.

use crate::libs::daemon;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Stop the running watcher
    #[arg(long)]
    stop: bool,

    /// Run in the current terminal instead of detaching
    #[arg(long)]
    foreground: bool,

    /// Internal flag marking the detached child process
    #[arg(long, hide = true)]
    daemon_run: bool,
}

/// Executes the watch command.
pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.foreground {
        msg_info!(Message::WatcherStartingForeground);
    }
    if args.foreground || args.daemon_run {
        return daemon::run_with_signal_handling().await;
    }

    daemon::spawn()
}
