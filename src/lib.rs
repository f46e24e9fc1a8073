//! # Ergon - Ergonomic Break Reminders
//!
//! A desktop wellness utility that tracks keyboard and mouse activity and
//! reminds you to take regular breaks.
//!
//! ## Features
//!
//! - **Activity Tracking**: Debounced per-device active-time accumulation
//! - **Break Scheduling**: Reminders after continuous stretches of work
//! - **Escalation**: A stronger warning after repeated dismissals
//! - **Background Watcher**: Detached daemon with clean shutdown handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ergon::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
