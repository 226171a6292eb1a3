//! # Tomo - a pomodoro task tracker
//!
//! A command-line tool for tracking tasks and the time spent on them
//! in 25-minute focus sessions.
//!
//! ## Features
//!
//! - **Task Management**: Create, complete and delete tasks
//! - **Focus Sessions**: Resumable 25-minute countdowns per task
//! - **Time Reconciliation**: Committed session time accumulates on the task
//! - **Local Persistence**: Tasks and sessions survive restarts in SQLite
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tomo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
