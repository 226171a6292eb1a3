//! Core library modules for the tomo application.
//!
//! The two stateful components live here: the task repository (the
//! canonical in-memory list plus derived totals) and the timer engine
//! (the countdown state machine). Everything else is supporting cast:
//! models, configuration, formatting and messaging.

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod repository;
pub mod session;
pub mod summary;
pub mod task;
pub mod timer;
pub mod view;
