//! Database layer for the tomo application.
//!
//! A thin persistence layer over SQLite with two keyed collections:
//! `tasks` (one row per task, keyed by uuid) and `timer_sessions`
//! (at most one resumable countdown per task, keyed by the task's id).
//! Each store creates its own schema idempotently on construction and
//! exposes put/get/delete/fetch-all in terms of domain types.

/// Core database connection and the `StoreError` type.
pub mod db;

/// Resumable countdown session rows, keyed by task id.
pub mod sessions;

/// Task rows and their newest-first listing order.
pub mod tasks;
