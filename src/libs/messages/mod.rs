//! Centralized application messaging.
//!
//! All user-facing wording lives in the [`Message`] enum; the macros in
//! [`macros`] decide whether a message reaches the console directly or
//! goes through `tracing` when debug mode is enabled.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
