//! Configuration errors raised while describing a machine.

use thiserror::Error;

/// Errors that can occur when configuring states and triggers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Event {event} is already bound on state {state}")]
    DuplicateTrigger { state: String, event: String },
}
