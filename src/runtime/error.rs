//! Errors surfaced while driving a built machine.

use thiserror::Error;

/// Errors that can occur during dispatch and transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// The transition target has no compiled entry. Raised after the
    /// current state has already been set to it.
    #[error("State {state} is not registered in machine '{machine}'")]
    UnknownState { machine: String, state: String },

    #[error("Trigger action failed: {0}")]
    Action(String),
}
