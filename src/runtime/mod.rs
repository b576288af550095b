//! Run-time half: machines compiled from a builder.
//!
//! # Key Concepts
//!
//! - **Fsm**: current state, data container and compiled state table
//! - **Dispatch**: `fire_command` resolves guard and action for an event
//! - **Transitions**: `switch_state` is the only way the current state moves
//!
//! Everything runs synchronously on the caller's thread.

mod error;
mod machine;
mod state;

pub use error::FsmError;
pub use machine::{FireOutcome, Fsm};
pub(crate) use state::RuntimeState;
