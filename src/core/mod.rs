//! Core types shared by the build-time and run-time halves.
//!
//! This module contains:
//! - Key identity via the `Key` trait
//! - Guard predicates for trigger control
//! - Callback type aliases used by states, triggers and the transition hook

mod callback;
mod guard;
mod key;

pub use callback::{StateCallback, TransitionHook, TriggerAction};
pub use guard::Guard;
pub use key::Key;
