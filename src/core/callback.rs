//! Callback types shared by the builder and the runtime.
//!
//! All callbacks are reference-counted so that compiling a builder into a
//! machine copies the handle, not the closure.

use crate::runtime::{Fsm, FsmError};
use std::sync::Arc;

/// Enter, leave and update callback of one state.
pub type StateCallback<S, E, D> = Arc<dyn Fn(&mut Fsm<S, E, D>) + Send + Sync>;

/// Action run when a trigger's guard passes.
/// Errors from nested `switch_state` calls flow back through `fire_command`.
pub type TriggerAction<S, E, D> =
    Arc<dyn Fn(&mut Fsm<S, E, D>) -> Result<(), FsmError> + Send + Sync>;

/// Global hook invoked on every transition with `(machine, from, to)`.
pub type TransitionHook<S, E, D> = Arc<dyn Fn(&mut Fsm<S, E, D>, &S, &S) + Send + Sync>;
