//! Runtime instance that dispatches events and performs transitions.

use crate::core::{Key, TransitionHook};
use crate::runtime::error::FsmError;
use crate::runtime::state::RuntimeState;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Which branch `fire_command` took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    /// Guard passed and the action ran to completion
    Fired,

    /// Guard returned false; the event was absorbed
    Blocked,

    /// Current state has no trigger for the event
    Unhandled,

    /// Current state key was never registered
    NoCurrentState,
}

/// A running state machine produced by [`FsmBuilder::build`](crate::builder::FsmBuilder::build).
///
/// Owns its compiled state table and its data container; nothing is shared
/// with the builder or with sibling machines. Dispatch is synchronous and
/// re-entrant: callbacks receive `&mut Fsm` and may switch state from
/// inside an action. Not meant to be driven from several threads at once.
pub struct Fsm<S, E, D> {
    name: String,
    current: S,
    data: D,
    states: HashMap<S, RuntimeState<S, E, D>>,
    on_transition: Option<TransitionHook<S, E, D>>,
}

impl<S: Key, E: Key, D> Fsm<S, E, D> {
    pub(crate) fn new(
        name: String,
        initial: S,
        states: HashMap<S, RuntimeState<S, E, D>>,
        on_transition: Option<TransitionHook<S, E, D>>,
        data: D,
    ) -> Self {
        Self {
            name,
            current: initial,
            data,
            states,
            on_transition,
        }
    }

    /// Label given at build time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key of the current state.
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Data container bound to this machine.
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Mutable access to the data container.
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Number of compiled states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Whether `key` has a compiled entry.
    pub fn contains_state(&self, key: &S) -> bool {
        self.states.contains_key(key)
    }

    /// Whether the current state has a trigger bound to `event`.
    pub fn can_fire(&self, event: &E) -> bool {
        self.states
            .get(&self.current)
            .is_some_and(|state| state.has_trigger(event))
    }

    /// Dispatch `event` to the current state.
    ///
    /// Unknown current state, unbound event and failing guard are all
    /// no-ops reported through [`FireOutcome`]. Errors only come from the
    /// action, typically a nested [`switch_state`](Self::switch_state).
    pub fn fire_command(&mut self, event: E) -> Result<FireOutcome, FsmError> {
        let Some(state) = self.states.get(&self.current) else {
            trace!(machine = %self.name, state = ?self.current, event = ?event, "no compiled state");
            return Ok(FireOutcome::NoCurrentState);
        };

        let Some(dispatch) = state.dispatch(&event) else {
            trace!(machine = %self.name, state = ?self.current, event = ?event, "event not handled");
            return Ok(FireOutcome::Unhandled);
        };

        if !dispatch.guard.check() {
            trace!(machine = %self.name, state = ?self.current, event = ?event, "guard blocked event");
            return Ok(FireOutcome::Blocked);
        }

        trace!(machine = %self.name, state = ?self.current, event = ?event, "firing trigger");
        (dispatch.action)(self)?;
        Ok(FireOutcome::Fired)
    }

    /// Run the current state's update callback.
    /// Returns whether a callback ran.
    pub fn update(&mut self) -> bool {
        let callback = self
            .states
            .get(&self.current)
            .and_then(|state| state.on_update.clone());

        match callback {
            Some(callback) => {
                callback(self);
                true
            }
            None => false,
        }
    }

    /// Move to `next`.
    ///
    /// In order: the transition hook (always, even for self-transitions or
    /// unregistered keys), the leave callback of the previous state if it
    /// is registered, the assignment of the current state, then the enter
    /// callback of `next`. A `next` without a compiled entry yields
    /// [`FsmError::UnknownState`] after the assignment has happened.
    pub fn switch_state(&mut self, next: S) -> Result<(), FsmError> {
        let previous = self.current.clone();
        debug!(machine = %self.name, from = ?previous, to = ?next, "switching state");

        if let Some(hook) = self.on_transition.clone() {
            hook(self, &previous, &next);
        }

        let on_leave = self
            .states
            .get(&previous)
            .and_then(|state| state.on_leave.clone());
        if let Some(on_leave) = on_leave {
            on_leave(self);
        }

        self.current = next;

        let on_enter = match self.states.get(&self.current) {
            Some(state) => state.on_enter.clone(),
            None => {
                return Err(FsmError::UnknownState {
                    machine: self.name.clone(),
                    state: self.current.label(),
                })
            }
        };
        if let Some(on_enter) = on_enter {
            on_enter(self);
        }

        Ok(())
    }
}

impl<S: fmt::Debug, E, D: fmt::Debug> fmt::Debug for Fsm<S, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fsm")
            .field("name", &self.name)
            .field("current", &self.current)
            .field("data", &self.data)
            .field("states", &self.states.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
