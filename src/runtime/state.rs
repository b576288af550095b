//! Compiled, per-machine copy of a state definition.

use crate::builder::{StateDefinition, TriggerDefinition};
use crate::core::{Guard, Key, StateCallback, TriggerAction};
use std::collections::HashMap;
use std::sync::Arc;

/// One state as seen by a running machine.
///
/// Same shape as [`StateDefinition`] but owned by exactly one machine and
/// never reachable from the builder.
pub struct RuntimeState<S, E, D> {
    pub(crate) on_enter: Option<StateCallback<S, E, D>>,
    pub(crate) on_leave: Option<StateCallback<S, E, D>>,
    pub(crate) on_update: Option<StateCallback<S, E, D>>,
    triggers: HashMap<E, TriggerDefinition<S, E, D>>,
}

/// Guard and action resolved for one event, detached from the state table
/// so the action can borrow the machine mutably.
pub(crate) struct Dispatch<S, E, D> {
    pub(crate) guard: Guard,
    pub(crate) action: TriggerAction<S, E, D>,
}

impl<S: Key, E: Key, D> RuntimeState<S, E, D> {
    pub(crate) fn dispatch(&self, event: &E) -> Option<Dispatch<S, E, D>> {
        self.triggers.get(event).map(|trigger| Dispatch {
            guard: trigger.guard.clone(),
            action: Arc::clone(&trigger.action),
        })
    }

    pub(crate) fn has_trigger(&self, event: &E) -> bool {
        self.triggers.contains_key(event)
    }
}

impl<S: Key, E: Key, D> From<&StateDefinition<S, E, D>> for RuntimeState<S, E, D> {
    fn from(definition: &StateDefinition<S, E, D>) -> Self {
        Self {
            on_enter: definition.on_enter.clone(),
            on_leave: definition.on_leave.clone(),
            on_update: definition.on_update.clone(),
            triggers: definition.triggers.clone(),
        }
    }
}
