//! Build-time configuration of a single state.

use crate::builder::error::ConfigError;
use crate::builder::trigger::TriggerDefinition;
use crate::core::{Guard, Key, StateCallback};
use crate::runtime::{Fsm, FsmError};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Callbacks and trigger table of one state.
///
/// Obtained from [`FsmBuilder::state`](crate::builder::FsmBuilder::state);
/// every method mutates the single definition registered under that key
/// and hands it back for chaining. Trigger registration returns a
/// `Result` because an event may only be bound once per state.
pub struct StateDefinition<S, E, D> {
    key: S,
    pub(crate) on_enter: Option<StateCallback<S, E, D>>,
    pub(crate) on_leave: Option<StateCallback<S, E, D>>,
    pub(crate) on_update: Option<StateCallback<S, E, D>>,
    pub(crate) triggers: HashMap<E, TriggerDefinition<S, E, D>>,
}

impl<S: Key, E: Key, D: 'static> StateDefinition<S, E, D> {
    pub(crate) fn new(key: S) -> Self {
        Self {
            key,
            on_enter: None,
            on_leave: None,
            on_update: None,
            triggers: HashMap::new(),
        }
    }

    /// Key this definition is registered under.
    pub fn key(&self) -> &S {
        &self.key
    }

    /// Set the callback run after the machine enters this state.
    pub fn on_enter<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&mut Fsm<S, E, D>) + Send + Sync + 'static,
    {
        self.on_enter = Some(Arc::new(callback));
        self
    }

    /// Set the callback run before the machine leaves this state.
    pub fn on_leave<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&mut Fsm<S, E, D>) + Send + Sync + 'static,
    {
        self.on_leave = Some(Arc::new(callback));
        self
    }

    /// Set the callback run by [`Fsm::update`] while this state is current.
    pub fn on_update<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&mut Fsm<S, E, D>) + Send + Sync + 'static,
    {
        self.on_update = Some(Arc::new(callback));
        self
    }

    /// Transition to `target` whenever `event` fires.
    pub fn on_command(&mut self, event: E, target: S) -> Result<&mut Self, ConfigError> {
        self.on_trigger(event, TriggerDefinition::transition(target))
    }

    /// Transition to `target` when `event` fires and `guard` holds at that moment.
    /// A failing guard absorbs the event.
    pub fn on_command_if<G>(
        &mut self,
        event: E,
        target: S,
        guard: G,
    ) -> Result<&mut Self, ConfigError>
    where
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.on_trigger(event, TriggerDefinition::transition(target).when(guard))
    }

    /// Run `action` whenever `event` fires. No transition happens unless
    /// the action calls [`Fsm::switch_state`] itself.
    pub fn on_command_with<A>(&mut self, event: E, action: A) -> Result<&mut Self, ConfigError>
    where
        A: Fn(&mut Fsm<S, E, D>) -> Result<(), FsmError> + Send + Sync + 'static,
    {
        let trigger = TriggerDefinition::custom(self.key.clone(), action);
        self.on_trigger(event, trigger)
    }

    /// Register a prebuilt trigger, e.g. a custom action behind a guard.
    pub fn on_trigger(
        &mut self,
        event: E,
        trigger: TriggerDefinition<S, E, D>,
    ) -> Result<&mut Self, ConfigError> {
        if self.triggers.contains_key(&event) {
            return Err(ConfigError::DuplicateTrigger {
                state: self.key.label(),
                event: event.label(),
            });
        }
        self.triggers.insert(event, trigger);
        Ok(self)
    }

    /// Events registered on this state.
    pub fn defined_triggers(&self) -> HashSet<E> {
        self.triggers.keys().cloned().collect()
    }

    /// Trigger bound to `event`, if any.
    pub fn trigger(&self, event: &E) -> Option<&TriggerDefinition<S, E, D>> {
        self.triggers.get(event)
    }

    /// Guard of the trigger bound to `event`, if any.
    pub fn guard(&self, event: &E) -> Option<&Guard> {
        self.triggers.get(event).map(|t| &t.guard)
    }
}

impl<S: fmt::Debug, E: fmt::Debug, D> fmt::Debug for StateDefinition<S, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDefinition")
            .field("key", &self.key)
            .field("triggers", &self.triggers.keys().collect::<Vec<_>>())
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}
