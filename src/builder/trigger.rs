//! Trigger definitions: one event bound to a guard, a target and an action.

use crate::core::{Guard, Key, TriggerAction};
use crate::runtime::{Fsm, FsmError};
use std::fmt;
use std::sync::Arc;

/// Binding of one event, on one state, to a guard and an action.
///
/// `target` is what graph export draws. For a plain transition the action
/// switches to `target`; for a custom action `target` is the owning state
/// and nothing moves unless the action itself calls `switch_state`.
pub struct TriggerDefinition<S, E, D> {
    pub guard: Guard,
    pub target: S,
    pub action: TriggerAction<S, E, D>,
}

impl<S: Key, E: Key, D: 'static> TriggerDefinition<S, E, D> {
    /// Unconditional transition to `target`.
    pub fn transition(target: S) -> Self {
        let to = target.clone();
        Self {
            guard: Guard::always(),
            target,
            action: Arc::new(move |fsm: &mut Fsm<S, E, D>| fsm.switch_state(to.clone())),
        }
    }

    /// Custom logic owned by `state`. The target is recorded as `state` itself.
    pub fn custom<A>(state: S, action: A) -> Self
    where
        A: Fn(&mut Fsm<S, E, D>) -> Result<(), FsmError> + Send + Sync + 'static,
    {
        Self {
            guard: Guard::always(),
            target: state,
            action: Arc::new(action),
        }
    }

    /// Replace the guard.
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Replace the guard using a closure.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.guard(Guard::new(predicate))
    }
}

impl<S: Clone, E, D> Clone for TriggerDefinition<S, E, D> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            target: self.target.clone(),
            action: Arc::clone(&self.action),
        }
    }
}

impl<S: fmt::Debug, E, D> fmt::Debug for TriggerDefinition<S, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerDefinition")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FsmBuilder;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        End,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestEvent {
        Go,
    }

    #[test]
    fn transition_defaults_to_open_guard() {
        let trigger = TriggerDefinition::<TestState, TestEvent, ()>::transition(TestState::End);

        assert_eq!(trigger.target, TestState::End);
        assert!(trigger.guard.check());
    }

    #[test]
    fn when_replaces_guard() {
        let trigger =
            TriggerDefinition::<TestState, TestEvent, ()>::transition(TestState::End).when(|| false);

        assert!(!trigger.guard.check());
    }

    #[test]
    fn custom_records_owning_state_as_target() {
        let trigger =
            TriggerDefinition::<TestState, TestEvent, ()>::custom(TestState::Start, |_| Ok(()));

        assert_eq!(trigger.target, TestState::Start);
    }

    #[test]
    fn transition_action_switches_state() {
        let mut builder = FsmBuilder::<TestState, TestEvent, ()>::new();
        builder.state(TestState::Start);
        builder.state(TestState::End);
        let mut fsm = builder.build("test", TestState::Start);

        let trigger = TriggerDefinition::<TestState, TestEvent, ()>::transition(TestState::End);
        (trigger.action)(&mut fsm).unwrap();

        assert_eq!(fsm.current_state(), &TestState::End);
    }
}
