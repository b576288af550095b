//! Builder for describing a machine topology once and compiling it many times.

use crate::builder::state::StateDefinition;
use crate::core::{Key, TransitionHook};
use crate::dot::{self, DotOptions};
use crate::runtime::{Fsm, RuntimeState};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Mutable registry of state definitions.
///
/// The builder never runs callbacks. [`FsmBuilder::build`] copies the
/// topology into a fresh [`Fsm`], so later edits to the builder never
/// reach machines that were already built.
pub struct FsmBuilder<S, E, D> {
    states: HashMap<S, StateDefinition<S, E, D>>,
    on_transition: Option<TransitionHook<S, E, D>>,
}

impl<S: Key, E: Key, D: Default + 'static> FsmBuilder<S, E, D> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            on_transition: None,
        }
    }

    /// Definition registered under `key`, created empty on first use.
    pub fn state(&mut self, key: S) -> &mut StateDefinition<S, E, D> {
        self.states
            .entry(key.clone())
            .or_insert_with(|| StateDefinition::new(key))
    }

    /// Set the hook invoked on every transition of machines built afterwards.
    pub fn on_transition<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut Fsm<S, E, D>, &S, &S) + Send + Sync + 'static,
    {
        self.on_transition = Some(Arc::new(hook));
        self
    }

    /// Union of events registered across all states.
    pub fn defined_triggers(&self) -> HashSet<E> {
        self.states
            .values()
            .flat_map(|state| state.triggers.keys().cloned())
            .collect()
    }

    /// Number of registered states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Whether `key` has been registered.
    pub fn contains_state(&self, key: &S) -> bool {
        self.states.contains_key(key)
    }

    /// Compile the topology into a new machine starting at `initial`.
    ///
    /// `initial` is not checked against the registered states; a machine
    /// whose current state was never registered treats `fire_command`
    /// and `update` as no-ops.
    pub fn build(&self, name: impl Into<String>, initial: S) -> Fsm<S, E, D> {
        let name = name.into();
        let states: HashMap<S, RuntimeState<S, E, D>> = self
            .states
            .iter()
            .map(|(key, definition)| (key.clone(), RuntimeState::from(definition)))
            .collect();

        debug!(
            machine = %name,
            state = ?initial,
            states = states.len(),
            "built state machine"
        );

        Fsm::new(
            name,
            initial,
            states,
            self.on_transition.clone(),
            D::default(),
        )
    }

    /// Render the topology as a DOT graph with default options.
    pub fn to_dot_graph(&self) -> String {
        self.to_dot_graph_with(&DotOptions::default())
    }

    /// Render the topology as a DOT graph.
    pub fn to_dot_graph_with(&self, options: &DotOptions) -> String {
        let edges = self.states.iter().flat_map(|(source, definition)| {
            definition
                .triggers
                .values()
                .map(move |trigger| (source, &trigger.target))
        });
        dot::render(options, edges)
    }
}

impl<S: Key, E: Key, D: Default + 'static> Default for FsmBuilder<S, E, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Debug, E: fmt::Debug, D> fmt::Debug for FsmBuilder<S, E, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FsmBuilder")
            .field("states", &self.states.values().collect::<Vec<_>>())
            .field("on_transition", &self.on_transition.is_some())
            .finish()
    }
}
