//! Identity of state and event keys.
//!
//! States and events are both looked up by value, so the only thing the
//! machine needs from them is stable equality and hashing.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state and event keys.
///
/// Implemented automatically for every type that is `Clone + Eq + Hash +
/// Debug + Send + Sync`. Enums, strings and integers all qualify; nothing
/// assumes a numeric or enumerated representation.
///
/// # Required Traits
///
/// - `Clone`: keys are copied into compiled machines and transition hooks
/// - `Eq` + `Hash`: keys index the state and trigger tables
/// - `Debug`: keys are rendered in errors, logs and DOT output
/// - `Send` + `Sync`: keys are captured by thread-safe callbacks
///
/// # Example
///
/// ```rust
/// use statecraft::core::Key;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// assert_eq!(Door::Open.label(), "Open");
/// assert_eq!("lobby".to_string().label(), "\"lobby\"");
/// ```
pub trait Key: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Human-readable rendering used in logs, errors and graph output.
    fn label(&self) -> String {
        format!("{self:?}")
    }
}

impl<T> Key for T where T: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
    }

    fn dedup<K: Key>(keys: Vec<K>) -> HashSet<K> {
        keys.into_iter().collect()
    }

    #[test]
    fn label_uses_debug_rendering() {
        assert_eq!(TestState::Initial.label(), "Initial");
        assert_eq!(42u32.label(), "42");
    }

    #[test]
    fn enum_keys_hash_by_identity() {
        let keys = dedup(vec![
            TestState::Initial,
            TestState::Processing,
            TestState::Initial,
        ]);

        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn string_keys_compare_by_value() {
        let keys = dedup(vec!["idle".to_string(), String::from("idle")]);

        assert_eq!(keys.len(), 1);
    }
}
