//! Guard predicates for controlling triggers.
//!
//! Guards are zero-argument boolean functions evaluated at dispatch time.
//! Whatever they close over stays owned by the caller.

use std::fmt;
use std::sync::Arc;

/// Predicate that decides whether a trigger's action may run.
///
/// Guards are evaluated exactly once per dispatched event, synchronously,
/// before the bound action. Cloning a guard shares the underlying closure.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Guard;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let player_visible = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&player_visible);
/// let guard = Guard::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!guard.check());
/// player_visible.store(true, Ordering::SeqCst);
/// assert!(guard.check());
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Guard that always passes. Used when a trigger is registered without one.
    pub fn always() -> Self {
        Self::new(|| true)
    }

    /// Evaluate the predicate.
    pub fn check(&self) -> bool {
        (self.predicate)()
    }
}

impl Default for Guard {
    fn default() -> Self {
        Self::always()
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
