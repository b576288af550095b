//! Statecraft: build a state machine once, run it many times
//!
//! A [`FsmBuilder`](builder::FsmBuilder) accumulates an immutable topology
//! of states, guarded triggers and lifecycle callbacks. Each call to
//! `build` compiles that topology into an independent [`Fsm`](runtime::Fsm)
//! with its own data container, which the host drives by firing events,
//! ticking updates and switching states.
//!
//! # Core Concepts
//!
//! - **Keys**: any `Clone + Eq + Hash + Debug + Send + Sync` type identifies states and events
//! - **Triggers**: one event per state, bound to a guard and an action
//! - **Transitions**: hook, leave, assign, enter, always in that order
//! - **Export**: the topology renders as a DOT graph
//!
//! # Example
//!
//! ```rust
//! use statecraft::builder::FsmBuilder;
//! use statecraft::key_enum;
//! use statecraft::runtime::FireOutcome;
//!
//! key_enum! {
//!     enum Enemy {
//!         Wait,
//!         Chase,
//!     }
//! }
//!
//! key_enum! {
//!     enum Sight {
//!         PlayerFound,
//!         PlayerLost,
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = FsmBuilder::<Enemy, Sight, u32>::new();
//! builder
//!     .state(Enemy::Wait)
//!     .on_command(Sight::PlayerFound, Enemy::Chase)?;
//! builder
//!     .state(Enemy::Chase)
//!     .on_enter(|fsm| *fsm.data_mut() += 1)
//!     .on_command_with(Sight::PlayerLost, |fsm| fsm.switch_state(Enemy::Wait))?;
//!
//! let mut enemy = builder.build("grunt", Enemy::Wait);
//! assert_eq!(enemy.fire_command(Sight::PlayerFound)?, FireOutcome::Fired);
//! assert_eq!(enemy.current_state(), &Enemy::Chase);
//! assert_eq!(*enemy.data(), 1);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod dot;
pub mod runtime;

// Re-export commonly used types
pub use builder::{ConfigError, FsmBuilder, StateDefinition, TriggerDefinition};
pub use crate::core::{Guard, Key};
pub use dot::DotOptions;
pub use runtime::{FireOutcome, Fsm, FsmError};
