//! Build-time API for describing a machine.
//!
//! A builder accumulates states, their triggers and lifecycle callbacks,
//! then compiles that topology into any number of independent machines.
//!
//! # Example
//!
//! ```
//! use statecraft::builder::FsmBuilder;
//! use statecraft::key_enum;
//!
//! key_enum! {
//!     enum Door {
//!         Open,
//!         Closed,
//!     }
//! }
//!
//! key_enum! {
//!     enum Action {
//!         Push,
//!         Pull,
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = FsmBuilder::<Door, Action, ()>::new();
//! builder.state(Door::Closed).on_command(Action::Push, Door::Open)?;
//! builder.state(Door::Open).on_command(Action::Pull, Door::Closed)?;
//!
//! let mut door = builder.build("front door", Door::Closed);
//! door.fire_command(Action::Push)?;
//! assert_eq!(door.current_state(), &Door::Open);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;
pub mod trigger;

pub use error::ConfigError;
pub use machine::FsmBuilder;
pub use state::StateDefinition;
pub use trigger::TriggerDefinition;
