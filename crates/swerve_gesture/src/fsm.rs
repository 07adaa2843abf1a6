//! Event-driven state transitions.
//!
//! Interactive state in this engine is expressed as small `Copy` enums whose
//! transitions are a pure function of (current state, event). Events are
//! plain `u32` constants grouped in a `*_events` module next to the state
//! type, so a transition table reads as a flat `match` over tuples.
//!
//! # Example
//!
//! ```rust
//! use swerve_gesture::StateTransitions;
//!
//! const OPEN: u32 = 1;
//! const CLOSE: u32 = 2;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Door {
//!     Shut,
//!     Open,
//! }
//!
//! impl StateTransitions for Door {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Door::Shut, OPEN) => Some(Door::Open),
//!             (Door::Open, CLOSE) => Some(Door::Shut),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(Door::Shut.on_event(OPEN), Some(Door::Open));
//! assert_eq!(Door::Shut.on_event(CLOSE), None);
//! ```

/// State types that define their own event-driven transitions.
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + std::hash::Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition.
    ///
    /// `None` means the event does not apply in the current state; callers
    /// keep the current state and perform no transition side effects.
    fn on_event(&self, event: u32) -> Option<Self>;
}
