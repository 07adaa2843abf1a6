//! Swerve Gesture Engine
//!
//! This crate turns a host-supplied pointer stream into swipe and press
//! semantics, with no rendering, animation, or recognition of its own:
//!
//! - **Direction Classification**: Dominant-axis classification of 2D drags
//! - **Swipe Monitors**: Normalized progress and commit/cancel decisions
//! - **Registries**: Ordered, isolated broadcast to every monitor
//! - **Press Recognition**: Two-phase press with an explicit state machine
//! - **Areas**: Per-surface adapters consuming the host's samples
//!
//! # Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use swerve_gesture::{Direction, DragSample, Point, SwipeArea, SwipeProgressMonitor};
//!
//! let progress = Rc::new(Cell::new(0.0f64));
//! let seen = Rc::clone(&progress);
//!
//! // A card that can be swiped off to the left over 200 units.
//! let mut card = SwipeArea::new().with_progress(
//!     SwipeProgressMonitor::new(Direction::NegativeX, 200.0, move |p| seen.set(p))
//!         .expect("positive target"),
//! );
//!
//! card.drag_changed(DragSample::new(
//!     Point::new(160.0, 40.0),
//!     Point::new(110.0, 44.0),
//! ));
//! assert_eq!(progress.get(), 0.25);
//! ```

pub mod area;
pub mod direction;
pub mod error;
pub mod fsm;
pub mod geometry;
pub mod monitor;
pub mod press;
pub mod registry;

pub use area::{DragSample, PressArea, SwipeArea};
pub use direction::Direction;
pub use error::{GestureError, Result};
pub use fsm::StateTransitions;
pub use geometry::{Delta, Point};
pub use monitor::{
    CompletionCallback, ProgressCallback, SwipeCompletionMonitor, SwipeMonitor,
    SwipeProgressMonitor,
};
pub use press::{press_events, PressCallback, PressMonitor, PressMonitorRegistry, PressPhase};
pub use registry::{CompletionRegistry, MonitorRegistry, ProgressRegistry};
