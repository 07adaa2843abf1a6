//! Swerve Panels
//!
//! Dismissable panels driven by swipe monitors: a bottom-sheet modal and a
//! side drawer sharing one controller, differing only in the direction they
//! exit toward.
//!
//! A panel is HIDDEN or VISIBLE. While visible, a drag toward the exit
//! direction follows the finger (normalized progress times the content
//! extent), a release past the dismissal threshold commits the dismissal, a
//! release short of it snaps the content back, and a tap on the dimmed
//! backdrop dismisses. Rendering and animation timing stay in the host; the
//! controller reports every change through [`PanelObserver`].
//!
//! # Example
//!
//! ```rust
//! use swerve_panel::{PanelConfig, PanelController};
//!
//! let mut sheet = PanelController::bottom_sheet(PanelConfig::default())
//!     .expect("valid config");
//! sheet.set_container_extent(500.0).expect("positive extent");
//!
//! sheet.show();
//! assert!(sheet.is_visible());
//! assert_eq!(sheet.content_extent(), Some(300.0)); // 500 * 0.6
//!
//! // Tap outside the content: the panel hides.
//! sheet.backdrop_pressed();
//! sheet.backdrop_released();
//! assert!(!sheet.is_visible());
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod observer;
pub mod state;

pub use config::{
    PanelConfig, PanelExtent, DEFAULT_EXTENT_RATE, DEFAULT_MIN_DRAG_DISTANCE,
    DEFAULT_STATIC_EXTENT, DEFAULT_SWIPE_SENSITIVITY,
};
pub use controller::PanelController;
pub use error::{PanelError, Result};
pub use observer::{PanelMotion, PanelObserver};
pub use state::{panel_events, PanelState};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::{PanelConfig, PanelExtent};
    pub use crate::controller::PanelController;
    pub use crate::error::{PanelError, Result};
    pub use crate::observer::{PanelMotion, PanelObserver};
    pub use crate::state::{panel_events, PanelState};
    // Gesture-feed types hosts hand to the controller
    pub use swerve_gesture::{Delta, Direction, DragSample, Point};
}
