//! Panel visibility state machine.

use swerve_gesture::StateTransitions;

/// Events driving panel visibility.
pub mod panel_events {
    /// Host asked the panel to present itself.
    pub const SHOW: u32 = 40001;
    /// Host asked the panel to dismiss itself.
    pub const HIDE: u32 = 40002;
    /// A dismissal swipe ended past its threshold.
    pub const SWIPE_COMMITTED: u32 = 40003;
    /// A dismissal swipe ended short of its threshold.
    pub const SWIPE_CANCELLED: u32 = 40004;
    /// The pointer was released over the backdrop.
    pub const BACKDROP_PRESSED: u32 = 40005;
}

/// Visibility of a dismissable panel.
///
/// Every dismissal path converges on `Hidden`; a cancelled swipe is the one
/// gesture outcome that leaves visibility untouched (the content snaps back
/// instead):
///
/// ```text
///                       SHOW
///     Hidden ─────────────────────────► Visible
///        ▲                                 │
///        │   HIDE / SWIPE_COMMITTED /      │
///        │      BACKDROP_PRESSED           │
///        └─────────────────────────────────┘
///
///     SWIPE_CANCELLED: no transition (snap back, stay visible)
/// ```
///
/// # Events
///
/// - `SHOW` (40001): present; idempotent while already visible
/// - `HIDE` (40002): programmatic dismissal
/// - `SWIPE_COMMITTED` (40003): swipe-to-dismiss succeeded
/// - `SWIPE_CANCELLED` (40004): swipe fell short, content snaps back
/// - `BACKDROP_PRESSED` (40005): tap outside the content dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelState {
    /// Content parked off-screen along the exit direction.
    #[default]
    Hidden,
    /// Content presented; dismissal gestures are live.
    Visible,
}

impl PanelState {
    /// Returns true if the panel is presented.
    pub fn is_visible(&self) -> bool {
        matches!(self, PanelState::Visible)
    }

    /// Returns true if the panel is dismissed.
    pub fn is_hidden(&self) -> bool {
        matches!(self, PanelState::Hidden)
    }
}

impl StateTransitions for PanelState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use panel_events::*;

        match (self, event) {
            // Hidden -> Visible: presentation
            (PanelState::Hidden, SHOW) => Some(PanelState::Visible),

            // Visible -> Visible: show is idempotent (no transition)
            (PanelState::Visible, SHOW) => None,

            // Visible -> Hidden: every dismissal path
            (PanelState::Visible, HIDE)
            | (PanelState::Visible, SWIPE_COMMITTED)
            | (PanelState::Visible, BACKDROP_PRESSED) => Some(PanelState::Hidden),

            // Cancelled swipes snap content back without a transition
            _ => None,
        }
    }
}
