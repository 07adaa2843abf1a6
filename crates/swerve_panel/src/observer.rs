//! Observation of panel changes.
//!
//! The controller pushes every applied change to its observers instead of
//! exposing watchable state. A render layer typically implements
//! [`PanelObserver`] to mark its scene dirty and to decide whether to tween
//! toward the new value or jump to it.

/// How a change should reach the screen.
///
/// The engine has no animation clock; this is a hint for the host's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelMotion {
    /// Tween from the current rendered value (show, hide, snap-back).
    Animated,
    /// Jump to the value (the pointer is driving it, or the panel is
    /// already off-screen).
    Immediate,
}

/// Receives panel changes immediately after they are applied.
///
/// Notifications run synchronously, in observer registration order, and
/// after the controller's state is updated - reading back through the
/// controller from inside a notification sees the new values.
pub trait PanelObserver {
    /// Visibility flipped (presentation or any dismissal path).
    fn visibility_changed(&self, visible: bool, motion: PanelMotion);

    /// Dismissal-drag progress moved. `progress` is normalized `0.0..=1.0`;
    /// 0 with [`PanelMotion::Animated`] is a snap-back after a cancelled
    /// swipe.
    fn progress_changed(&self, progress: f64, motion: PanelMotion);
}
