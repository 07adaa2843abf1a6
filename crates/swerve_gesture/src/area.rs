//! Feed adapters between the host's pointer stream and the monitors.
//!
//! The host owns gesture recognition - hit testing, touch tracking,
//! velocity - and delivers plain samples: drag positions for swipe surfaces,
//! pointer transitions for press surfaces. Areas hold the registries for one
//! surface and fan the samples out.
//!
//! ```text
//!   host recognizer ──► SwipeArea ──► ProgressRegistry   (while moving)
//!                           │
//!                           └──────► CompletionRegistry  (at gesture end)
//!
//!   host recognizer ──► PressArea ──► PressMonitorRegistry (both phases)
//! ```
//!
//! Delivery is synchronous: every entry point runs its broadcasts to
//! completion before returning.

use crate::error::{GestureError, Result};
use crate::fsm::StateTransitions;
use crate::geometry::{Delta, Point};
use crate::monitor::{SwipeCompletionMonitor, SwipeProgressMonitor};
use crate::press::{press_events, PressMonitor, PressMonitorRegistry, PressPhase};
use crate::registry::{CompletionRegistry, ProgressRegistry};

/// One sample of an active drag: where it started and where the pointer is
/// now.
///
/// Displacement is recomputed from the pair on every use; nothing in the
/// engine accumulates displacement across samples.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub start: Point,
    pub current: Point,
}

impl DragSample {
    pub const fn new(start: Point, current: Point) -> Self {
        Self { start, current }
    }

    /// Displacement from the gesture start to the current position.
    pub fn delta(self) -> Delta {
        self.start.delta_to(self.current)
    }
}

/// A swipe surface: progress and completion registries sharing one drag
/// feed.
///
/// An optional engagement gate ignores drags until they travel
/// `min_distance` from their start, matching recognizers that arm a drag
/// only after some slop. Once a drag engages, every sample reaches the
/// progress monitors and its end always settles the completion monitors -
/// including ends the host delivers for interrupted gestures.
#[derive(Default)]
pub struct SwipeArea {
    min_distance: f64,
    engaged: bool,
    progress: ProgressRegistry,
    completion: CompletionRegistry,
}

impl SwipeArea {
    /// Create a surface with no engagement gate: every drag engages on its
    /// first sample.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface that ignores drags until they travel `min_distance`
    /// from their start. The gate must be zero or positive.
    pub fn with_min_distance(min_distance: f64) -> Result<Self> {
        if !(min_distance >= 0.0) {
            return Err(GestureError::InvalidMinDistance(min_distance));
        }
        Ok(Self {
            min_distance,
            ..Self::new()
        })
    }

    /// Register a progress monitor. Broadcast order is registration order.
    pub fn monitor_progress(&mut self, monitor: SwipeProgressMonitor) {
        self.progress.add(monitor);
    }

    /// Register a completion monitor. Broadcast order is registration order.
    pub fn monitor_completion(&mut self, monitor: SwipeCompletionMonitor) {
        self.completion.add(monitor);
    }

    /// Builder form of [`monitor_progress`](Self::monitor_progress).
    pub fn with_progress(mut self, monitor: SwipeProgressMonitor) -> Self {
        self.monitor_progress(monitor);
        self
    }

    /// Builder form of [`monitor_completion`](Self::monitor_completion).
    pub fn with_completion(mut self, monitor: SwipeCompletionMonitor) -> Self {
        self.monitor_completion(monitor);
        self
    }

    /// The progress registry for this surface.
    pub fn progress(&self) -> &ProgressRegistry {
        &self.progress
    }

    /// The completion registry for this surface.
    pub fn completion(&self) -> &CompletionRegistry {
        &self.completion
    }

    /// Whether an in-flight drag has cleared the engagement gate.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Feed a moved sample from the host's drag stream.
    ///
    /// Samples below the engagement gate are dropped; the first sample at or
    /// past the gate engages the drag, and from then on every sample reaches
    /// the progress monitors.
    pub fn drag_changed(&mut self, sample: DragSample) {
        let delta = sample.delta();
        if !self.engaged {
            if delta.magnitude() < self.min_distance {
                return;
            }
            self.engaged = true;
        }
        self.progress.broadcast(delta);
    }

    /// Feed the final sample of a drag.
    ///
    /// Hosts route interrupted and withdrawn drags here too, so every
    /// engaged gesture settles exactly one commit-or-cancel. A gated drag
    /// that never engaged ends silently.
    pub fn drag_ended(&mut self, sample: DragSample) {
        let engaged = self.engaged || self.min_distance == 0.0;
        self.engaged = false;
        if !engaged {
            tracing::trace!("SwipeArea::drag_ended - drag never cleared the gate, dropping");
            return;
        }
        self.completion.broadcast(sample.delta());
    }

    /// Forget an in-flight drag without a completion broadcast.
    ///
    /// For hosts tearing the surface down mid-drag; the completion monitors
    /// never hear about the gesture.
    pub fn reset(&mut self) {
        self.engaged = false;
    }
}

/// A press surface: a two-state recognizer feeding a press registry.
#[derive(Default)]
pub struct PressArea {
    phase: PressPhase,
    monitors: PressMonitorRegistry,
}

impl PressArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a press monitor. Broadcast order is registration order.
    pub fn monitor(&mut self, monitor: PressMonitor) {
        self.monitors.add(monitor);
    }

    /// Builder form of [`monitor`](Self::monitor).
    pub fn with_monitor(mut self, monitor: PressMonitor) -> Self {
        self.monitor(monitor);
        self
    }

    /// The registry for this surface.
    pub fn monitors(&self) -> &PressMonitorRegistry {
        &self.monitors
    }

    /// Current recognizer phase.
    pub fn phase(&self) -> PressPhase {
        self.phase
    }

    /// Whether contact is currently down.
    pub fn is_pressing(&self) -> bool {
        self.phase.is_pressing()
    }

    /// Feed a pointer-down transition. Broadcasts the begin phase on
    /// Idle -> Pressing; a repeated down while pressing is ignored.
    pub fn pointer_down(&mut self) {
        if let Some(next) = self.phase.on_event(press_events::POINTER_DOWN) {
            self.phase = next;
            self.monitors.press_started();
        }
    }

    /// Feed a pointer-up transition. Broadcasts the end phase on
    /// Pressing -> Idle; a stray up while idle is ignored.
    pub fn pointer_up(&mut self) {
        if let Some(next) = self.phase.on_event(press_events::POINTER_UP) {
            self.phase = next;
            self.monitors.press_ended();
        }
    }
}
