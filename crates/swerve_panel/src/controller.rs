//! Dismissable panel controller.
//!
//! One [`PanelController`] drives one panel surface - a bottom sheet, a side
//! drawer, or any other edge-anchored panel. It owns the visibility state
//! machine, a swipe surface armed with exactly one progress monitor and one
//! completion monitor, and a backdrop press surface wired to dismiss on
//! release.
//!
//! ```text
//!   content drag ──► SwipeArea ──► progress ──► drag_progress + observers
//!                        │
//!                        └───────► completion ──► commit: hide
//!                                                 cancel: snap back
//!   backdrop press ──► PressArea ──► release ──► hide
//!   host calls     ──► show() / hide()
//! ```
//!
//! The host feeds gestures and renders from the observer notifications and
//! [`PanelController::content_offset`]; the controller performs no rendering
//! and keeps no clock.

use std::cell::RefCell;
use std::rc::Rc;

use swerve_gesture::{
    Direction, DragSample, PressArea, PressMonitor, StateTransitions, SwipeArea,
    SwipeCompletionMonitor, SwipeProgressMonitor,
};

use crate::config::{PanelConfig, PanelExtent};
use crate::error::{PanelError, Result};
use crate::observer::{PanelMotion, PanelObserver};
use crate::state::{panel_events, PanelState};

type SharedPanel = Rc<RefCell<PanelShared>>;

/// State the monitor callbacks share with the controller.
struct PanelShared {
    state: PanelState,
    drag_progress: f64,
    observers: Vec<Rc<dyn PanelObserver>>,
}

/// Visibility, dismissal gestures, and backdrop handling for one panel.
///
/// Construction validates the config; a controller that constructs
/// successfully never errors while handling gestures. Controllers are
/// reusable: show, dismiss, and show again indefinitely.
pub struct PanelController {
    exit_direction: Direction,
    config: PanelConfig,
    content_extent: Option<f64>,
    shared: SharedPanel,
    swipe: SwipeArea,
    backdrop: PressArea,
}

impl PanelController {
    /// Bottom-anchored sheet; dragging toward the bottom edge dismisses.
    pub fn bottom_sheet(config: PanelConfig) -> Result<Self> {
        Self::new(Direction::PositiveY, config)
    }

    /// Left-edge drawer; dragging back toward the left edge dismisses.
    pub fn side_drawer(config: PanelConfig) -> Result<Self> {
        Self::new(Direction::NegativeX, config)
    }

    /// Panel dismissed by dragging toward `exit_direction`, which must be
    /// one of the four signed directions (a right-edge drawer exits
    /// `PositiveX`).
    pub fn new(exit_direction: Direction, config: PanelConfig) -> Result<Self> {
        if !matches!(
            exit_direction,
            Direction::PositiveX
                | Direction::NegativeX
                | Direction::PositiveY
                | Direction::NegativeY
        ) {
            return Err(PanelError::InvalidExitDirection(exit_direction));
        }
        config.validate()?;

        let shared = Rc::new(RefCell::new(PanelShared {
            state: PanelState::Hidden,
            drag_progress: 0.0,
            observers: Vec::new(),
        }));
        let backdrop = Self::build_backdrop(&shared);
        let mut controller = Self {
            exit_direction,
            config,
            content_extent: None,
            shared,
            swipe: SwipeArea::new(),
            backdrop,
        };
        // A fixed extent needs no container measurement; arm right away.
        if let PanelExtent::Fixed(extent) = config.extent {
            controller.arm(extent)?;
        }
        Ok(controller)
    }

    // ========================================================================
    // Extent resolution
    // ========================================================================

    /// Resolve the configured extent against the container measured along
    /// the exit axis (height for sheets, width for drawers) and arm the
    /// dismissal monitors:
    ///
    /// - progress target = content extent,
    /// - completion threshold = content extent * swipe sensitivity.
    ///
    /// Call again after a container resize; re-arming replaces the monitors
    /// and abandons any in-flight drag with a snap back to progress 0.
    pub fn set_container_extent(&mut self, container_extent: f64) -> Result<()> {
        if !(container_extent > 0.0) {
            return Err(PanelError::InvalidExtent(container_extent));
        }
        self.arm(self.config.extent.resolve(container_extent))
    }

    fn arm(&mut self, extent: f64) -> Result<()> {
        if !(extent > 0.0) {
            return Err(PanelError::InvalidExtent(extent));
        }
        let progress_shared = Rc::clone(&self.shared);
        let progress = SwipeProgressMonitor::new(self.exit_direction, extent, move |p| {
            Self::update_progress(&progress_shared, p);
        })?;

        let commit_shared = Rc::clone(&self.shared);
        let cancel_shared = Rc::clone(&self.shared);
        let threshold = extent * self.config.swipe_sensitivity;
        let completion = SwipeCompletionMonitor::new(
            self.exit_direction,
            threshold,
            move || {
                Self::apply_event(&commit_shared, panel_events::SWIPE_COMMITTED);
            },
            move || Self::snap_back(&cancel_shared),
        )?;

        let swipe = SwipeArea::with_min_distance(self.config.min_drag_distance)?
            .with_progress(progress)
            .with_completion(completion);
        // Re-arming abandons a drag in flight; snap its progress back
        // rather than leaving it parked at a stale value.
        if self.swipe.is_engaged() {
            Self::snap_back(&self.shared);
        }
        self.swipe = swipe;
        self.content_extent = Some(extent);
        tracing::debug!(
            "PanelController::arm - extent {} armed, dismiss threshold {}",
            extent,
            threshold
        );
        Ok(())
    }

    // ========================================================================
    // Host-facing operations
    // ========================================================================

    /// Present the panel. No-op while already visible.
    pub fn show(&mut self) {
        Self::apply_event(&self.shared, panel_events::SHOW);
    }

    /// Dismiss the panel and reset drag progress. No-op while hidden.
    pub fn hide(&mut self) {
        Self::apply_event(&self.shared, panel_events::HIDE);
    }

    /// Forward a moved sample from the content's drag stream.
    ///
    /// The panel must already be visible to be draggable; samples arriving
    /// while hidden (or before the extent resolves) are dropped.
    pub fn drag_changed(&mut self, sample: DragSample) {
        if !self.accepts_drags() {
            tracing::trace!("PanelController::drag_changed - not draggable, dropping sample");
            return;
        }
        self.swipe.drag_changed(sample);
    }

    /// Forward the final sample of a content drag.
    ///
    /// Ends arriving while the panel is hidden also clear the swipe
    /// surface's engagement, so a drag interrupted by a backdrop dismissal
    /// cannot leak into the next presentation.
    pub fn drag_ended(&mut self, sample: DragSample) {
        if !self.accepts_drags() {
            tracing::trace!("PanelController::drag_ended - not draggable, dropping end");
            self.swipe.reset();
            return;
        }
        self.swipe.drag_ended(sample);
    }

    /// Forward a pointer-down on the dimmed backdrop.
    pub fn backdrop_pressed(&mut self) {
        self.backdrop.pointer_down();
    }

    /// Forward the matching release. This is the dismissal trigger: the
    /// panel hides when the press ends, however long it lasted.
    pub fn backdrop_released(&mut self) {
        self.backdrop.pointer_up();
    }

    /// Register an observer. Notification order is registration order.
    pub fn observe(&mut self, observer: impl PanelObserver + 'static) {
        self.shared.borrow_mut().observers.push(Rc::new(observer));
    }

    /// Builder form of [`observe`](Self::observe).
    pub fn with_observer(mut self, observer: impl PanelObserver + 'static) -> Self {
        self.observe(observer);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> PanelState {
        self.shared.borrow().state
    }

    pub fn is_visible(&self) -> bool {
        self.state().is_visible()
    }

    /// Live dismissal-drag progress in `0.0..=1.0` (0 at rest).
    pub fn drag_progress(&self) -> f64 {
        self.shared.borrow().drag_progress
    }

    /// Resolved content extent, once known.
    pub fn content_extent(&self) -> Option<f64> {
        self.content_extent
    }

    /// Offset of the content from its resting position along the exit
    /// direction: `extent * drag_progress` while visible, the full extent
    /// while hidden (parked off-screen), 0 while the extent is unresolved.
    pub fn content_offset(&self) -> f64 {
        let extent = match self.content_extent {
            Some(extent) => extent,
            None => return 0.0,
        };
        let inner = self.shared.borrow();
        if inner.state.is_visible() {
            extent * inner.drag_progress
        } else {
            extent
        }
    }

    pub fn exit_direction(&self) -> Direction {
        self.exit_direction
    }

    pub fn config(&self) -> PanelConfig {
        self.config
    }

    fn accepts_drags(&self) -> bool {
        self.content_extent.is_some() && self.shared.borrow().state.is_visible()
    }

    // ========================================================================
    // Shared-state reactions (reached from monitor callbacks)
    // ========================================================================

    fn build_backdrop(shared: &SharedPanel) -> PressArea {
        let on_release = Rc::clone(shared);
        PressArea::new().with_monitor(PressMonitor::new().on_end(move || {
            Self::apply_event(&on_release, panel_events::BACKDROP_PRESSED);
        }))
    }

    /// Run one visibility event through the state machine, then notify.
    ///
    /// Mutation happens inside a single borrow; observers are invoked after
    /// the borrow is released so they may call back into the shared state.
    fn apply_event(shared: &SharedPanel, event: u32) {
        let (next, progress_reset, observers) = {
            let mut inner = shared.borrow_mut();
            let next = match inner.state.on_event(event) {
                Some(next) => next,
                None => return,
            };
            inner.state = next;
            let progress_reset = next.is_hidden() && inner.drag_progress != 0.0;
            if progress_reset {
                inner.drag_progress = 0.0;
            }
            (next, progress_reset, inner.observers.clone())
        };
        tracing::debug!("PanelController::apply_event - {:?} after event {}", next, event);
        for observer in &observers {
            observer.visibility_changed(next.is_visible(), PanelMotion::Animated);
        }
        if progress_reset {
            // Already off-screen; the render layer should not tween this.
            for observer in &observers {
                observer.progress_changed(0.0, PanelMotion::Immediate);
            }
        }
    }

    fn update_progress(shared: &SharedPanel, progress: f64) {
        let observers = {
            let mut inner = shared.borrow_mut();
            inner.drag_progress = progress;
            inner.observers.clone()
        };
        for observer in &observers {
            observer.progress_changed(progress, PanelMotion::Immediate);
        }
    }

    fn snap_back(shared: &SharedPanel) {
        let observers = {
            let mut inner = shared.borrow_mut();
            inner.drag_progress = 0.0;
            inner.observers.clone()
        };
        tracing::debug!("PanelController::snap_back - swipe cancelled");
        for observer in &observers {
            observer.progress_changed(0.0, PanelMotion::Animated);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swerve_gesture::Point;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Note {
        Visibility(bool, PanelMotion),
        Progress(f64, PanelMotion),
    }

    struct Recorder {
        notes: Rc<RefCell<Vec<Note>>>,
    }

    impl PanelObserver for Recorder {
        fn visibility_changed(&self, visible: bool, motion: PanelMotion) {
            self.notes
                .borrow_mut()
                .push(Note::Visibility(visible, motion));
        }

        fn progress_changed(&self, progress: f64, motion: PanelMotion) {
            self.notes
                .borrow_mut()
                .push(Note::Progress(progress, motion));
        }
    }

    fn recorded(controller: PanelController) -> (PanelController, Rc<RefCell<Vec<Note>>>) {
        let notes = Rc::new(RefCell::new(Vec::new()));
        let controller = controller.with_observer(Recorder {
            notes: Rc::clone(&notes),
        });
        (controller, notes)
    }

    fn sheet_drag(dy: f64) -> DragSample {
        DragSample::new(Point::new(200.0, 300.0), Point::new(200.0, 300.0 + dy))
    }

    #[test]
    fn test_sheet_and_drawer_exit_directions() {
        let sheet = PanelController::bottom_sheet(PanelConfig::default()).unwrap();
        assert_eq!(sheet.exit_direction(), Direction::PositiveY);

        let drawer = PanelController::side_drawer(PanelConfig::default()).unwrap();
        assert_eq!(drawer.exit_direction(), Direction::NegativeX);
    }

    #[test]
    fn test_unsigned_exit_directions_are_rejected() {
        for direction in [Direction::Any, Direction::X, Direction::Y] {
            assert_eq!(
                PanelController::new(direction, PanelConfig::default()).err(),
                Some(PanelError::InvalidExitDirection(direction))
            );
        }
    }

    #[test]
    fn test_config_validation_happens_at_construction() {
        let bad = PanelConfig::default().swipe_sensitivity(0.0);
        assert_eq!(
            PanelController::bottom_sheet(bad).err(),
            Some(PanelError::InvalidSwipeSensitivity(0.0))
        );
    }

    #[test]
    fn test_fixed_extent_arms_at_construction() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(240.0)).unwrap();
        assert_eq!(controller.content_extent(), Some(240.0));
    }

    #[test]
    fn test_fractional_extent_waits_for_the_container() {
        let mut controller =
            PanelController::bottom_sheet(PanelConfig::fractional(0.6)).unwrap();
        assert_eq!(controller.content_extent(), None);
        assert_eq!(controller.content_offset(), 0.0);

        controller.set_container_extent(500.0).unwrap();
        assert_eq!(controller.content_extent(), Some(300.0));
    }

    #[test]
    fn test_non_positive_container_extent_is_rejected() {
        let mut controller = PanelController::bottom_sheet(PanelConfig::default()).unwrap();
        assert_eq!(
            controller.set_container_extent(0.0).err(),
            Some(PanelError::InvalidExtent(0.0))
        );
    }

    #[test]
    fn test_show_and_hide_notify_with_animated_motion() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let (mut controller, notes) = recorded(controller);

        controller.show();
        assert!(controller.is_visible());
        controller.show(); // idempotent, no second notification
        controller.hide();
        assert!(!controller.is_visible());

        assert_eq!(
            *notes.borrow(),
            vec![
                Note::Visibility(true, PanelMotion::Animated),
                Note::Visibility(false, PanelMotion::Animated),
            ]
        );
    }

    #[test]
    fn test_drags_are_dropped_while_hidden() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let (mut controller, notes) = recorded(controller);

        controller.drag_changed(sheet_drag(60.0));
        controller.drag_ended(sheet_drag(200.0));

        assert!(!controller.is_visible());
        assert_eq!(controller.drag_progress(), 0.0);
        assert!(notes.borrow().is_empty());
    }

    #[test]
    fn test_drag_progress_follows_the_pointer() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let (mut controller, notes) = recorded(controller);
        controller.show();

        controller.drag_changed(sheet_drag(50.0));
        assert_eq!(controller.drag_progress(), 0.25);
        assert_eq!(controller.content_offset(), 50.0);
        assert_eq!(
            notes.borrow().last(),
            Some(&Note::Progress(0.25, PanelMotion::Immediate))
        );
    }

    #[test]
    fn test_committed_swipe_hides_and_resets_progress() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let (mut controller, notes) = recorded(controller);
        controller.show();

        controller.drag_changed(sheet_drag(70.0));
        controller.drag_ended(sheet_drag(70.0)); // threshold 200 * 0.3 = 60

        assert!(!controller.is_visible());
        assert_eq!(controller.drag_progress(), 0.0);
        assert_eq!(
            *notes.borrow(),
            vec![
                Note::Visibility(true, PanelMotion::Animated),
                Note::Progress(0.35, PanelMotion::Immediate),
                Note::Visibility(false, PanelMotion::Animated),
                Note::Progress(0.0, PanelMotion::Immediate),
            ]
        );
    }

    #[test]
    fn test_cancelled_swipe_snaps_back_and_stays_visible() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let (mut controller, notes) = recorded(controller);
        controller.show();

        controller.drag_changed(sheet_drag(30.0));
        controller.drag_ended(sheet_drag(30.0)); // below the 60 threshold

        assert!(controller.is_visible());
        assert_eq!(controller.drag_progress(), 0.0);
        assert_eq!(
            notes.borrow().last(),
            Some(&Note::Progress(0.0, PanelMotion::Animated))
        );
    }

    #[test]
    fn test_backdrop_release_dismisses() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let (mut controller, notes) = recorded(controller);
        controller.show();

        controller.backdrop_pressed();
        assert!(controller.is_visible(), "press begin must not dismiss");
        controller.backdrop_released();
        assert!(!controller.is_visible());

        assert_eq!(
            notes.borrow().last(),
            Some(&Note::Visibility(false, PanelMotion::Animated))
        );
    }

    #[test]
    fn test_backdrop_release_while_hidden_is_a_no_op() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let (mut controller, notes) = recorded(controller);

        controller.backdrop_pressed();
        controller.backdrop_released();
        assert!(!controller.is_visible());
        assert!(notes.borrow().is_empty());
    }

    #[test]
    fn test_offset_parks_at_full_extent_while_hidden() {
        let controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let (mut controller, _notes) = recorded(controller);
        assert_eq!(controller.content_offset(), 200.0);

        controller.show();
        assert_eq!(controller.content_offset(), 0.0);
    }

    #[test]
    fn test_observer_reads_back_the_new_state() {
        struct ReadBack {
            shared: SharedPanel,
            seen: Rc<RefCell<Vec<PanelState>>>,
        }
        impl PanelObserver for ReadBack {
            fn visibility_changed(&self, _visible: bool, _motion: PanelMotion) {
                self.seen.borrow_mut().push(self.shared.borrow().state);
            }
            fn progress_changed(&self, _progress: f64, _motion: PanelMotion) {}
        }

        let mut controller = PanelController::bottom_sheet(PanelConfig::fixed(200.0)).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        controller.observe(ReadBack {
            shared: Rc::clone(&controller.shared),
            seen: Rc::clone(&seen),
        });

        controller.show();
        controller.hide();
        assert_eq!(*seen.borrow(), vec![PanelState::Visible, PanelState::Hidden]);
    }
}
