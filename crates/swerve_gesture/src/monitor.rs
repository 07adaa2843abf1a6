//! Swipe monitors.
//!
//! A monitor observes one drag gesture through the displacement measured
//! from the gesture's start point. Two kinds exist:
//!
//! - [`SwipeProgressMonitor`] is fed every sample of a live drag and reports
//!   normalized progress toward a travel target.
//! - [`SwipeCompletionMonitor`] is fed once, when the drag ends, and settles
//!   the gesture as committed or cancelled.
//!
//! Monitors are immutable values: all per-gesture bookkeeping lives in the
//! areas that feed them (see [`crate::area`]). Both kinds filter on a
//! [`Direction`] and normalize against a target distance validated at
//! construction.

use std::rc::Rc;

use crate::direction::Direction;
use crate::error::{GestureError, Result};
use crate::geometry::Delta;

/// A callback receiving normalized progress in `0.0..=1.0`.
///
/// Uses `Rc` since gesture delivery is single-threaded.
pub type ProgressCallback = Rc<dyn Fn(f64)>;

/// A callback fired when a gesture's outcome settles.
pub type CompletionCallback = Rc<dyn Fn()>;

/// Common interface for monitors fed from an active drag.
pub trait SwipeMonitor {
    /// Observe the displacement measured from the gesture start.
    fn observe(&self, delta: Delta);
}

/// Reports live progress of a drag toward a travel target.
///
/// Progress is `min(1.0, travelled / target_distance)` where `travelled` is
/// measured along the monitored direction. While the drag's dominant
/// direction disagrees with the monitored one, the monitor reports 0 for
/// that sample (unless sub-direction travel is allowed), so listeners snap
/// back instead of holding a stale value.
#[derive(Clone)]
pub struct SwipeProgressMonitor {
    direction: Direction,
    target_distance: f64,
    allow_sub_direction: bool,
    on_progress: ProgressCallback,
}

impl SwipeProgressMonitor {
    /// Monitor progress toward `target_distance` of travel along
    /// `direction`. The target must be positive.
    pub fn new(
        direction: Direction,
        target_distance: f64,
        on_progress: impl Fn(f64) + 'static,
    ) -> Result<Self> {
        if !(target_distance > 0.0) {
            return Err(GestureError::InvalidTargetDistance(target_distance));
        }
        Ok(Self {
            direction,
            target_distance,
            allow_sub_direction: false,
            on_progress: Rc::new(on_progress),
        })
    }

    /// Keep measuring directed travel even while the drag's dominant
    /// direction disagrees with the monitored one.
    ///
    /// Off by default: a mismatched sample then reports 0. With the allowance
    /// on, a mostly-downward drag still reports its leftward component to a
    /// leftward monitor.
    pub fn allow_sub_direction(mut self, allow: bool) -> Self {
        self.allow_sub_direction = allow;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_distance(&self) -> f64 {
        self.target_distance
    }

    pub fn allows_sub_direction(&self) -> bool {
        self.allow_sub_direction
    }
}

impl SwipeMonitor for SwipeProgressMonitor {
    fn observe(&self, delta: Delta) {
        let primary = Direction::of(delta);
        if !self.allow_sub_direction && !primary.matches(self.direction) {
            // Report the reset exactly once; no fall-through into the
            // normal measurement below.
            (self.on_progress)(0.0);
            return;
        }
        let travelled = self.direction.distance_along(delta);
        (self.on_progress)((travelled / self.target_distance).min(1.0));
    }
}

/// Settles a finished drag as committed or cancelled.
///
/// Fed exactly once per gesture, with the total displacement from the
/// gesture start. The gesture commits when its dominant direction matches
/// the monitored one and the directed travel reached `target_distance`
/// (travel exactly equal to the target commits); every other ending
/// cancels. Allowing sub-direction travel drops the dominant-direction
/// requirement and settles by directed travel alone.
#[derive(Clone)]
pub struct SwipeCompletionMonitor {
    direction: Direction,
    target_distance: f64,
    allow_sub_direction: bool,
    on_committed: CompletionCallback,
    on_cancelled: CompletionCallback,
}

impl SwipeCompletionMonitor {
    /// Settle gestures against `target_distance` of travel along
    /// `direction`. The target must be positive.
    pub fn new(
        direction: Direction,
        target_distance: f64,
        on_committed: impl Fn() + 'static,
        on_cancelled: impl Fn() + 'static,
    ) -> Result<Self> {
        if !(target_distance > 0.0) {
            return Err(GestureError::InvalidTargetDistance(target_distance));
        }
        Ok(Self {
            direction,
            target_distance,
            allow_sub_direction: false,
            on_committed: Rc::new(on_committed),
            on_cancelled: Rc::new(on_cancelled),
        })
    }

    /// Settle by directed travel alone, even when the drag's dominant
    /// direction disagrees with the monitored one.
    ///
    /// Off by default: a mismatched gesture then cancels outright.
    pub fn allow_sub_direction(mut self, allow: bool) -> Self {
        self.allow_sub_direction = allow;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_distance(&self) -> f64 {
        self.target_distance
    }

    pub fn allows_sub_direction(&self) -> bool {
        self.allow_sub_direction
    }
}

impl SwipeMonitor for SwipeCompletionMonitor {
    fn observe(&self, delta: Delta) {
        let primary = Direction::of(delta);
        if !self.allow_sub_direction && !primary.matches(self.direction) {
            (self.on_cancelled)();
            return;
        }
        if self.direction.distance_along(delta) < self.target_distance {
            (self.on_cancelled)();
        } else {
            (self.on_committed)();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recording_progress(
        direction: Direction,
        target: f64,
    ) -> (SwipeProgressMonitor, Rc<RefCell<Vec<f64>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let monitor = SwipeProgressMonitor::new(direction, target, move |p| {
            sink.borrow_mut().push(p);
        })
        .unwrap();
        (monitor, log)
    }

    fn recording_completion(
        direction: Direction,
        target: f64,
    ) -> (SwipeCompletionMonitor, Rc<RefCell<Vec<&'static str>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let committed = Rc::clone(&log);
        let cancelled = Rc::clone(&log);
        let monitor = SwipeCompletionMonitor::new(
            direction,
            target,
            move || committed.borrow_mut().push("committed"),
            move || cancelled.borrow_mut().push("cancelled"),
        )
        .unwrap();
        (monitor, log)
    }

    #[test]
    fn test_progress_is_fraction_of_target() {
        let (monitor, log) = recording_progress(Direction::NegativeX, 300.0);
        monitor.observe(Delta::new(-50.0, 5.0));
        let progress = log.borrow()[0];
        assert!((progress - 50.0 / 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_progress_clamps_at_one() {
        let (monitor, log) = recording_progress(Direction::PositiveY, 100.0);
        monitor.observe(Delta::new(0.0, 250.0));
        assert_eq!(*log.borrow(), vec![1.0]);
    }

    #[test]
    fn test_progress_reaches_exactly_one_at_target() {
        let (monitor, log) = recording_progress(Direction::PositiveY, 120.0);
        monitor.observe(Delta::new(0.0, 120.0));
        assert_eq!(*log.borrow(), vec![1.0]);
    }

    #[test]
    fn test_mismatch_reports_zero_exactly_once() {
        let (monitor, log) = recording_progress(Direction::NegativeX, 300.0);
        // Dominantly downward, so a leftward monitor must reset.
        monitor.observe(Delta::new(-50.0, 80.0));
        assert_eq!(*log.borrow(), vec![0.0]);
    }

    #[test]
    fn test_sub_direction_allowance_keeps_measuring() {
        let (monitor, log) = recording_progress(Direction::NegativeX, 300.0);
        let monitor = monitor.allow_sub_direction(true);
        monitor.observe(Delta::new(-50.0, 80.0));
        let progress = log.borrow()[0];
        assert!((progress - 50.0 / 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_sub_direction_wrong_way_still_measures_zero() {
        let (monitor, log) = recording_progress(Direction::PositiveX, 100.0);
        let monitor = monitor.allow_sub_direction(true);
        monitor.observe(Delta::new(-40.0, 0.0));
        assert_eq!(*log.borrow(), vec![0.0]);
    }

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let (monitor, log) = recording_progress(Direction::Any, 50.0);
        let monitor = monitor.allow_sub_direction(true);
        for step in 0..20 {
            let reach = step as f64 * 10.0;
            monitor.observe(Delta::new(reach, reach / 2.0));
        }
        for p in log.borrow().iter() {
            assert!((0.0..=1.0).contains(p), "progress {p} out of range");
        }
        for pair in log.borrow().windows(2) {
            assert!(pair[0] <= pair[1], "growing travel must not lose progress");
        }
    }

    #[test]
    fn test_completion_commits_at_exact_target() {
        let (monitor, log) = recording_completion(Direction::PositiveY, 120.0);
        monitor.observe(Delta::new(0.0, 120.0));
        assert_eq!(*log.borrow(), vec!["committed"]);
    }

    #[test]
    fn test_completion_cancels_just_below_target() {
        let (monitor, log) = recording_completion(Direction::PositiveY, 120.0);
        monitor.observe(Delta::new(0.0, 119.0));
        assert_eq!(*log.borrow(), vec!["cancelled"]);
    }

    #[test]
    fn test_completion_cancels_on_direction_mismatch() {
        let (monitor, log) = recording_completion(Direction::NegativeX, 90.0);
        // Far enough, but dominantly vertical.
        monitor.observe(Delta::new(-50.0, 80.0));
        assert_eq!(*log.borrow(), vec!["cancelled"]);
    }

    #[test]
    fn test_completion_sub_direction_allowance_settles_by_travel_alone() {
        let (monitor, log) = recording_completion(Direction::NegativeX, 90.0);
        let monitor = monitor.allow_sub_direction(true);
        // Dominantly vertical, but the leftward component clears the target.
        monitor.observe(Delta::new(-95.0, 120.0));
        // Wrong-way travel still measures 0 and cancels.
        monitor.observe(Delta::new(95.0, 120.0));
        assert_eq!(*log.borrow(), vec!["committed", "cancelled"]);
    }

    #[test]
    fn test_completion_settles_exactly_once_per_observation() {
        let (monitor, log) = recording_completion(Direction::X, 10.0);
        monitor.observe(Delta::new(40.0, 1.0));
        monitor.observe(Delta::new(-2.0, 1.0));
        assert_eq!(*log.borrow(), vec!["committed", "cancelled"]);
    }

    #[test]
    fn test_zero_or_negative_target_is_rejected() {
        assert_eq!(
            SwipeProgressMonitor::new(Direction::Any, 0.0, |_| {}).err(),
            Some(GestureError::InvalidTargetDistance(0.0))
        );
        assert_eq!(
            SwipeProgressMonitor::new(Direction::Any, -3.0, |_| {}).err(),
            Some(GestureError::InvalidTargetDistance(-3.0))
        );
        assert!(SwipeCompletionMonitor::new(Direction::Y, 0.0, || {}, || {}).is_err());
    }

    #[test]
    fn test_nan_target_is_rejected() {
        assert!(SwipeProgressMonitor::new(Direction::Any, f64::NAN, |_| {}).is_err());
        assert!(SwipeCompletionMonitor::new(Direction::Any, f64::NAN, || {}, || {}).is_err());
    }
}
