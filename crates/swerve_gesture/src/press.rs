//! Two-phase press handling.
//!
//! A press has exactly two observable phases: it begins when the pointer
//! makes contact and ends when the pointer releases. There are no duration
//! or movement thresholds - the begin phase fires immediately on contact and
//! the end phase fires on release no matter how long the press lasted or how
//! far the pointer wandered. Hosts that want tap-vs-drag disambiguation do
//! it upstream in their recognizer.
//!
//! [`PressMonitor`]s subscribe to either or both phases;
//! [`PressMonitorRegistry`] broadcasts each phase to all monitors in
//! registration order. [`PressPhase`] is the recognizer state driven by
//! [`crate::area::PressArea`].

use std::rc::Rc;

use crate::fsm::StateTransitions;

/// A callback fired on a press phase.
///
/// Uses `Rc` since gesture delivery is single-threaded.
pub type PressCallback = Rc<dyn Fn()>;

/// Observer for a two-phase press.
///
/// Both phases are optional; a dismissal surface typically reacts to the
/// end phase only:
///
/// ```ignore
/// let monitor = PressMonitor::new().on_end(|| backdrop_tapped());
/// ```
#[derive(Default, Clone)]
pub struct PressMonitor {
    on_press_start: Option<PressCallback>,
    on_press_end: Option<PressCallback>,
}

impl PressMonitor {
    /// Create a monitor with no phase callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// React to the press-begin phase.
    pub fn on_start(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_press_start = Some(Rc::new(callback));
        self
    }

    /// React to the press-end phase.
    pub fn on_end(mut self, callback: impl Fn() + 'static) -> Self {
        self.on_press_end = Some(Rc::new(callback));
        self
    }

    /// Invoke the begin-phase callback, if subscribed.
    pub fn press_started(&self) {
        if let Some(callback) = &self.on_press_start {
            callback();
        }
    }

    /// Invoke the end-phase callback, if subscribed.
    pub fn press_ended(&self) {
        if let Some(callback) = &self.on_press_end {
            callback();
        }
    }
}

/// An ordered collection of press monitors sharing one press feed.
#[derive(Default, Clone)]
pub struct PressMonitorRegistry {
    monitors: Vec<PressMonitor>,
}

impl PressMonitorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a monitor. Broadcast order is registration order.
    pub fn add(&mut self, monitor: PressMonitor) {
        self.monitors.push(monitor);
    }

    /// Builder form of [`add`](Self::add) for registration chains.
    pub fn with(mut self, monitor: PressMonitor) -> Self {
        self.add(monitor);
        self
    }

    /// Broadcast the begin phase to every monitor, in registration order.
    pub fn press_started(&self) {
        for monitor in &self.monitors {
            monitor.press_started();
        }
    }

    /// Broadcast the end phase to every monitor, in registration order.
    pub fn press_ended(&self) {
        for monitor in &self.monitors {
            monitor.press_ended();
        }
    }

    /// Number of registered monitors.
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Whether no monitors are registered.
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Remove all monitors.
    pub fn clear(&mut self) {
        self.monitors.clear();
    }
}

/// Events driving press recognition.
pub mod press_events {
    /// Pointer made contact inside the pressable region.
    pub const POINTER_DOWN: u32 = 30001;
    /// Pointer released (or the host withdrew the press).
    pub const POINTER_UP: u32 = 30002;
}

/// Recognizer state for an in-flight press.
///
/// ```text
///             POINTER_DOWN
///     Idle ─────────────────► Pressing
///       ▲                        │
///       │       POINTER_UP       │
///       └────────────────────────┘
/// ```
///
/// Redundant events (a second down while pressing, a stray up while idle)
/// cause no transition, so phase broadcasts fire exactly once per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PressPhase {
    /// No contact.
    #[default]
    Idle,
    /// Contact is down; the press has begun but not yet ended.
    Pressing,
}

impl PressPhase {
    /// Returns true while contact is down.
    pub fn is_pressing(&self) -> bool {
        matches!(self, PressPhase::Pressing)
    }
}

impl StateTransitions for PressPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use press_events::*;

        match (self, event) {
            // Idle -> Pressing: contact made
            (PressPhase::Idle, POINTER_DOWN) => Some(PressPhase::Pressing),

            // Pressing -> Idle: contact released
            (PressPhase::Pressing, POINTER_UP) => Some(PressPhase::Idle),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_phase_transitions_round_trip() {
        let pressing = PressPhase::Idle.on_event(press_events::POINTER_DOWN);
        assert_eq!(pressing, Some(PressPhase::Pressing));
        assert!(pressing.unwrap().is_pressing());

        let idle = PressPhase::Pressing.on_event(press_events::POINTER_UP);
        assert_eq!(idle, Some(PressPhase::Idle));
    }

    #[test]
    fn test_redundant_events_do_not_transition() {
        assert_eq!(PressPhase::Idle.on_event(press_events::POINTER_UP), None);
        assert_eq!(
            PressPhase::Pressing.on_event(press_events::POINTER_DOWN),
            None
        );
    }

    #[test]
    fn test_monitor_without_callbacks_is_inert() {
        let monitor = PressMonitor::new();
        monitor.press_started();
        monitor.press_ended();
    }

    #[test]
    fn test_end_only_monitor_ignores_the_begin_phase() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let monitor = PressMonitor::new().on_end(move || sink.borrow_mut().push("end"));

        monitor.press_started();
        assert!(log.borrow().is_empty());
        monitor.press_ended();
        assert_eq!(*log.borrow(), vec!["end"]);
    }

    #[test]
    fn test_registry_broadcasts_each_phase_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let a_start = Rc::clone(&log);
        let a_end = Rc::clone(&log);
        let b_end = Rc::clone(&log);
        let registry = PressMonitorRegistry::new()
            .with(
                PressMonitor::new()
                    .on_start(move || a_start.borrow_mut().push("a start"))
                    .on_end(move || a_end.borrow_mut().push("a end")),
            )
            .with(PressMonitor::new().on_end(move || b_end.borrow_mut().push("b end")));

        registry.press_started();
        registry.press_ended();
        assert_eq!(*log.borrow(), vec!["a start", "a end", "b end"]);
    }
}
