//! Ordered broadcast collections for swipe monitors.
//!
//! A registry fans one drag displacement out to every registered monitor.
//! Delivery is synchronous and in registration order, and no monitor's
//! outcome short-circuits the rest - each monitor reacts to the gesture in
//! isolation.
//!
//! Registries are assembled once during setup, either by appending with
//! [`MonitorRegistry::add`] or by chaining [`MonitorRegistry::with`]:
//!
//! ```ignore
//! let registry = MonitorRegistry::new()
//!     .with(progress_bar_monitor)
//!     .with(haptic_monitor);
//! registry.broadcast(sample.delta());
//! ```

use crate::geometry::Delta;
use crate::monitor::{SwipeCompletionMonitor, SwipeMonitor, SwipeProgressMonitor};

/// Registry of every progress monitor attached to a surface.
pub type ProgressRegistry = MonitorRegistry<SwipeProgressMonitor>;

/// Registry of every completion monitor attached to a surface.
pub type CompletionRegistry = MonitorRegistry<SwipeCompletionMonitor>;

/// An ordered collection of monitors sharing one gesture feed.
#[derive(Clone)]
pub struct MonitorRegistry<M> {
    monitors: Vec<M>,
}

impl<M: SwipeMonitor> MonitorRegistry<M> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Append a monitor. Broadcast order is registration order.
    pub fn add(&mut self, monitor: M) {
        self.monitors.push(monitor);
    }

    /// Builder form of [`add`](Self::add) for registration chains.
    pub fn with(mut self, monitor: M) -> Self {
        self.add(monitor);
        self
    }

    /// Feed `delta` to every monitor, in registration order.
    pub fn broadcast(&self, delta: Delta) {
        for monitor in &self.monitors {
            monitor.observe(delta);
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

impl<M: SwipeMonitor> Default for MonitorRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}
