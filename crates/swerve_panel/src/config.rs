//! Panel configuration.

use crate::error::{PanelError, Result};

/// Default fraction of the container a fractional panel occupies.
pub const DEFAULT_EXTENT_RATE: f64 = 0.6;
/// Conventional fixed extent for panels sized independently of the
/// container.
pub const DEFAULT_STATIC_EXTENT: f64 = 100.0;
/// Default fraction of the extent a dismissal swipe must travel to commit.
pub const DEFAULT_SWIPE_SENSITIVITY: f64 = 0.3;
/// Default travel before a dismissal drag engages.
pub const DEFAULT_MIN_DRAG_DISTANCE: f64 = 10.0;

/// How a panel's content extent along its exit axis is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelExtent {
    /// Fixed size in host units.
    Fixed(f64),
    /// Fraction of the container's extent measured along the exit axis.
    FractionOfContainer(f64),
}

impl PanelExtent {
    /// Resolve to a concrete extent against the container measurement.
    pub fn resolve(self, container_extent: f64) -> f64 {
        match self {
            PanelExtent::Fixed(extent) => extent,
            PanelExtent::FractionOfContainer(rate) => container_extent * rate,
        }
    }

    /// The configured scalar, for validation.
    fn raw_value(self) -> f64 {
        match self {
            PanelExtent::Fixed(extent) => extent,
            PanelExtent::FractionOfContainer(rate) => rate,
        }
    }
}

/// Tuning for a dismissable panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConfig {
    /// Content size along the exit axis.
    pub extent: PanelExtent,
    /// Fraction of the extent a swipe must travel to commit a dismissal.
    /// The threshold is `extent * swipe_sensitivity`.
    pub swipe_sensitivity: f64,
    /// Travel below this never starts a dismissal drag.
    pub min_drag_distance: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            extent: PanelExtent::FractionOfContainer(DEFAULT_EXTENT_RATE),
            swipe_sensitivity: DEFAULT_SWIPE_SENSITIVITY,
            min_drag_distance: DEFAULT_MIN_DRAG_DISTANCE,
        }
    }
}

impl PanelConfig {
    /// Extent as a fraction of the container (the common case).
    pub fn fractional(rate: f64) -> Self {
        Self {
            extent: PanelExtent::FractionOfContainer(rate),
            ..Default::default()
        }
    }

    /// Fixed extent in host units, independent of the container.
    pub fn fixed(extent: f64) -> Self {
        Self {
            extent: PanelExtent::Fixed(extent),
            ..Default::default()
        }
    }

    /// Set the commit threshold fraction. Must be in `(0, 1]`.
    pub fn swipe_sensitivity(mut self, sensitivity: f64) -> Self {
        self.swipe_sensitivity = sensitivity;
        self
    }

    /// Set the engagement gate for dismissal drags.
    pub fn min_drag_distance(mut self, distance: f64) -> Self {
        self.min_drag_distance = distance;
        self
    }

    /// Check every knob's range. Controllers call this on construction so a
    /// bad value surfaces before any gesture flows.
    pub fn validate(&self) -> Result<()> {
        let sensitivity = self.swipe_sensitivity;
        if !(sensitivity > 0.0 && sensitivity <= 1.0) {
            return Err(PanelError::InvalidSwipeSensitivity(sensitivity));
        }
        let raw = self.extent.raw_value();
        if !(raw > 0.0) {
            return Err(PanelError::InvalidExtent(raw));
        }
        if !(self.min_drag_distance >= 0.0) {
            return Err(PanelError::Gesture(
                swerve_gesture::GestureError::InvalidMinDistance(self.min_drag_distance),
            ));
        }
        Ok(())
    }
}
