//! Per-tool geometry for local adjustments
//!
//! Each tool owns its own geometry, and the three are stored side by side
//! so switching tools never disturbs the others.
//!
//! ## Geometry Types
//!
//! - **Gradient**: start/end positions along a gradient line at an angle
//! - **Radial**: an ellipse with center and per-axis extents
//! - **Brush**: an append-only path of stamps
//!
//! All coordinates are percentages of the editing surface and are clamped
//! when written, so every read observes values within 0-100.

pub mod brush;
pub mod gradient;
pub mod radial;

pub use brush::{BrushStroke, Stamp};
pub use gradient::{GradientGeometry, GradientHandle};
pub use radial::RadialGeometry;

use crate::config::DEFAULT_RADIAL_EXTENT_FLOOR;
use serde::Serialize;

/// Geometry of all three tools.
///
/// The mutators below are the only way to change it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryStore {
    gradient: GradientGeometry,
    radial: RadialGeometry,
    brush: BrushStroke,
    #[serde(skip)]
    stroke_open: bool,
    #[serde(skip)]
    extent_floor: f32,
}

impl Default for GeometryStore {
    fn default() -> Self {
        Self::with_extent_floor(DEFAULT_RADIAL_EXTENT_FLOOR)
    }
}

impl GeometryStore {
    /// Create a store with the documented default geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose radial extents never drop below `floor`.
    pub fn with_extent_floor(floor: f32) -> Self {
        Self {
            gradient: GradientGeometry::default(),
            radial: RadialGeometry::default(),
            brush: BrushStroke::new(),
            stroke_open: false,
            extent_floor: floor,
        }
    }

    pub fn gradient(&self) -> &GradientGeometry {
        &self.gradient
    }

    pub fn radial(&self) -> &RadialGeometry {
        &self.radial
    }

    pub fn brush(&self) -> &BrushStroke {
        &self.brush
    }

    pub fn extent_floor(&self) -> f32 {
        self.extent_floor
    }

    /// Whether a paint gesture currently accepts stamps.
    pub fn is_stroke_open(&self) -> bool {
        self.stroke_open
    }

    /// Move one gradient endpoint, clamped to 0-100.
    pub fn update_gradient(&mut self, which: GradientHandle, percent: f32) {
        self.gradient.set_position(which, percent);
    }

    pub fn update_gradient_angle(&mut self, degrees: f32) {
        self.gradient.set_angle(degrees);
    }

    /// Move the radial center, clamped to 0-100 on both axes.
    pub fn update_radial_center(&mut self, x: f32, y: f32) {
        self.radial.set_center(x, y);
    }

    /// Resize the radial mask, clamped to `floor..=100` on both axes.
    pub fn update_radial_extent(&mut self, size: f32, feather: f32) {
        self.radial.set_extent(size, feather, self.extent_floor);
    }

    /// Append a stamp to the stroke.
    ///
    /// Only accepted while a paint gesture is open; otherwise the stamp is
    /// dropped. Returns whether it was appended.
    pub fn append_brush_stamp(&mut self, stamp: Stamp) -> bool {
        if !self.stroke_open {
            tracing::debug!("brush stamp dropped: no paint gesture open");
            return false;
        }
        self.brush.append(stamp);
        true
    }

    /// Remove every stamp, whether or not a gesture is open.
    pub fn clear_brush(&mut self) {
        self.brush.clear();
    }

    /// Restore gradient and radial defaults and clear the brush.
    ///
    /// Tone values live elsewhere and are not affected.
    pub fn reset_positions(&mut self) {
        self.gradient = GradientGeometry::default();
        self.radial = RadialGeometry::default();
        self.brush.clear();
    }

    pub(crate) fn open_stroke(&mut self) {
        self.stroke_open = true;
    }

    pub(crate) fn close_stroke(&mut self) {
        self.stroke_open = false;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn in_percent(value: f32) -> bool {
        (0.0..=100.0).contains(&value)
    }

    proptest! {
        /// Property: No sequence of writes leaves a coordinate outside 0-100.
        #[test]
        fn prop_writes_stay_in_range(
            start in -1.0e6f32..1.0e6,
            end in -1.0e6f32..1.0e6,
            cx in -1.0e6f32..1.0e6,
            cy in -1.0e6f32..1.0e6,
            size in -1.0e6f32..1.0e6,
            feather in -1.0e6f32..1.0e6,
        ) {
            let mut store = GeometryStore::new();
            store.update_gradient(GradientHandle::Start, start);
            store.update_gradient(GradientHandle::End, end);
            store.update_radial_center(cx, cy);
            store.update_radial_extent(size, feather);

            let g = store.gradient();
            let r = store.radial();
            prop_assert!(in_percent(g.start) && in_percent(g.end));
            prop_assert!(in_percent(r.center_x) && in_percent(r.center_y));
            prop_assert!(r.size >= 5.0 && r.size <= 100.0);
            prop_assert!(r.feather >= 5.0 && r.feather <= 100.0);
        }
    }
}
