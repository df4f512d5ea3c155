//! Radial (elliptical) mask geometry
//!
//! The mask is an ellipse centered at `(center_x, center_y)`. `size` is the
//! horizontal radius and `feather` the vertical radius, both in percent of
//! the surface, so the falloff is independent per axis.

use crate::bounds::{clamp_percent, NormalizedPoint, PERCENT_MAX};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialGeometry {
    /// Center X coordinate (0 to 100)
    pub center_x: f32,
    /// Center Y coordinate (0 to 100)
    pub center_y: f32,
    /// Horizontal extent (floor to 100)
    pub size: f32,
    /// Vertical extent (floor to 100)
    pub feather: f32,
}

impl Default for RadialGeometry {
    fn default() -> Self {
        Self {
            center_x: 50.0,
            center_y: 50.0,
            size: 60.0,
            feather: 50.0,
        }
    }
}

impl RadialGeometry {
    pub fn center(&self) -> NormalizedPoint {
        NormalizedPoint {
            x: self.center_x,
            y: self.center_y,
        }
    }

    /// Move the center, clamping both coordinates to 0-100.
    pub fn set_center(&mut self, x: f32, y: f32) {
        self.center_x = clamp_percent(x);
        self.center_y = clamp_percent(y);
    }

    /// Set both extents, clamped to `floor..=100`.
    ///
    /// The floor keeps the ellipse from collapsing into something the user
    /// can no longer grab.
    pub fn set_extent(&mut self, size: f32, feather: f32, floor: f32) {
        self.size = clamp_extent(size, floor);
        self.feather = clamp_extent(feather, floor);
    }

    /// Extents that would put the ellipse's edge under `point`.
    ///
    /// Returned unclamped; [`RadialGeometry::set_extent`] applies the bounds.
    pub fn extent_towards(&self, point: NormalizedPoint) -> (f32, f32) {
        (
            (point.x - self.center_x).abs(),
            (point.y - self.center_y).abs(),
        )
    }
}

#[inline]
fn clamp_extent(value: f32, floor: f32) -> f32 {
    let floor = clamp_percent(floor);
    if value.is_nan() {
        return floor;
    }
    value.clamp(floor, PERCENT_MAX)
}
