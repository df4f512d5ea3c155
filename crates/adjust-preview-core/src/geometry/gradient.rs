//! Linear gradient geometry
//!
//! The gradient runs along a CSS-style angle (0° points up, 90° right,
//! 180° down). `start` and `end` are positions on that gradient line in
//! percent: the effect is full at `start` and gone at `end`.

use crate::bounds::{clamp_percent, NormalizedPoint};
use serde::{Deserialize, Serialize};

/// Which end of the gradient a handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientHandle {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientGeometry {
    /// Full-effect position along the gradient line (0 to 100)
    pub start: f32,
    /// Zero-effect position along the gradient line (0 to 100)
    pub end: f32,
    /// Direction of the gradient line in degrees (0 to 360)
    pub angle: f32,
}

impl Default for GradientGeometry {
    fn default() -> Self {
        Self {
            start: 30.0,
            end: 70.0,
            angle: 180.0,
        }
    }
}

impl GradientGeometry {
    pub fn position(&self, handle: GradientHandle) -> f32 {
        match handle {
            GradientHandle::Start => self.start,
            GradientHandle::End => self.end,
        }
    }

    /// Move one endpoint, clamped to 0-100. The other endpoint is untouched.
    pub fn set_position(&mut self, handle: GradientHandle, percent: f32) {
        let percent = clamp_percent(percent);
        match handle {
            GradientHandle::Start => self.start = percent,
            GradientHandle::End => self.end = percent,
        }
    }

    /// Set the angle, wrapped into `0.0..360.0`. Non-finite angles are ignored.
    pub fn set_angle(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.angle = normalize_angle(degrees);
        }
    }

    /// Project a surface point onto the gradient line.
    ///
    /// Returns where the point falls along the line in percent, with the
    /// line spanning the whole surface the way a CSS gradient line does:
    /// its length for angle θ is `|sin θ| + |cos θ|` surface units, so the
    /// corners map exactly to 0 and 100 for diagonal angles.
    pub fn project(&self, point: NormalizedPoint) -> f32 {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        let line_length = sin.abs() + cos.abs();
        // Screen y grows downwards, so "up" (0°) is negative y
        let offset = (point.x - 50.0) * sin - (point.y - 50.0) * cos;
        clamp_percent(50.0 + offset / line_length)
    }
}

#[inline]
fn normalize_angle(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
