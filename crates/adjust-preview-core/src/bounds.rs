//! Editing surface bounds and pointer normalization.
//!
//! Pointer events arrive in screen pixels. Geometry is stored in a
//! resolution-independent percentage space.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left corner of the editing surface
//! - (100, 100) = bottom-right corner of the editing surface
//!
//! The bounds travel with every pointer event and are never cached: the
//! host may resize the surface in the middle of a drag.

use serde::{Deserialize, Serialize};

/// Lowest percentage coordinate.
pub const PERCENT_MIN: f32 = 0.0;
/// Highest percentage coordinate.
pub const PERCENT_MAX: f32 = 100.0;

/// Clamp a percentage into `0.0..=100.0`.
///
/// NaN maps to 0.0 so that no stored coordinate can ever be NaN.
#[inline]
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        return PERCENT_MIN;
    }
    value.clamp(PERCENT_MIN, PERCENT_MAX)
}

/// Pixel rectangle of the editing surface as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a screen position into surface percentages.
    ///
    /// `percent = clamp((client - origin) / extent * 100, 0, 100)` per axis.
    /// Positions outside the rectangle clamp to its edges.
    pub fn normalize(&self, client_x: f64, client_y: f64) -> NormalizedPoint {
        NormalizedPoint {
            x: normalize_axis(client_x, self.left, self.width),
            y: normalize_axis(client_y, self.top, self.height),
        }
    }

    /// Whether the surface has a usable (positive) area.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// A collapsed or negative extent has no meaningful percentage, so every
/// position maps to the origin edge.
#[inline]
fn normalize_axis(client: f64, origin: f64, extent: f64) -> f32 {
    if extent.is_nan() || extent <= 0.0 {
        return PERCENT_MIN;
    }
    let percent = (client - origin) / extent * 100.0;
    clamp_percent(percent as f32)
}

/// A position in surface percentages, both axes within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    /// Build a point, clamping both coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }
}

/// One pointer sample forwarded by the host together with the live bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub bounds: CanvasBounds,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64, bounds: CanvasBounds) -> Self {
        Self {
            client_x,
            client_y,
            bounds,
        }
    }

    #[inline]
    pub fn normalized(&self) -> NormalizedPoint {
        self.bounds.normalize(self.client_x, self.client_y)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
