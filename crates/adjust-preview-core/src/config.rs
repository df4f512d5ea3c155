//! Engine configuration supplied by the host when a session is created.
//!
//! Every field has a default, so hosts only pass what they want to change:
//!
//! ```json
//! { "brush_size": 12, "leave_policy": "keep_dragging" }
//! ```

use serde::{Deserialize, Serialize};

/// Default brush stamp diameter, in percent of the surface.
pub const DEFAULT_BRUSH_SIZE: f32 = 8.0;
/// Smallest brush stamp diameter.
pub const MIN_BRUSH_SIZE: f32 = 1.0;
/// Default floor for the radial mask's size and feather.
pub const DEFAULT_RADIAL_EXTENT_FLOOR: f32 = 5.0;

/// What happens to an open gesture when the pointer leaves the surface.
///
/// The same policy applies to every tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// Leaving the surface ends the gesture, like a release.
    #[default]
    EndGesture,
    /// Leaving is ignored; only a release ends the gesture. Positions
    /// outside the surface clamp to its edges.
    KeepDragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Diameter of newly painted brush stamps (1 to 100 percent)
    pub brush_size: f32,
    /// Lower bound for the radial size and feather (1 to 50 percent)
    pub radial_extent_floor: f32,
    pub leave_policy: LeavePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            brush_size: DEFAULT_BRUSH_SIZE,
            radial_extent_floor: DEFAULT_RADIAL_EXTENT_FLOOR,
            leave_policy: LeavePolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Clamp every numeric field into its supported range.
    ///
    /// Non-finite values fall back to the defaults.
    pub fn sanitized(self) -> Self {
        Self {
            brush_size: clamp_or_default(self.brush_size, MIN_BRUSH_SIZE, 100.0, DEFAULT_BRUSH_SIZE),
            radial_extent_floor: clamp_or_default(
                self.radial_extent_floor,
                1.0,
                50.0,
                DEFAULT_RADIAL_EXTENT_FLOOR,
            ),
            leave_policy: self.leave_policy,
        }
    }
}

/// Clamp a brush diameter into the supported range.
#[inline]
pub fn clamp_brush_size(size: f32) -> f32 {
    clamp_or_default(size, MIN_BRUSH_SIZE, 100.0, DEFAULT_BRUSH_SIZE)
}

#[inline]
fn clamp_or_default(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        default
    }
}
