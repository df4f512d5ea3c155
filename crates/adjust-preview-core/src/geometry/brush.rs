//! Brush stroke path
//!
//! A stroke is an ordered list of stamps. Stamps are appended while a paint
//! gesture is open and only ever removed all at once.

use crate::bounds::{clamp_percent, NormalizedPoint};
use serde::{Deserialize, Serialize};

/// One brush sample.
///
/// Size and opacity are captured when the stamp is painted, so later slider
/// changes do not alter stamps that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    /// X coordinate (0 to 100)
    pub x: f32,
    /// Y coordinate (0 to 100)
    pub y: f32,
    /// Diameter in percent of the surface width (0 to 100)
    pub size: f32,
    /// Captured opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Stamp {
    /// Create a stamp with every field clamped to its range.
    pub fn new(point: NormalizedPoint, size: f32, opacity: f32) -> Self {
        Self {
            x: clamp_percent(point.x),
            y: clamp_percent(point.y),
            size: clamp_percent(size),
            opacity: if opacity.is_nan() {
                0.0
            } else {
                opacity.clamp(0.0, 1.0)
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrushStroke {
    stamps: Vec<Stamp>,
}

impl BrushStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stamps(&self) -> &[Stamp] {
        &self.stamps
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    pub(crate) fn append(&mut self, stamp: Stamp) {
        self.stamps.push(stamp);
    }

    pub(crate) fn clear(&mut self) {
        self.stamps.clear();
    }
}
