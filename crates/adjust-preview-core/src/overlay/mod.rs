//! Overlay derivation
//!
//! Maps the active tool, its geometry and the tone sliders to an
//! [`OverlaySpec`]: a renderer-agnostic description of what to paint on top
//! of the base image. Canvas, SVG or GPU hosts consume the spec directly;
//! browser hosts can use the [`css`] adapter.
//!
//! ## Derivation Rules
//!
//! - Color is white and the blend lightens when exposure >= 0, otherwise
//!   black and darkening
//! - Opacity is `|exposure| / 100`, clamped to 0.0-1.0
//! - Gradient and radial shapes fade from full opacity to zero
//! - Brush stamps carry the opacity captured when they were painted

pub mod css;

use crate::geometry::{GeometryStore, Stamp};
use crate::tone::ToneParameters;
use crate::AdjustmentTool;
use serde::{Deserialize, Serialize};

/// Fill color of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChannel {
    White,
    Black,
}

/// Whether the overlay brightens or darkens what lies beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendIntent {
    Lighten,
    Darken,
}

/// Shape family of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Linear,
    Radial,
    Stamps,
}

/// A color stop: `offset` in percent along the gradient, `opacity` 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub opacity: f32,
}

impl GradientStop {
    pub fn new(offset: f32, opacity: f32) -> Self {
        Self { offset, opacity }
    }
}

/// Geometry of the overlay, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OverlayShape {
    /// Stops along a line at `angle` degrees (CSS convention, 180 = downwards)
    Linear { angle: f32, stops: [GradientStop; 2] },
    /// Stops from the center (offset 0) to the ellipse edge (offset 100)
    Radial {
        center_x: f32,
        center_y: f32,
        radius_x: f32,
        radius_y: f32,
        stops: [GradientStop; 2],
    },
    /// One soft circular region per stamp
    Stamps { stamps: Vec<Stamp> },
}

impl OverlayShape {
    pub fn kind(&self) -> OverlayKind {
        match self {
            Self::Linear { .. } => OverlayKind::Linear,
            Self::Radial { .. } => OverlayKind::Radial,
            Self::Stamps { .. } => OverlayKind::Stamps,
        }
    }
}

/// Everything a renderer needs to paint the adjustment preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlaySpec {
    pub color: ColorChannel,
    pub blend: BlendIntent,
    /// Overall strength, `|exposure| / 100`
    pub opacity: f32,
    pub shape: OverlayShape,
}

impl OverlaySpec {
    pub fn kind(&self) -> OverlayKind {
        self.shape.kind()
    }

    /// Whether painting this overlay would leave the image unchanged.
    pub fn is_invisible(&self) -> bool {
        match &self.shape {
            OverlayShape::Stamps { stamps } => stamps.iter().all(|s| s.opacity <= 0.0),
            _ => self.opacity <= 0.0,
        }
    }
}

/// Derive the overlay for `tool`.
///
/// Total over every input: geometry is already clamped by the store, and
/// opacity is clamped here even if the tone values were not.
pub fn render(tool: AdjustmentTool, geometry: &GeometryStore, tone: &ToneParameters) -> OverlaySpec {
    let (color, blend) = if tone.brightens() {
        (ColorChannel::White, BlendIntent::Lighten)
    } else {
        (ColorChannel::Black, BlendIntent::Darken)
    };
    let opacity = tone.exposure_strength();

    let shape = match tool {
        AdjustmentTool::Gradient => {
            let g = geometry.gradient();
            OverlayShape::Linear {
                angle: g.angle,
                stops: [
                    GradientStop::new(g.start, opacity),
                    GradientStop::new(g.end, 0.0),
                ],
            }
        }
        AdjustmentTool::Radial => {
            let r = geometry.radial();
            OverlayShape::Radial {
                center_x: r.center_x,
                center_y: r.center_y,
                radius_x: r.size,
                radius_y: r.feather,
                stops: [GradientStop::new(0.0, opacity), GradientStop::new(100.0, 0.0)],
            }
        }
        AdjustmentTool::Brush => OverlayShape::Stamps {
            stamps: geometry.brush().stamps().to_vec(),
        },
    };

    OverlaySpec {
        color,
        blend,
        opacity,
        shape,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
