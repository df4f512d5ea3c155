//! Adjust Preview Core - Local adjustment preview engine
//!
//! This crate models the local adjustment tools of a photo editor (linear
//! gradient, radial mask and freehand brush) for an interactive teaching
//! widget. It keeps the tool geometry and shared tone sliders, turns pointer
//! gestures into geometry updates, and derives a renderer-agnostic overlay
//! description that the host paints on top of the base image.
//!
//! No pixels are processed here: the output is an [`OverlaySpec`].
//!
//! # Module Structure
//!
//! - `tone` - Shared tone sliders (exposure, contrast, ...)
//! - `bounds` - Editing surface bounds and pointer normalization
//! - `geometry` - Per-tool geometry store
//! - `interaction` - Pointer gesture state machine and listener scoping
//! - `overlay` - Overlay derivation and the CSS adapter
//! - `preset` - Named preset bundles
//! - `session` - The editing session tying everything together

pub mod bounds;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod overlay;
pub mod preset;
pub mod session;
pub mod tone;

pub use bounds::{clamp_percent, CanvasBounds, NormalizedPoint, PointerEvent};
pub use config::{EngineConfig, LeavePolicy};
pub use error::{InteractionError, PresetError};
pub use geometry::{
    BrushStroke, GeometryStore, GradientGeometry, GradientHandle, RadialGeometry, Stamp,
};
pub use interaction::{
    DragHandle, Gesture, ListenerHost, ListenerRegistry, PointerInteractionController,
};
pub use overlay::{render, BlendIntent, ColorChannel, OverlayKind, OverlayShape, OverlaySpec};
pub use preset::{builtin_presets, Preset};
pub use session::AdjustmentSession;
pub use tone::{ToneParam, ToneParameters};

/// The local adjustment tools.
///
/// Exactly one tool is active in a session. Each tool owns its own geometry,
/// so switching between them never touches the geometry of the others.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentTool {
    /// Linear gradient between two positions along an angle
    #[default]
    Gradient,
    /// Elliptical mask around a center point
    Radial,
    /// Freehand brush stroke
    Brush,
}

impl AdjustmentTool {
    pub const ALL: [AdjustmentTool; 3] = [Self::Gradient, Self::Radial, Self::Brush];

    /// Lowercase name used by the host bindings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::Radial => "radial",
            Self::Brush => "brush",
        }
    }

    /// Parse a tool name as produced by [`AdjustmentTool::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }
}
