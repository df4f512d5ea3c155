//! Error types for the operations a caller can see rejected.
//!
//! Most writes never fail: out-of-range values are clamped. Only preset
//! bundles and gesture requests can be refused, and both leave the session
//! untouched when they are.

use crate::interaction::{DragHandle, Gesture};
use crate::tone::ToneParam;
use crate::AdjustmentTool;
use thiserror::Error;

/// A preset bundle that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresetError {
    #[error("preset {preset:?}: {param} value {value} is outside {min}..={max}")]
    OutOfRange {
        preset: String,
        param: ToneParam,
        value: i32,
        min: i32,
        max: i32,
    },
}

/// A gesture request that was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InteractionError {
    #[error("a {active:?} gesture is already in progress")]
    GestureInProgress { active: Gesture },

    #[error("handle {handle:?} cannot be dragged with the {tool:?} tool")]
    HandleMismatch {
        tool: AdjustmentTool,
        handle: DragHandle,
    },
}
