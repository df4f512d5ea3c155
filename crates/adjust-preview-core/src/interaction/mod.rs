//! Pointer gesture state machine
//!
//! Converts pointer events into geometry updates. At most one gesture is
//! open at a time:
//!
//! ```text
//! Idle -> DraggingGradientHandle(start|end) -> Idle
//!      -> DraggingRadialCenter              -> Idle
//!      -> ResizingRadial                    -> Idle
//!      -> PaintingBrush                     -> Idle
//! ```
//!
//! Hit-testing belongs to the host: a gesture begins with an already
//! resolved [`DragHandle`]. Every move is normalized against the bounds
//! delivered with that move, never against bounds from the press.

pub mod listener;

pub use listener::{ListenerHost, ListenerId, ListenerKind, ListenerRegistry, ListenerScope};

use crate::bounds::PointerEvent;
use crate::config::{clamp_brush_size, EngineConfig, LeavePolicy};
use crate::error::InteractionError;
use crate::geometry::{GeometryStore, GradientHandle, Stamp};
use crate::tone::ToneParameters;
use crate::AdjustmentTool;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// What the pointer was pressed on, as resolved by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragHandle {
    /// One of the gradient endpoint handles
    Gradient(GradientHandle),
    /// The radial mask's center handle
    RadialCenter,
    /// The radial mask's edge (resize) handle
    RadialEdge,
    /// The bare surface, where the brush paints
    Canvas,
}

/// An open gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    DraggingGradientHandle(GradientHandle),
    DraggingRadialCenter,
    ResizingRadial,
    PaintingBrush,
}

impl Gesture {
    /// The gesture a press on `handle` starts with `tool` active, if any.
    pub fn for_handle(tool: AdjustmentTool, handle: DragHandle) -> Option<Self> {
        match (tool, handle) {
            (AdjustmentTool::Gradient, DragHandle::Gradient(which)) => {
                Some(Self::DraggingGradientHandle(which))
            }
            (AdjustmentTool::Radial, DragHandle::RadialCenter) => Some(Self::DraggingRadialCenter),
            (AdjustmentTool::Radial, DragHandle::RadialEdge) => Some(Self::ResizingRadial),
            (AdjustmentTool::Brush, DragHandle::Canvas) => Some(Self::PaintingBrush),
            _ => None,
        }
    }

    /// The tool whose geometry this gesture edits.
    pub const fn tool(self) -> AdjustmentTool {
        match self {
            Self::DraggingGradientHandle(_) => AdjustmentTool::Gradient,
            Self::DraggingRadialCenter | Self::ResizingRadial => AdjustmentTool::Radial,
            Self::PaintingBrush => AdjustmentTool::Brush,
        }
    }
}

struct ActiveGesture<H: ListenerHost> {
    gesture: Gesture,
    // Released when the gesture is dropped
    _listeners: ListenerScope<H>,
}

/// Drives geometry from pointer gestures.
///
/// The controller holds only gesture state; geometry and tone are borrowed
/// per call so the stores keep a single owner.
pub struct PointerInteractionController<H: ListenerHost> {
    host: Rc<H>,
    active: Option<ActiveGesture<H>>,
    brush_size: f32,
    leave_policy: LeavePolicy,
}

impl<H: ListenerHost> PointerInteractionController<H> {
    pub fn new(host: Rc<H>, config: &EngineConfig) -> Self {
        let config = config.sanitized();
        Self {
            host,
            active: None,
            brush_size: config.brush_size,
            leave_policy: config.leave_policy,
        }
    }

    /// The open gesture, or `None` when idle.
    pub fn gesture(&self) -> Option<Gesture> {
        self.active.as_ref().map(|active| active.gesture)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    /// Diameter for stamps painted from now on; existing stamps keep theirs.
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = clamp_brush_size(size);
    }

    pub fn leave_policy(&self) -> LeavePolicy {
        self.leave_policy
    }

    /// Open a gesture for a press on `handle`.
    ///
    /// Rejected without side effects when a gesture is already open or the
    /// handle does not belong to `tool`. A brush press paints its first
    /// stamp immediately; handle presses do not move anything until the
    /// first move.
    pub fn begin(
        &mut self,
        tool: AdjustmentTool,
        handle: DragHandle,
        event: &PointerEvent,
        geometry: &mut GeometryStore,
        tone: &ToneParameters,
    ) -> Result<Gesture, InteractionError> {
        if let Some(active) = &self.active {
            tracing::warn!(active = ?active.gesture, ?handle, "gesture begin ignored: already dragging");
            return Err(InteractionError::GestureInProgress {
                active: active.gesture,
            });
        }
        let gesture = Gesture::for_handle(tool, handle).ok_or_else(|| {
            tracing::warn!(?tool, ?handle, "gesture begin ignored: handle not on active tool");
            InteractionError::HandleMismatch { tool, handle }
        })?;

        tracing::debug!(?gesture, "gesture started");
        self.active = Some(ActiveGesture {
            gesture,
            _listeners: ListenerScope::acquire(&self.host),
        });

        if gesture == Gesture::PaintingBrush {
            geometry.open_stroke();
            self.paint(event, geometry, tone);
        }
        Ok(gesture)
    }

    /// Apply a pointer move to the open gesture.
    ///
    /// Returns whether geometry changed. Moves while idle are ignored.
    pub fn on_move(
        &mut self,
        event: &PointerEvent,
        geometry: &mut GeometryStore,
        tone: &ToneParameters,
    ) -> bool {
        let Some(gesture) = self.gesture() else {
            return false;
        };

        let point = event.normalized();
        match gesture {
            Gesture::DraggingGradientHandle(which) => {
                let position = geometry.gradient().project(point);
                geometry.update_gradient(which, position);
                true
            }
            Gesture::DraggingRadialCenter => {
                geometry.update_radial_center(point.x, point.y);
                true
            }
            Gesture::ResizingRadial => {
                let (size, feather) = geometry.radial().extent_towards(point);
                geometry.update_radial_extent(size, feather);
                true
            }
            Gesture::PaintingBrush => self.paint(event, geometry, tone),
        }
    }

    /// Finish the open gesture (pointer released).
    ///
    /// Whatever the gesture last wrote stays. Returns the gesture that
    /// ended, or `None` if there was none.
    pub fn end(&mut self, geometry: &mut GeometryStore) -> Option<Gesture> {
        let active = self.active.take()?;
        if active.gesture == Gesture::PaintingBrush {
            geometry.close_stroke();
        }
        tracing::debug!(gesture = ?active.gesture, "gesture ended");
        Some(active.gesture)
    }

    /// The pointer left the editing surface.
    ///
    /// Ends the open gesture under [`LeavePolicy::EndGesture`] and is
    /// ignored under [`LeavePolicy::KeepDragging`], for every tool alike.
    pub fn on_leave(&mut self, geometry: &mut GeometryStore) -> Option<Gesture> {
        match self.leave_policy {
            LeavePolicy::EndGesture => self.end(geometry),
            LeavePolicy::KeepDragging => None,
        }
    }

    /// Stamp opacity follows the exposure at the moment of painting.
    fn paint(
        &self,
        event: &PointerEvent,
        geometry: &mut GeometryStore,
        tone: &ToneParameters,
    ) -> bool {
        let stamp = Stamp::new(event.normalized(), self.brush_size, tone.exposure_strength());
        geometry.append_brush_stamp(stamp)
    }
}

impl<H: ListenerHost> std::fmt::Debug for PointerInteractionController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerInteractionController")
            .field("gesture", &self.gesture())
            .field("brush_size", &self.brush_size)
            .field("leave_policy", &self.leave_policy)
            .finish()
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
