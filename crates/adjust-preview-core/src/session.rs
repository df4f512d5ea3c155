//! The editing session.
//!
//! An [`AdjustmentSession`] is created when the host mounts the adjustment
//! widget and dropped when it unmounts. It owns the active tool, the tone
//! sliders, the geometry store and the gesture controller, and exposes the
//! only write surface over them. Every state change bumps a revision so the
//! host can repaint at most once per display frame.
//!
//! # Example
//!
//! ```ignore
//! let registry = Rc::new(ListenerRegistry::new());
//! let mut session = AdjustmentSession::new("photos/harbor.jpg", EngineConfig::default(), registry);
//!
//! session.select_tool(AdjustmentTool::Radial);
//! session.set_tone(ToneParam::Exposure, -40);
//! session.pointer_down(DragHandle::RadialCenter, &event)?;
//! session.pointer_move(&next_event);
//! session.pointer_up();
//!
//! if let Some(overlay) = session.take_frame() {
//!     paint(&overlay);
//! }
//! ```

use crate::bounds::PointerEvent;
use crate::config::EngineConfig;
use crate::error::{InteractionError, PresetError};
use crate::geometry::{GeometryStore, GradientHandle};
use crate::interaction::{
    DragHandle, Gesture, ListenerHost, ListenerRegistry, PointerInteractionController,
};
use crate::overlay::{render, OverlaySpec};
use crate::preset::Preset;
use crate::tone::{ToneParam, ToneParameters};
use crate::AdjustmentTool;
use std::rc::Rc;

pub struct AdjustmentSession<H: ListenerHost = ListenerRegistry> {
    base_image: String,
    tool: AdjustmentTool,
    tone: ToneParameters,
    geometry: GeometryStore,
    controller: PointerInteractionController<H>,
    revision: u64,
    presented: Option<u64>,
}

impl<H: ListenerHost> AdjustmentSession<H> {
    /// Start a session over the host's base image.
    ///
    /// `base_image` is an opaque reference (usually a URI); the engine only
    /// hands it back.
    pub fn new(base_image: impl Into<String>, config: EngineConfig, host: Rc<H>) -> Self {
        let config = config.sanitized();
        Self {
            base_image: base_image.into(),
            tool: AdjustmentTool::default(),
            tone: ToneParameters::new(),
            geometry: GeometryStore::with_extent_floor(config.radial_extent_floor),
            controller: PointerInteractionController::new(host, &config),
            revision: 0,
            presented: None,
        }
    }

    pub fn base_image(&self) -> &str {
        &self.base_image
    }

    pub fn tool(&self) -> AdjustmentTool {
        self.tool
    }

    pub fn tone(&self) -> &ToneParameters {
        &self.tone
    }

    pub fn geometry(&self) -> &GeometryStore {
        &self.geometry
    }

    pub fn gesture(&self) -> Option<Gesture> {
        self.controller.gesture()
    }

    pub fn brush_size(&self) -> f32 {
        self.controller.brush_size()
    }

    /// Counter bumped by every state change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ===== Tool selection =====

    /// Make `tool` the active tool.
    ///
    /// Geometry and tone are untouched. A gesture that belongs to another
    /// tool is finished first, keeping whatever it last wrote.
    pub fn select_tool(&mut self, tool: AdjustmentTool) {
        if tool == self.tool {
            return;
        }
        if self.gesture().is_some_and(|gesture| gesture.tool() != tool) {
            self.controller.end(&mut self.geometry);
        }
        tracing::debug!(from = ?self.tool, to = ?tool, "tool selected");
        self.tool = tool;
        self.touch();
    }

    // ===== Slider writes =====

    /// Write a tone slider, clamped to its range. Returns the stored value.
    pub fn set_tone(&mut self, param: ToneParam, value: i32) -> i32 {
        let stored = self.tone.set(param, value);
        self.touch();
        stored
    }

    /// Diameter for brush stamps painted from now on.
    pub fn set_brush_size(&mut self, size: f32) {
        self.controller.set_brush_size(size);
    }

    pub fn update_gradient(&mut self, which: GradientHandle, percent: f32) {
        self.geometry.update_gradient(which, percent);
        self.touch();
    }

    pub fn update_gradient_angle(&mut self, degrees: f32) {
        self.geometry.update_gradient_angle(degrees);
        self.touch();
    }

    pub fn update_radial_center(&mut self, x: f32, y: f32) {
        self.geometry.update_radial_center(x, y);
        self.touch();
    }

    pub fn update_radial_extent(&mut self, size: f32, feather: f32) {
        self.geometry.update_radial_extent(size, feather);
        self.touch();
    }

    // ===== Pointer events =====

    /// Press on `handle`. See [`PointerInteractionController::begin`].
    pub fn pointer_down(
        &mut self,
        handle: DragHandle,
        event: &PointerEvent,
    ) -> Result<Gesture, InteractionError> {
        let gesture =
            self.controller
                .begin(self.tool, handle, event, &mut self.geometry, &self.tone)?;
        self.touch();
        Ok(gesture)
    }

    /// Returns whether the move changed any geometry.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> bool {
        let changed = self
            .controller
            .on_move(event, &mut self.geometry, &self.tone);
        if changed {
            self.touch();
        }
        changed
    }

    pub fn pointer_up(&mut self) -> Option<Gesture> {
        let ended = self.controller.end(&mut self.geometry);
        if ended.is_some() {
            self.touch();
        }
        ended
    }

    /// The pointer left the surface; handled per the configured leave policy.
    pub fn pointer_leave(&mut self) -> Option<Gesture> {
        let ended = self.controller.on_leave(&mut self.geometry);
        if ended.is_some() {
            self.touch();
        }
        ended
    }

    // ===== Commands =====

    /// Switch to the preset's tool and write its four tone fields.
    ///
    /// Presets are application data, not user input: an out-of-range field
    /// panics in debug builds. Release builds reject the whole preset and
    /// change nothing. Hosts that pass through untrusted preset data should
    /// call [`Preset::validate`] first.
    pub fn apply_preset(&mut self, preset: &Preset) -> Result<(), PresetError> {
        let validated = preset.validate();
        if let Err(err) = &validated {
            tracing::warn!(preset = %preset.name, error = %err, "preset rejected");
        }
        debug_assert!(validated.is_ok(), "invalid preset: {validated:?}");
        validated?;
        self.select_tool(preset.tool);
        preset.apply_to(&mut self.tone)?;
        tracing::debug!(preset = %preset.name, "preset applied");
        self.touch();
        Ok(())
    }

    /// Zero every tone slider and clear the brush stroke.
    ///
    /// Gradient and radial geometry are kept; see
    /// [`AdjustmentSession::reset_positions`] for the geometric reset.
    pub fn reset_all_adjustments(&mut self) {
        self.tone.reset();
        self.geometry.clear_brush();
        self.touch();
    }

    /// Restore default gradient and radial geometry and clear the brush.
    ///
    /// Tone sliders are kept.
    pub fn reset_positions(&mut self) {
        self.geometry.reset_positions();
        self.touch();
    }

    pub fn clear_brush(&mut self) {
        self.geometry.clear_brush();
        self.touch();
    }

    // ===== Output =====

    /// Overlay for the current state.
    pub fn overlay(&self) -> OverlaySpec {
        render(self.tool, &self.geometry, &self.tone)
    }

    /// Overlay to paint this frame, or `None` if nothing changed since the
    /// last call.
    pub fn take_frame(&mut self) -> Option<OverlaySpec> {
        if self.presented == Some(self.revision) {
            return None;
        }
        self.presented = Some(self.revision);
        Some(self.overlay())
    }
}

impl<H: ListenerHost> std::fmt::Debug for AdjustmentSession<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjustmentSession")
            .field("base_image", &self.base_image)
            .field("tool", &self.tool)
            .field("tone", &self.tone)
            .field("geometry", &self.geometry)
            .field("controller", &self.controller)
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::CanvasBounds;
    use crate::config::LeavePolicy;
    use crate::geometry::{GradientGeometry, RadialGeometry};
    use crate::overlay::{BlendIntent, ColorChannel, OverlayKind};
    use std::panic::{self, AssertUnwindSafe};

    const BOUNDS: CanvasBounds = CanvasBounds {
        left: 0.0,
        top: 0.0,
        width: 800.0,
        height: 600.0,
    };

    fn at(x_percent: f64, y_percent: f64) -> PointerEvent {
        PointerEvent::new(
            BOUNDS.width * x_percent / 100.0,
            BOUNDS.height * y_percent / 100.0,
            BOUNDS,
        )
    }

    fn session() -> (AdjustmentSession, Rc<ListenerRegistry>) {
        let registry = Rc::new(ListenerRegistry::new());
        let session = AdjustmentSession::new(
            "images/harbor.jpg",
            EngineConfig::default(),
            Rc::clone(&registry),
        );
        (session, registry)
    }

    #[test]
    fn test_new_session_defaults() {
        let (s, _) = session();
        assert_eq!(s.base_image(), "images/harbor.jpg");
        assert_eq!(s.tool(), AdjustmentTool::Gradient);
        assert!(s.tone().is_default());
        assert_eq!(*s.geometry().gradient(), GradientGeometry::default());
        assert_eq!(*s.geometry().radial(), RadialGeometry::default());
        assert!(s.geometry().brush().is_empty());
        assert_eq!(s.gesture(), None);
    }

    #[test]
    fn test_select_tool_has_no_side_effects() {
        let (mut s, _) = session();
        s.set_tone(ToneParam::Exposure, 35);
        let tone = *s.tone();
        let geometry = s.geometry().clone();

        for tool in [AdjustmentTool::Radial, AdjustmentTool::Brush, AdjustmentTool::Gradient] {
            s.select_tool(tool);
            assert_eq!(s.tool(), tool);
            assert_eq!(*s.tone(), tone);
            assert_eq!(*s.geometry(), geometry);
        }
    }

    #[test]
    fn test_gradient_isolated_across_tool_switch() {
        let (mut s, _) = session();
        s.update_gradient(GradientHandle::Start, 10.0);
        s.update_gradient(GradientHandle::End, 90.0);

        s.select_tool(AdjustmentTool::Radial);
        s.pointer_down(DragHandle::RadialCenter, &at(50.0, 50.0)).unwrap();
        s.pointer_move(&at(20.0, 70.0));
        s.pointer_up();
        s.update_radial_extent(30.0, 30.0);

        s.select_tool(AdjustmentTool::Gradient);
        assert_eq!(s.geometry().gradient().start, 10.0);
        assert_eq!(s.geometry().gradient().end, 90.0);
    }

    #[test]
    fn test_radial_isolated_from_brush() {
        let (mut s, _) = session();
        s.select_tool(AdjustmentTool::Radial);
        s.update_radial_center(25.0, 75.0);
        let radial = *s.geometry().radial();

        s.select_tool(AdjustmentTool::Brush);
        s.pointer_down(DragHandle::Canvas, &at(10.0, 10.0)).unwrap();
        s.pointer_move(&at(60.0, 60.0));
        s.pointer_up();

        s.select_tool(AdjustmentTool::Radial);
        assert_eq!(*s.geometry().radial(), radial);
    }

    #[test]
    fn test_switching_tool_mid_drag_ends_gesture() {
        let (mut s, registry) = session();
        s.pointer_down(DragHandle::Gradient(GradientHandle::Start), &at(50.0, 30.0))
            .unwrap();
        s.pointer_move(&at(50.0, 20.0));
        s.select_tool(AdjustmentTool::Radial);

        assert_eq!(s.gesture(), None);
        assert_eq!(registry.outstanding(), 0);
        // The last committed position stays
        assert!((s.geometry().gradient().start - 20.0).abs() < 1e-3);
        // Later moves no longer touch the gradient
        s.pointer_move(&at(50.0, 90.0));
        assert!((s.geometry().gradient().start - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_preset_atomicity() {
        let (mut s, _) = session();
        s.set_tone(ToneParam::Highlights, 20);
        s.set_tone(ToneParam::Shadows, -30);
        s.set_tone(ToneParam::Temperature, 15);
        s.update_gradient(GradientHandle::Start, 12.0);
        s.update_radial_center(40.0, 60.0);
        let geometry = s.geometry().clone();

        let preset = Preset::new("暗角", AdjustmentTool::Radial, -40, 10, 0, 0);
        s.apply_preset(&preset).unwrap();

        assert_eq!(s.tool(), AdjustmentTool::Radial);
        assert_eq!(s.tone().exposure, -40);
        assert_eq!(s.tone().contrast, 10);
        assert_eq!(s.tone().clarity, 0);
        assert_eq!(s.tone().saturation, 0);
        assert_eq!(s.tone().highlights, 20);
        assert_eq!(s.tone().shadows, -30);
        assert_eq!(s.tone().temperature, 15);
        assert_eq!(*s.geometry(), geometry);
    }

    #[test]
    fn test_invalid_preset_changes_nothing() {
        let (mut s, _) = session();
        s.set_tone(ToneParam::Contrast, 7);
        let revision = s.revision();

        let preset = Preset::new("broken", AdjustmentTool::Brush, -400, 10, 0, 0);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| s.apply_preset(&preset)));
        if cfg!(debug_assertions) {
            assert!(outcome.is_err(), "debug builds assert on invalid presets");
        } else {
            assert!(matches!(outcome, Ok(Err(PresetError::OutOfRange { value: -400, .. }))));
        }

        assert_eq!(s.tool(), AdjustmentTool::Gradient);
        assert_eq!(s.tone().exposure, 0);
        assert_eq!(s.tone().contrast, 7);
        assert_eq!(s.revision(), revision);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "invalid preset"))]
    fn test_invalid_preset_asserts_in_debug_builds() {
        let (mut s, _) = session();
        let preset = Preset::new("broken", AdjustmentTool::Radial, 0, 0, 0, 250);
        assert!(s.apply_preset(&preset).is_err());
    }

    #[test]
    fn test_builtin_presets_apply_cleanly() {
        let (mut s, _) = session();
        for preset in crate::preset::builtin_presets() {
            s.apply_preset(&preset).unwrap();
            assert_eq!(s.tool(), preset.tool);
        }
    }

    #[test]
    fn test_reset_all_adjustments_keeps_positions() {
        let (mut s, _) = session();
        s.update_gradient(GradientHandle::Start, 5.0);
        s.update_radial_center(10.0, 90.0);
        for param in ToneParam::ALL {
            s.set_tone(param, 42);
        }
        s.select_tool(AdjustmentTool::Brush);
        s.pointer_down(DragHandle::Canvas, &at(10.0, 10.0)).unwrap();
        s.pointer_up();
        let gradient = *s.geometry().gradient();
        let radial = *s.geometry().radial();

        s.reset_all_adjustments();

        assert!(s.tone().is_default());
        assert!(s.geometry().brush().is_empty());
        assert_eq!(*s.geometry().gradient(), gradient);
        assert_eq!(*s.geometry().radial(), radial);
        assert_ne!(*s.geometry().gradient(), GradientGeometry::default());
    }

    #[test]
    fn test_reset_positions_keeps_tone() {
        let (mut s, _) = session();
        s.set_tone(ToneParam::Exposure, -60);
        s.set_tone(ToneParam::Saturation, 25);
        s.update_gradient_angle(90.0);
        s.update_radial_extent(90.0, 10.0);
        s.select_tool(AdjustmentTool::Brush);
        s.pointer_down(DragHandle::Canvas, &at(10.0, 10.0)).unwrap();
        s.pointer_up();
        let tone = *s.tone();

        s.reset_positions();

        assert_eq!(*s.geometry().gradient(), GradientGeometry::default());
        assert_eq!(*s.geometry().radial(), RadialGeometry::default());
        assert!(s.geometry().brush().is_empty());
        assert_eq!(*s.tone(), tone);
    }

    #[test]
    fn test_clear_brush_mid_stroke_keeps_painting() {
        let (mut s, _) = session();
        s.select_tool(AdjustmentTool::Brush);
        s.pointer_down(DragHandle::Canvas, &at(10.0, 10.0)).unwrap();
        s.pointer_move(&at(12.0, 10.0));
        s.clear_brush();
        assert!(s.geometry().brush().is_empty());

        s.pointer_move(&at(14.0, 10.0));
        assert_eq!(s.geometry().brush().len(), 1);
    }

    #[test]
    fn test_overlay_derivation() {
        let (mut s, _) = session();
        s.set_tone(ToneParam::Exposure, 50);
        let spec = s.overlay();
        assert!((spec.opacity - 0.5).abs() < f32::EPSILON);
        assert_eq!(spec.blend, BlendIntent::Lighten);
        assert_eq!(spec.color, ColorChannel::White);

        s.set_tone(ToneParam::Exposure, -80);
        let spec = s.overlay();
        assert!((spec.opacity - 0.8).abs() < f32::EPSILON);
        assert_eq!(spec.blend, BlendIntent::Darken);
        assert_eq!(spec.color, ColorChannel::Black);
    }

    #[test]
    fn test_overlay_follows_active_tool() {
        let (mut s, _) = session();
        assert_eq!(s.overlay().kind(), OverlayKind::Linear);
        s.select_tool(AdjustmentTool::Radial);
        assert_eq!(s.overlay().kind(), OverlayKind::Radial);
        s.select_tool(AdjustmentTool::Brush);
        assert_eq!(s.overlay().kind(), OverlayKind::Stamps);
    }

    #[test]
    fn test_take_frame_coalesces() {
        let (mut s, _) = session();
        assert!(s.take_frame().is_some());
        assert!(s.take_frame().is_none());

        s.set_tone(ToneParam::Exposure, 10);
        s.set_tone(ToneParam::Exposure, 20);
        s.set_tone(ToneParam::Exposure, 30);
        let frame = s.take_frame().unwrap();
        assert!((frame.opacity - 0.3).abs() < 1e-6);
        assert!(s.take_frame().is_none());
    }

    #[test]
    fn test_idle_moves_do_not_dirty_frame() {
        let (mut s, _) = session();
        s.take_frame();
        assert!(!s.pointer_move(&at(20.0, 20.0)));
        assert!(s.pointer_up().is_none());
        assert!(s.take_frame().is_none());
    }

    #[test]
    fn test_listener_symmetry_across_exit_paths() {
        let registry = Rc::new(ListenerRegistry::new());
        {
            let mut s = AdjustmentSession::new("a.jpg", EngineConfig::default(), Rc::clone(&registry));
            s.select_tool(AdjustmentTool::Brush);
            for i in 0..10 {
                s.pointer_down(DragHandle::Canvas, &at(10.0, 10.0)).unwrap();
                s.pointer_move(&at(20.0, 20.0));
                match i % 3 {
                    0 => {
                        s.pointer_up();
                    }
                    1 => {
                        s.pointer_leave();
                    }
                    _ => s.select_tool(AdjustmentTool::Radial),
                }
                assert_eq!(registry.outstanding(), 0);
                s.select_tool(AdjustmentTool::Brush);
            }

            // Teardown with a gesture still open
            s.pointer_down(DragHandle::Canvas, &at(10.0, 10.0)).unwrap();
            assert_eq!(registry.outstanding(), 2);
        }
        assert_eq!(registry.outstanding(), 0);
    }

    #[test]
    fn test_keep_dragging_session_needs_release() {
        let registry = Rc::new(ListenerRegistry::new());
        let config = EngineConfig {
            leave_policy: LeavePolicy::KeepDragging,
            ..Default::default()
        };
        let mut s = AdjustmentSession::new("a.jpg", config, Rc::clone(&registry));
        s.select_tool(AdjustmentTool::Radial);
        s.pointer_down(DragHandle::RadialCenter, &at(50.0, 50.0)).unwrap();
        assert!(s.pointer_leave().is_none());
        assert_eq!(registry.outstanding(), 2);
        assert_eq!(s.pointer_up(), Some(Gesture::DraggingRadialCenter));
        assert_eq!(registry.outstanding(), 0);
    }

    #[test]
    fn test_config_floor_reaches_geometry() {
        let config = EngineConfig {
            radial_extent_floor: 15.0,
            brush_size: 20.0,
            ..Default::default()
        };
        let mut s = AdjustmentSession::new("a.jpg", config, Rc::new(ListenerRegistry::new()));
        s.update_radial_extent(1.0, 1.0);
        assert_eq!(s.geometry().radial().size, 15.0);
        assert_eq!(s.brush_size(), 20.0);
    }

    #[test]
    fn test_set_tone_returns_clamped() {
        let (mut s, _) = session();
        assert_eq!(s.set_tone(ToneParam::Temperature, 300), 100);
        assert_eq!(s.tone().temperature, 100);
    }
}
