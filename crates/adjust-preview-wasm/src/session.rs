//! Editing session bindings.
//!
//! Wraps the core `AdjustmentSession` so the adjustment widget can forward
//! pointer events, slider writes and button commands from TypeScript, and
//! read back the overlay to paint.

use crate::listener::JsListenerHost;
use crate::types::{gesture_name, handle_from_str, tone_param_from_str, tool_from_str, unknown};
use adjust_preview_core::overlay::css::{to_css, to_css_for_surface, CssOverlay};
use adjust_preview_core::preset::builtin_preset;
use adjust_preview_core::{
    AdjustmentSession, CanvasBounds, EngineConfig, GradientHandle, OverlaySpec, PointerEvent,
    Preset,
};
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// A local adjustment editing session for JavaScript.
///
/// # Example (TypeScript)
/// ```typescript
/// const session = new JsAdjustmentSession(imageUrl, { brush_size: 10 }, attach, detach);
///
/// canvas.addEventListener('pointerdown', (e) => {
///   const r = canvas.getBoundingClientRect();
///   session.pointer_down(hitTest(e), e.clientX, e.clientY, r.left, r.top, r.width, r.height);
/// });
///
/// requestAnimationFrame(function paint() {
///   const css = session.take_frame_css(overlay.clientWidth, overlay.clientHeight);
///   if (css) {
///     overlay.style.backgroundImage = css.background_image;
///     overlay.style.mixBlendMode = css.mix_blend_mode;
///   }
///   requestAnimationFrame(paint);
/// });
/// ```
#[wasm_bindgen]
pub struct JsAdjustmentSession {
    inner: AdjustmentSession<JsListenerHost>,
}

#[wasm_bindgen]
impl JsAdjustmentSession {
    /// Create a session.
    ///
    /// # Arguments
    /// * `base_image` - Opaque reference to the base image, returned unchanged
    /// * `config` - Partial `EngineConfig` object, or `undefined` for defaults
    /// * `attach` - `(id, kind) => void`, registers a window-level listener
    /// * `detach` - `(id) => void`, removes it again
    #[wasm_bindgen(constructor)]
    pub fn new(
        base_image: String,
        config: JsValue,
        attach: js_sys::Function,
        detach: js_sys::Function,
    ) -> Result<JsAdjustmentSession, JsValue> {
        let config: EngineConfig = if config.is_undefined() || config.is_null() {
            EngineConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
        };
        let host = Rc::new(JsListenerHost::new(attach, detach));
        Ok(Self {
            inner: AdjustmentSession::new(base_image, config, host),
        })
    }

    /// The base image reference passed at construction
    #[wasm_bindgen(getter)]
    pub fn base_image(&self) -> String {
        self.inner.base_image().to_string()
    }

    /// Name of the active tool
    #[wasm_bindgen(getter)]
    pub fn tool(&self) -> String {
        self.inner.tool().as_str().to_string()
    }

    /// Name of the open gesture, or `undefined` when idle
    #[wasm_bindgen(getter)]
    pub fn gesture(&self) -> Option<String> {
        self.inner.gesture().map(|g| gesture_name(g).to_string())
    }

    /// Revision counter, bumped by every state change
    #[wasm_bindgen(getter)]
    pub fn revision(&self) -> f64 {
        self.inner.revision() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn brush_size(&self) -> f32 {
        self.inner.brush_size()
    }

    pub fn select_tool(&mut self, tool: &str) -> Result<(), JsValue> {
        let tool = tool_from_str(tool).ok_or_else(|| unknown("tool", tool))?;
        self.inner.select_tool(tool);
        Ok(())
    }

    /// Write a tone slider. Returns the clamped value actually stored.
    pub fn set_tone(&mut self, param: &str, value: i32) -> Result<i32, JsValue> {
        let param = tone_param_from_str(param).ok_or_else(|| unknown("tone parameter", param))?;
        Ok(self.inner.set_tone(param, value))
    }

    pub fn set_brush_size(&mut self, size: f32) {
        self.inner.set_brush_size(size);
    }

    pub fn set_gradient_angle(&mut self, degrees: f32) {
        self.inner.update_gradient_angle(degrees);
    }

    pub fn set_gradient_start(&mut self, percent: f32) {
        self.inner.update_gradient(GradientHandle::Start, percent);
    }

    pub fn set_gradient_end(&mut self, percent: f32) {
        self.inner.update_gradient(GradientHandle::End, percent);
    }

    pub fn set_radial_center(&mut self, x: f32, y: f32) {
        self.inner.update_radial_center(x, y);
    }

    pub fn set_radial_extent(&mut self, size: f32, feather: f32) {
        self.inner.update_radial_extent(size, feather);
    }

    /// Press on a handle.
    ///
    /// Returns `true` if a gesture started and `false` if the press was
    /// ignored (another gesture is open, or the handle does not belong to
    /// the active tool).
    #[allow(clippy::too_many_arguments)]
    pub fn pointer_down(
        &mut self,
        handle: &str,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Result<bool, JsValue> {
        let handle = handle_from_str(handle).ok_or_else(|| unknown("handle", handle))?;
        let event = PointerEvent::new(client_x, client_y, CanvasBounds::new(left, top, width, height));
        match self.inner.pointer_down(handle, &event) {
            Ok(_) => Ok(true),
            Err(err) => {
                web_sys::console::debug_1(&JsValue::from_str(&err.to_string()));
                Ok(false)
            }
        }
    }

    /// Returns whether any geometry changed.
    pub fn pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> bool {
        let event = PointerEvent::new(client_x, client_y, CanvasBounds::new(left, top, width, height));
        self.inner.pointer_move(&event)
    }

    /// Returns whether a gesture ended.
    pub fn pointer_up(&mut self) -> bool {
        self.inner.pointer_up().is_some()
    }

    /// Returns whether a gesture ended.
    pub fn pointer_leave(&mut self) -> bool {
        self.inner.pointer_leave().is_some()
    }

    /// Apply a preset object `{ name, tool, exposure, contrast, clarity, saturation }`.
    ///
    /// The object comes from page script, so it is validated here and an
    /// out-of-range field is returned as an error instead of reaching the
    /// engine's assertion.
    pub fn apply_preset(&mut self, preset: JsValue) -> Result<(), JsValue> {
        let preset: Preset = serde_wasm_bindgen::from_value(preset)
            .map_err(|e| JsValue::from_str(&format!("Invalid preset: {}", e)))?;
        if let Err(err) = preset.validate() {
            let message = err.to_string();
            web_sys::console::warn_1(&JsValue::from_str(&message));
            return Err(JsValue::from_str(&message));
        }
        self.inner
            .apply_preset(&preset)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Apply one of the built-in presets by name.
    pub fn apply_builtin_preset(&mut self, name: &str) -> Result<(), JsValue> {
        let preset = builtin_preset(name).ok_or_else(|| unknown("preset", name))?;
        self.inner
            .apply_preset(&preset)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn reset_all_adjustments(&mut self) {
        self.inner.reset_all_adjustments();
    }

    pub fn reset_positions(&mut self) {
        self.inner.reset_positions();
    }

    pub fn clear_brush(&mut self) {
        self.inner.clear_brush();
    }

    /// Current tone sliders as a plain object
    pub fn tone(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.tone())
    }

    /// Current geometry `{ gradient, radial, brush }` as a plain object
    pub fn geometry(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.geometry())
    }

    /// Current overlay spec
    pub fn overlay(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.overlay())
    }

    /// Current overlay as `{ background_image, mix_blend_mode }`
    ///
    /// Pass the overlay element's pixel size so brush stamps stay round;
    /// omit it for a square surface.
    pub fn overlay_css(&self, width: Option<f64>, height: Option<f64>) -> Result<JsValue, JsValue> {
        to_js(&css_for(&self.inner.overlay(), width, height))
    }

    /// Overlay spec if anything changed since the last frame, else `null`
    pub fn take_frame(&mut self) -> Result<JsValue, JsValue> {
        match self.inner.take_frame() {
            Some(spec) => to_js(&spec),
            None => Ok(JsValue::NULL),
        }
    }

    /// Like `take_frame`, but already translated to CSS (see `overlay_css`)
    pub fn take_frame_css(
        &mut self,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<JsValue, JsValue> {
        match self.inner.take_frame() {
            Some(spec) => to_js(&css_for(&spec, width, height)),
            None => Ok(JsValue::NULL),
        }
    }
}

/// The built-in presets as an array of plain objects.
#[wasm_bindgen]
pub fn builtin_presets() -> Result<JsValue, JsValue> {
    to_js(&adjust_preview_core::builtin_presets())
}

fn css_for(spec: &OverlaySpec, width: Option<f64>, height: Option<f64>) -> CssOverlay {
    match (width, height) {
        (Some(width), Some(height)) => to_css_for_surface(spec, width, height),
        _ => to_css(spec),
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}
