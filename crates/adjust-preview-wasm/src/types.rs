//! Name parsing for values that cross the JavaScript boundary as strings.
//!
//! The host page identifies tools, sliders and handles by short lowercase
//! names. Unknown names are reported as errors rather than guessed.

use adjust_preview_core::{AdjustmentTool, DragHandle, Gesture, GradientHandle, ToneParam};
use wasm_bindgen::prelude::*;

/// Parse a tool name: `gradient`, `radial` or `brush`.
pub(crate) fn tool_from_str(name: &str) -> Option<AdjustmentTool> {
    AdjustmentTool::from_name(name)
}

/// Parse a slider name such as `exposure` or `temperature`.
pub(crate) fn tone_param_from_str(name: &str) -> Option<ToneParam> {
    ToneParam::from_name(name)
}

/// Parse a handle name as reported by the host's hit-testing.
///
/// Values:
/// - `gradient_start`, `gradient_end` = gradient endpoint handles
/// - `radial_center` = radial center handle
/// - `radial_edge` = radial resize handle
/// - `canvas` = bare surface (brush painting)
pub(crate) fn handle_from_str(name: &str) -> Option<DragHandle> {
    match name {
        "gradient_start" => Some(DragHandle::Gradient(GradientHandle::Start)),
        "gradient_end" => Some(DragHandle::Gradient(GradientHandle::End)),
        "radial_center" => Some(DragHandle::RadialCenter),
        "radial_edge" => Some(DragHandle::RadialEdge),
        "canvas" => Some(DragHandle::Canvas),
        _ => None,
    }
}

/// Name of a gesture for the host's readouts.
pub(crate) fn gesture_name(gesture: Gesture) -> &'static str {
    match gesture {
        Gesture::DraggingGradientHandle(GradientHandle::Start) => "dragging_gradient_start",
        Gesture::DraggingGradientHandle(GradientHandle::End) => "dragging_gradient_end",
        Gesture::DraggingRadialCenter => "dragging_radial_center",
        Gesture::ResizingRadial => "resizing_radial",
        Gesture::PaintingBrush => "painting_brush",
    }
}

/// Build the `JsValue` error for an unrecognized name.
pub(crate) fn unknown(kind: &str, name: &str) -> JsValue {
    JsValue::from_str(&format!("Unknown {}: {}", kind, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_from_str() {
        assert_eq!(tool_from_str("gradient"), Some(AdjustmentTool::Gradient));
        assert_eq!(tool_from_str("radial"), Some(AdjustmentTool::Radial));
        assert_eq!(tool_from_str("brush"), Some(AdjustmentTool::Brush));
        assert_eq!(tool_from_str("heal"), None);
    }

    #[test]
    fn test_tone_param_from_str() {
        assert_eq!(tone_param_from_str("exposure"), Some(ToneParam::Exposure));
        assert_eq!(tone_param_from_str("clarity"), Some(ToneParam::Clarity));
        assert_eq!(tone_param_from_str("tint"), None);
    }

    #[test]
    fn test_handle_from_str() {
        assert_eq!(
            handle_from_str("gradient_start"),
            Some(DragHandle::Gradient(GradientHandle::Start))
        );
        assert_eq!(
            handle_from_str("gradient_end"),
            Some(DragHandle::Gradient(GradientHandle::End))
        );
        assert_eq!(handle_from_str("radial_center"), Some(DragHandle::RadialCenter));
        assert_eq!(handle_from_str("radial_edge"), Some(DragHandle::RadialEdge));
        assert_eq!(handle_from_str("canvas"), Some(DragHandle::Canvas));
        assert_eq!(handle_from_str("Canvas"), None);
        assert_eq!(handle_from_str(""), None);
    }

    #[test]
    fn test_gesture_names_distinct() {
        let names = [
            gesture_name(Gesture::DraggingGradientHandle(GradientHandle::Start)),
            gesture_name(Gesture::DraggingGradientHandle(GradientHandle::End)),
            gesture_name(Gesture::DraggingRadialCenter),
            gesture_name(Gesture::ResizingRadial),
            gesture_name(Gesture::PaintingBrush),
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
