//! CSS adapter for overlay specs.
//!
//! Produces `background-image` layers and a `mix-blend-mode` for a plain
//! element stacked over the base image:
//!
//! ```text
//! <div style="background-image: {background_image}; mix-blend-mode: {mix_blend_mode}">
//! ```
//!
//! Radial percentages resolve against the element's width and height, which
//! matches the per-axis percent geometry the engine stores. Brush stamps are
//! round and their size is a percentage of the surface width, so on a
//! non-square surface the vertical radius has to be rescaled:
//! [`to_css_for_surface`] does that, [`to_css`] assumes a square surface.

use super::{BlendIntent, ColorChannel, GradientStop, OverlayShape, OverlaySpec};
use crate::geometry::Stamp;
use serde::Serialize;
use std::fmt::Write;

/// CSS property values for one overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssOverlay {
    pub background_image: String,
    pub mix_blend_mode: &'static str,
}

impl BlendIntent {
    /// The `mix-blend-mode` keyword for this intent.
    pub const fn css_blend_mode(self) -> &'static str {
        match self {
            Self::Lighten => "screen",
            Self::Darken => "multiply",
        }
    }
}

impl ColorChannel {
    const fn rgb(self) -> &'static str {
        match self {
            Self::White => "255, 255, 255",
            Self::Black => "0, 0, 0",
        }
    }
}

/// Translate an overlay spec into CSS for a square surface.
///
/// An empty brush stroke yields `none`.
pub fn to_css(spec: &OverlaySpec) -> CssOverlay {
    css_with_aspect(spec, 1.0)
}

/// Translate an overlay spec into CSS for a surface of the given pixel size.
///
/// Only brush stamps depend on the size. A degenerate size falls back to
/// [`to_css`].
pub fn to_css_for_surface(spec: &OverlaySpec, width: f64, height: f64) -> CssOverlay {
    let aspect = width / height;
    if aspect.is_finite() && aspect > 0.0 {
        css_with_aspect(spec, aspect as f32)
    } else {
        to_css(spec)
    }
}

/// `aspect` is surface width over height.
fn css_with_aspect(spec: &OverlaySpec, aspect: f32) -> CssOverlay {
    let background_image = match &spec.shape {
        OverlayShape::Linear { angle, stops } => format!(
            "linear-gradient({}deg, {}, {})",
            angle,
            stop(spec.color, stops[0]),
            stop(spec.color, stops[1]),
        ),
        OverlayShape::Radial {
            center_x,
            center_y,
            radius_x,
            radius_y,
            stops,
        } => format!(
            "radial-gradient(ellipse {}% {}% at {}% {}%, {}, {})",
            radius_x,
            radius_y,
            center_x,
            center_y,
            stop(spec.color, stops[0]),
            stop(spec.color, stops[1]),
        ),
        OverlayShape::Stamps { stamps } => stamp_layers(spec.color, stamps, aspect),
    };

    CssOverlay {
        background_image,
        mix_blend_mode: spec.blend.css_blend_mode(),
    }
}

fn stop(color: ColorChannel, stop: GradientStop) -> String {
    format!("rgba({}, {}) {}%", color.rgb(), stop.opacity, stop.offset)
}

/// Each stamp becomes its own soft radial layer; the first stamp is listed
/// last so later stamps paint on top.
fn stamp_layers(color: ColorChannel, stamps: &[Stamp], aspect: f32) -> String {
    if stamps.is_empty() {
        return "none".to_string();
    }

    let mut layers = String::new();
    for (i, stamp) in stamps.iter().rev().enumerate() {
        if i > 0 {
            layers.push_str(", ");
        }
        let radius = stamp.size / 2.0;
        // Writing into a String cannot fail
        let _ = write!(
            layers,
            "radial-gradient(ellipse {}% {}% at {}% {}%, {}, {})",
            radius,
            radius * aspect,
            stamp.x,
            stamp.y,
            stop(color, GradientStop::new(0.0, stamp.opacity)),
            stop(color, GradientStop::new(100.0, 0.0)),
        );
    }
    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::NormalizedPoint;
    use crate::geometry::GeometryStore;
    use crate::overlay::render;
    use crate::tone::ToneParameters;
    use crate::AdjustmentTool;

    fn tone(exposure: i32) -> ToneParameters {
        ToneParameters {
            exposure,
            ..Default::default()
        }
    }

    #[test]
    fn test_linear_css() {
        let spec = render(AdjustmentTool::Gradient, &GeometryStore::new(), &tone(50));
        let css = to_css(&spec);
        assert_eq!(
            css.background_image,
            "linear-gradient(180deg, rgba(255, 255, 255, 0.5) 30%, rgba(255, 255, 255, 0) 70%)"
        );
        assert_eq!(css.mix_blend_mode, "screen");
    }

    #[test]
    fn test_radial_css_darken() {
        let spec = render(AdjustmentTool::Radial, &GeometryStore::new(), &tone(-25));
        let css = to_css(&spec);
        assert_eq!(
            css.background_image,
            "radial-gradient(ellipse 60% 50% at 50% 50%, rgba(0, 0, 0, 0.25) 0%, rgba(0, 0, 0, 0) 100%)"
        );
        assert_eq!(css.mix_blend_mode, "multiply");
    }

    #[test]
    fn test_empty_brush_css() {
        let spec = render(AdjustmentTool::Brush, &GeometryStore::new(), &tone(50));
        assert_eq!(to_css(&spec).background_image, "none");
    }

    #[test]
    fn test_brush_layers_newest_first() {
        let mut geometry = GeometryStore::new();
        geometry.open_stroke();
        geometry.append_brush_stamp(Stamp::new(NormalizedPoint::new(10.0, 20.0), 8.0, 0.5));
        geometry.append_brush_stamp(Stamp::new(NormalizedPoint::new(30.0, 40.0), 4.0, 0.25));
        geometry.close_stroke();

        let spec = render(AdjustmentTool::Brush, &geometry, &tone(50));
        let css = to_css(&spec);
        assert_eq!(
            css.background_image,
            "radial-gradient(ellipse 2% 2% at 30% 40%, rgba(255, 255, 255, 0.25) 0%, rgba(255, 255, 255, 0) 100%), \
             radial-gradient(ellipse 4% 4% at 10% 20%, rgba(255, 255, 255, 0.5) 0%, rgba(255, 255, 255, 0) 100%)"
        );
    }

    #[test]
    fn test_stamps_stay_round_on_wide_surface() {
        let mut geometry = GeometryStore::new();
        geometry.open_stroke();
        geometry.append_brush_stamp(Stamp::new(NormalizedPoint::new(50.0, 50.0), 10.0, 1.0));
        geometry.close_stroke();
        let spec = render(AdjustmentTool::Brush, &geometry, &tone(100));

        // 800x400: a 5% horizontal radius is 40px, which is 10% of the height
        let css = to_css_for_surface(&spec, 800.0, 400.0);
        assert_eq!(
            css.background_image,
            "radial-gradient(ellipse 5% 10% at 50% 50%, rgba(255, 255, 255, 1) 0%, rgba(255, 255, 255, 0) 100%)"
        );
    }

    #[test]
    fn test_surface_size_leaves_gradients_alone() {
        let spec = render(AdjustmentTool::Radial, &GeometryStore::new(), &tone(-25));
        assert_eq!(to_css_for_surface(&spec, 1600.0, 200.0), to_css(&spec));
        assert_eq!(to_css_for_surface(&spec, 0.0, 0.0), to_css(&spec));
    }

    #[test]
    fn test_degenerate_surface_falls_back_to_square() {
        let mut geometry = GeometryStore::new();
        geometry.open_stroke();
        geometry.append_brush_stamp(Stamp::new(NormalizedPoint::new(10.0, 10.0), 8.0, 0.5));
        geometry.close_stroke();
        let spec = render(AdjustmentTool::Brush, &geometry, &tone(50));

        assert_eq!(to_css_for_surface(&spec, 300.0, 0.0), to_css(&spec));
        assert_eq!(to_css_for_surface(&spec, f64::NAN, 100.0), to_css(&spec));
    }

    #[test]
    fn test_blend_modes() {
        assert_eq!(BlendIntent::Lighten.css_blend_mode(), "screen");
        assert_eq!(BlendIntent::Darken.css_blend_mode(), "multiply");
    }
}
