//! Named preset bundles.
//!
//! A preset picks a tool and sets four tone sliders (exposure, contrast,
//! clarity, saturation) in one step. Highlights, shadows, temperature and
//! all geometry are left alone.

use crate::error::PresetError;
use crate::tone::{ToneParam, ToneParameters};
use crate::AdjustmentTool;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub tool: AdjustmentTool,
    pub exposure: i32,
    pub contrast: i32,
    pub clarity: i32,
    pub saturation: i32,
}

impl Preset {
    pub fn new(
        name: impl Into<String>,
        tool: AdjustmentTool,
        exposure: i32,
        contrast: i32,
        clarity: i32,
        saturation: i32,
    ) -> Self {
        Self {
            name: name.into(),
            tool,
            exposure,
            contrast,
            clarity,
            saturation,
        }
    }

    /// The tone values this preset writes.
    pub fn tone_fields(&self) -> [(ToneParam, i32); 4] {
        [
            (ToneParam::Exposure, self.exposure),
            (ToneParam::Contrast, self.contrast),
            (ToneParam::Clarity, self.clarity),
            (ToneParam::Saturation, self.saturation),
        ]
    }

    /// Check every field against its declared range.
    ///
    /// Reports the first offending field.
    pub fn validate(&self) -> Result<(), PresetError> {
        for (param, value) in self.tone_fields() {
            let range = param.range();
            if !range.contains(&value) {
                return Err(PresetError::OutOfRange {
                    preset: self.name.clone(),
                    param,
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        Ok(())
    }

    /// Write the preset's tone fields into `tone`, all or nothing.
    pub fn apply_to(&self, tone: &mut ToneParameters) -> Result<(), PresetError> {
        self.validate()?;
        for (param, value) in self.tone_fields() {
            tone.set(param, value);
        }
        Ok(())
    }
}

/// Presets offered by the adjustment widget.
pub fn builtin_presets() -> Vec<Preset> {
    vec![
        // Vignette
        Preset::new("暗角", AdjustmentTool::Radial, -40, 10, 0, 0),
        // Darken sky
        Preset::new("压暗天空", AdjustmentTool::Gradient, -30, 15, 10, 5),
        // Brighten subject
        Preset::new("提亮主体", AdjustmentTool::Radial, 30, 5, 10, 0),
        // Dodge
        Preset::new("局部提亮", AdjustmentTool::Brush, 40, 0, 5, 0),
    ]
}

/// Look up a built-in preset by name.
pub fn builtin_preset(name: &str) -> Option<Preset> {
    builtin_presets().into_iter().find(|preset| preset.name == name)
}
