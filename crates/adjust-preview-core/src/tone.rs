//! Shared tone sliders.
//!
//! All three tools read the same set of tone values; there is no per-tool
//! tone state. Every slider is an integer in `-100..=100` and writes are
//! clamped to that range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Lowest value of any tone slider.
pub const TONE_MIN: i32 = -100;
/// Highest value of any tone slider.
pub const TONE_MAX: i32 = 100;

/// Identifies one of the tone sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneParam {
    Exposure,
    Contrast,
    Highlights,
    Shadows,
    Clarity,
    Saturation,
    Temperature,
}

impl ToneParam {
    pub const ALL: [ToneParam; 7] = [
        Self::Exposure,
        Self::Contrast,
        Self::Highlights,
        Self::Shadows,
        Self::Clarity,
        Self::Saturation,
        Self::Temperature,
    ];

    /// Declared range of the slider.
    pub const fn range(self) -> RangeInclusive<i32> {
        TONE_MIN..=TONE_MAX
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exposure => "exposure",
            Self::Contrast => "contrast",
            Self::Highlights => "highlights",
            Self::Shadows => "shadows",
            Self::Clarity => "clarity",
            Self::Saturation => "saturation",
            Self::Temperature => "temperature",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.as_str() == name)
    }

    /// Clamp a raw slider value into this parameter's range.
    #[inline]
    pub fn clamp(self, value: i32) -> i32 {
        let range = self.range();
        value.clamp(*range.start(), *range.end())
    }
}

impl fmt::Display for ToneParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone slider values shared by every tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneParameters {
    /// Exposure (-100 to 100); drives overlay opacity and blend direction
    pub exposure: i32,
    /// Contrast (-100 to 100)
    pub contrast: i32,
    /// Highlights (-100 to 100)
    pub highlights: i32,
    /// Shadows (-100 to 100)
    pub shadows: i32,
    /// Clarity (-100 to 100)
    pub clarity: i32,
    /// Saturation (-100 to 100)
    pub saturation: i32,
    /// White balance temperature (-100 to 100)
    pub temperature: i32,
}

impl ToneParameters {
    /// Create tone parameters with every slider at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, param: ToneParam) -> i32 {
        match param {
            ToneParam::Exposure => self.exposure,
            ToneParam::Contrast => self.contrast,
            ToneParam::Highlights => self.highlights,
            ToneParam::Shadows => self.shadows,
            ToneParam::Clarity => self.clarity,
            ToneParam::Saturation => self.saturation,
            ToneParam::Temperature => self.temperature,
        }
    }

    /// Write a slider value, clamped to the parameter's range.
    ///
    /// Returns the value actually stored.
    pub fn set(&mut self, param: ToneParam, value: i32) -> i32 {
        let value = param.clamp(value);
        let slot = match param {
            ToneParam::Exposure => &mut self.exposure,
            ToneParam::Contrast => &mut self.contrast,
            ToneParam::Highlights => &mut self.highlights,
            ToneParam::Shadows => &mut self.shadows,
            ToneParam::Clarity => &mut self.clarity,
            ToneParam::Saturation => &mut self.saturation,
            ToneParam::Temperature => &mut self.temperature,
        };
        *slot = value;
        value
    }

    /// Zero every slider.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overlay strength implied by the exposure slider, `|exposure| / 100`
    /// clamped to 0.0-1.0.
    #[inline]
    pub fn exposure_strength(&self) -> f32 {
        (self.exposure.unsigned_abs() as f32 / 100.0).clamp(0.0, 1.0)
    }

    /// Whether exposure brightens (zero counts as brightening).
    #[inline]
    pub fn brightens(&self) -> bool {
        self.exposure >= 0
    }
}
