use std::{fmt, str::FromStr};

use crate::foundation::{
    core::KEYFRAME_COUNT,
    error::{WobbleError, WobbleResult},
};

/// `feTurbulence` noise function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TurbulenceType {
    /// Smooth fractal noise (`fractalNoise`).
    #[default]
    #[serde(rename = "fractalNoise")]
    FractalNoise,
    /// Ridged turbulence (`turbulence`).
    #[serde(rename = "turbulence")]
    Turbulence,
}

impl TurbulenceType {
    /// Attribute token as written into `feTurbulence type="..."`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FractalNoise => "fractalNoise",
            Self::Turbulence => "turbulence",
        }
    }
}

impl fmt::Display for TurbulenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TurbulenceType {
    type Err = WobbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fractalNoise" => Ok(Self::FractalNoise),
            "turbulence" => Ok(Self::Turbulence),
            other => Err(WobbleError::validation(format!(
                "unknown turbulence type '{other}' (expected fractalNoise or turbulence)"
            ))),
        }
    }
}

/// Parameter set every artifact is generated from.
///
/// Values are not range-checked: a negative duration or zero octave count is
/// carried into the generated markup as-is.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Turbulence granularity (`baseFrequency`).
    pub base_frequency: f64,
    /// Turbulence detail layers (`numOctaves`).
    pub num_octaves: u32,
    /// Noise function.
    pub turbulence_type: TurbulenceType,
    /// Displacement magnitude per keyframe; index `i` drives `svg_filter_i`.
    pub scales: [f64; KEYFRAME_COUNT],
    /// Length of one animation cycle in seconds.
    pub duration: f64,
    /// Loop forever instead of playing once.
    pub infinite: bool,
    /// Render width of preview/export targets in pixels.
    pub img_width: u32,
}

/// Default per-keyframe displacement magnitudes.
pub const DEFAULT_SCALES: [f64; KEYFRAME_COUNT] = [2.0, 6.0, 3.0, 4.0, 3.0];

impl Default for Config {
    fn default() -> Self {
        Self {
            base_frequency: 0.02,
            num_octaves: 3,
            turbulence_type: TurbulenceType::FractalNoise,
            scales: DEFAULT_SCALES,
            duration: 0.5,
            infinite: true,
            img_width: 100,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON document; missing fields take defaults.
    pub fn from_json(text: &str) -> WobbleResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| WobbleError::validation(format!("invalid config JSON: {e}")))
    }

    /// Pretty JSON form using the camelCase field names.
    pub fn to_json_pretty(&self) -> WobbleResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WobbleError::Other(anyhow::Error::new(e).context("serialize config")))
    }
}

/// Single-field replacement, one variant per user control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigField {
    /// Replace `base_frequency`.
    BaseFrequency(f64),
    /// Replace `num_octaves`.
    NumOctaves(u32),
    /// Replace `turbulence_type`.
    TurbulenceType(TurbulenceType),
    /// Replace `scales[index]`.
    Scale {
        /// Keyframe index in `0..KEYFRAME_COUNT`.
        index: usize,
        /// New displacement magnitude.
        value: f64,
    },
    /// Replace `duration`.
    Duration(f64),
    /// Replace `infinite`.
    Infinite(bool),
    /// Replace `img_width`.
    ImgWidth(u32),
}

impl Config {
    /// Apply one field replacement in place.
    ///
    /// Only the scale index is checked; on error `self` is unchanged.
    pub fn set(&mut self, field: ConfigField) -> WobbleResult<()> {
        match field {
            ConfigField::BaseFrequency(v) => self.base_frequency = v,
            ConfigField::NumOctaves(v) => self.num_octaves = v,
            ConfigField::TurbulenceType(v) => self.turbulence_type = v,
            ConfigField::Scale { index, value } => {
                let slot = self.scales.get_mut(index).ok_or_else(|| {
                    WobbleError::validation(format!(
                        "scale index {index} out of range (0..{KEYFRAME_COUNT})"
                    ))
                })?;
                *slot = value;
            }
            ConfigField::Duration(v) => self.duration = v,
            ConfigField::Infinite(v) => self.infinite = v,
            ConfigField::ImgWidth(v) => self.img_width = v,
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
