use crate::{
    config::model::{Config, TurbulenceType},
    foundation::core::KEYFRAME_COUNT,
};

/// Named override of every [`Config`] field except `infinite`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Stable identifier (`strength1` .. `strength5`).
    pub id: &'static str,
    /// Turbulence granularity.
    pub base_frequency: f64,
    /// Turbulence detail layers.
    pub num_octaves: u32,
    /// Noise function.
    pub turbulence_type: TurbulenceType,
    /// Per-keyframe displacement magnitudes.
    pub scales: [f64; KEYFRAME_COUNT],
    /// Cycle length in seconds.
    pub duration: f64,
    /// Render width in pixels.
    pub img_width: u32,
}

impl Preset {
    /// Merge this preset over `config`, keeping its `infinite` flag.
    pub fn apply_to(&self, config: &Config) -> Config {
        Config {
            base_frequency: self.base_frequency,
            num_octaves: self.num_octaves,
            turbulence_type: self.turbulence_type,
            scales: self.scales,
            duration: self.duration,
            img_width: self.img_width,
            infinite: config.infinite,
        }
    }
}

static PRESETS: [Preset; 5] = [
    Preset {
        id: "strength1",
        base_frequency: 0.01,
        num_octaves: 2,
        turbulence_type: TurbulenceType::FractalNoise,
        scales: [1.0, 3.0, 2.0, 2.0, 1.0],
        duration: 0.5,
        img_width: 100,
    },
    Preset {
        id: "strength2",
        base_frequency: 0.02,
        num_octaves: 3,
        turbulence_type: TurbulenceType::FractalNoise,
        scales: [2.0, 4.0, 2.0, 3.0, 2.0],
        duration: 0.5,
        img_width: 100,
    },
    Preset {
        id: "strength3",
        base_frequency: 0.05,
        num_octaves: 3,
        turbulence_type: TurbulenceType::FractalNoise,
        scales: [2.0, 6.0, 3.0, 5.0, 4.0],
        duration: 0.5,
        img_width: 100,
    },
    Preset {
        id: "strength4",
        base_frequency: 0.08,
        num_octaves: 4,
        turbulence_type: TurbulenceType::Turbulence,
        scales: [4.0, 9.0, 5.0, 8.0, 6.0],
        duration: 0.4,
        img_width: 100,
    },
    Preset {
        id: "strength5",
        base_frequency: 0.12,
        num_octaves: 5,
        turbulence_type: TurbulenceType::Turbulence,
        scales: [6.0, 14.0, 8.0, 12.0, 10.0],
        duration: 0.3,
        img_width: 100,
    },
];

/// All presets in display order.
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

/// Look up a preset by identifier.
pub fn preset(id: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
#[path = "../../tests/unit/config/presets.rs"]
mod tests;
