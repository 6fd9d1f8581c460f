use crate::{
    config::model::{Config, TurbulenceType},
    foundation::{
        core::{KEYFRAME_COUNT, check_keyframe},
        error::WobbleResult,
    },
};

/// Result name linking the turbulence output to the displacement input.
pub const NOISE_RESULT: &str = "noise";

/// `feTurbulence` parameters for one keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Turbulence {
    /// Noise function.
    pub kind: TurbulenceType,
    /// Noise granularity.
    pub base_frequency: f64,
    /// Noise detail layers.
    pub num_octaves: u32,
    /// Seed; always the keyframe index.
    pub seed: usize,
}

/// `feDisplacementMap` parameters for one keyframe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Displacement {
    /// Displacement magnitude.
    pub scale: f64,
}

/// Derived filter description for one keyframe.
///
/// Never stored; rebuild from the current [`Config`] whenever it is needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterSpec {
    /// Keyframe index this filter belongs to.
    pub index: usize,
    /// Noise source.
    pub turbulence: Turbulence,
    /// Noise application.
    pub displacement: Displacement,
}

impl FilterSpec {
    /// Filter for keyframe `index`.
    pub fn for_keyframe(config: &Config, index: usize) -> WobbleResult<Self> {
        check_keyframe(index)?;
        Ok(Self::build(config, index))
    }

    fn build(config: &Config, index: usize) -> Self {
        Self {
            index,
            turbulence: Turbulence {
                kind: config.turbulence_type,
                base_frequency: config.base_frequency,
                num_octaves: config.num_octaves,
                seed: index,
            },
            displacement: Displacement {
                scale: config.scales[index],
            },
        }
    }
}

/// Filters for every keyframe, in ascending index order.
pub fn filter_chain(config: &Config) -> Vec<FilterSpec> {
    (0..KEYFRAME_COUNT)
        .map(|i| FilterSpec::build(config, i))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/filter/spec.rs"]
mod tests;
