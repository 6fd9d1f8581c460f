//! wobble generates "boiling line" SVG animations.
//!
//! A small [`Config`] (turbulence frequency, octaves, noise type, one
//! displacement scale per keyframe, cycle duration, loop flag, target width) is
//! turned into three text artifacts:
//!
//! 1. **Filter chain**: one `filter#svg_filter_<i>` per keyframe, each an
//!    `feTurbulence` feeding an `feDisplacementMap` ([`filter_code`]).
//! 2. **Keyframes**: a CSS `@keyframes svg_filter` block that steps through the
//!    filters, plus the `animation` shorthand that drives it ([`css_code`]).
//! 3. **Animated document**: any SVG document re-emitted with both embedded,
//!    keeping its geometry and inner markup ([`create_animated`]).
//!
//! Everything is a pure function of a [`Config`] snapshot. Callers own the
//! state through [`ConfigStore`] and regenerate all artifacts after each
//! change ([`Artifacts::regenerate`]).
//!
//! The number of keyframes is the constant [`KEYFRAME_COUNT`]; filter ids,
//! turbulence seeds and keyframe percentages are all derived from it.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod document;
mod export;
mod filter;
mod foundation;
mod keyframes;
mod pipeline;
mod render;

pub use config::model::{Config, ConfigField, DEFAULT_SCALES, TurbulenceType};
pub use config::presets::{Preset, preset, presets};
pub use config::store::ConfigStore;
pub use document::assemble::{ANIM_CLASS, assemble_animated, create_animated};
pub use document::foreign::{DEFAULT_DIMENSION, ForeignSvg};
pub use export::filename::{
    ASSET_PREFIX, has_svg_extension, preset_export_name, upload_export_name,
};
pub use export::package::SvgDownload;
pub use export::session::{
    BUSY_LABEL, DirSource, ERROR_LABEL, ExportControl, PRESET_ASSETS, SvgSource, Upload,
    UploadSlot, export_preset,
};
pub use filter::element::SvgElement;
pub use filter::markup::{HIDDEN_CONTAINER_STYLE, filter_code, filter_container, filters_text};
pub use filter::spec::{Displacement, FilterSpec, NOISE_RESULT, Turbulence, filter_chain};
pub use foundation::core::{
    ANIMATION_NAME, KEYFRAME_COUNT, Num, SVG_MEDIA_TYPE, SVG_NS, XLINK_NS, filter_id,
    keyframe_percent,
};
pub use foundation::error::{WobbleError, WobbleResult};
pub use keyframes::css::{
    AnimationShorthand, KeyframeBlock, KeyframeStop, PreviewStyle, css_code, keyframes_stylesheet,
};
pub use pipeline::artifacts::Artifacts;
pub use render::still::{KeyframeStill, keyframe_document, render_keyframe};
