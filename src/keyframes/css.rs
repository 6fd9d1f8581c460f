use std::fmt;

use crate::{
    config::model::Config,
    foundation::core::{ANIMATION_NAME, KEYFRAME_COUNT, Num, filter_id, keyframe_percent},
};

/// One `@keyframes` stop selecting a filter.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeStop {
    /// Timeline position in percent.
    pub percent: f64,
    /// Id of the filter active at this stop.
    pub filter_id: String,
}

impl fmt::Display for KeyframeStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% {{ filter: url(#{}); }}",
            Num(self.percent),
            self.filter_id
        )
    }
}

/// The `@keyframes svg_filter` block, one stop per keyframe.
///
/// Independent of [`Config`]: percentages and filter ids are fixed by
/// [`KEYFRAME_COUNT`].
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeBlock {
    /// Stops in timeline order.
    pub stops: Vec<KeyframeStop>,
}

impl Default for KeyframeBlock {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyframeBlock {
    /// Block with `KEYFRAME_COUNT` evenly spaced stops.
    pub fn new() -> Self {
        let stops = (0..KEYFRAME_COUNT)
            .map(|i| KeyframeStop {
                percent: keyframe_percent(i),
                filter_id: filter_id(i),
            })
            .collect();
        Self { stops }
    }
}

impl fmt::Display for KeyframeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "@keyframes {ANIMATION_NAME} {{")?;
        for stop in &self.stops {
            writeln!(f, "{stop}")?;
        }
        f.write_str("}")
    }
}

/// `animation` shorthand: `svg_filter <duration>s <infinite|1>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationShorthand {
    /// Cycle length in seconds.
    pub duration: f64,
    /// Loop forever instead of playing once.
    pub infinite: bool,
}

impl AnimationShorthand {
    /// Shorthand for the current parameters.
    pub fn from_config(config: &Config) -> Self {
        Self {
            duration: config.duration,
            infinite: config.infinite,
        }
    }

    /// Iteration count token.
    pub fn iterations(&self) -> &'static str {
        if self.infinite { "infinite" } else { "1" }
    }
}

impl fmt::Display for AnimationShorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{ANIMATION_NAME} {}s {}",
            Num(self.duration),
            self.iterations()
        )
    }
}

/// Inline style applied to each preview target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewStyle {
    /// `animation` property value.
    pub animation: String,
    /// `width` property value, e.g. `100px`.
    pub width: String,
}

impl PreviewStyle {
    /// Preview style for the current parameters.
    pub fn from_config(config: &Config) -> Self {
        Self {
            animation: AnimationShorthand::from_config(config).to_string(),
            width: format!("{}px", config.img_width),
        }
    }
}

/// Stylesheet injected into a page hosting the filter container.
pub fn keyframes_stylesheet() -> String {
    KeyframeBlock::new().to_string()
}

/// Copyable CSS: the keyframe block plus an `img` rule using it.
pub fn css_code(config: &Config) -> String {
    let style = PreviewStyle::from_config(config);
    format!(
        "{}\n\nimg {{\n  width: {};\n  animation: {};\n}}",
        KeyframeBlock::new(),
        style.width,
        style.animation
    )
}

#[cfg(test)]
#[path = "../../tests/unit/keyframes/css.rs"]
mod tests;
