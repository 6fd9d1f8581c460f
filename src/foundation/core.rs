use std::fmt;

use crate::foundation::error::{WobbleError, WobbleResult};

/// Number of keyframes, filters and per-frame scales in one animation cycle.
///
/// Filter ids, turbulence seeds and keyframe percentages are all derived from
/// the keyframe index, so this is the only place the count is spelled out.
pub const KEYFRAME_COUNT: usize = 5;

const _: () = assert!(KEYFRAME_COUNT >= 2);

/// CSS `@keyframes` name shared by every stylesheet the generator emits.
pub const ANIMATION_NAME: &str = "svg_filter";

/// SVG namespace URI.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// XLink namespace URI, declared on exported documents for legacy `href`s.
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Media type of exported documents.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Element id of the filter driving keyframe `index`.
pub fn filter_id(index: usize) -> String {
    format!("{ANIMATION_NAME}_{index}")
}

/// Timeline position of keyframe `index`, in percent of the cycle.
pub fn keyframe_percent(index: usize) -> f64 {
    (index as f64 / (KEYFRAME_COUNT - 1) as f64) * 100.0
}

/// Reject keyframe indices outside `0..KEYFRAME_COUNT`.
pub fn check_keyframe(index: usize) -> WobbleResult<()> {
    if index >= KEYFRAME_COUNT {
        return Err(WobbleError::validation(format!(
            "keyframe index {index} out of range (0..{KEYFRAME_COUNT})"
        )));
    }
    Ok(())
}

/// Canonical text form of a numeric attribute or CSS value.
///
/// Shortest round-trip decimal with no locale and no rounding: `2.0` prints as
/// `2`, `0.02` as `0.02`. Negative zero prints as `0`; non-finite values use
/// the `NaN` / `Infinity` / `-Infinity` tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("NaN")
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
        } else if v == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{v}")
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
