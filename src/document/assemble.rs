use std::fmt::Write as _;

use crate::{
    config::model::Config,
    document::foreign::ForeignSvg,
    filter::{element::escape_attr_into, markup::filters_text},
    foundation::{
        core::{SVG_NS, XLINK_NS},
        error::WobbleResult,
    },
    keyframes::css::{AnimationShorthand, KeyframeBlock},
};

/// Class of the wrapper group that carries the animation.
pub const ANIM_CLASS: &str = "anim";

/// Standalone animated document: the foreign content wrapped in a group driven
/// by the keyframe animation, with the filter chain in `defs`.
#[tracing::instrument(skip_all, fields(content_len = svg.content().len()))]
pub fn assemble_animated(config: &Config, svg: &ForeignSvg) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_root_open(&mut out, svg);
    out.push_str("<defs>\n");
    out.push_str(&filters_text(config));
    out.push_str("\n</defs>\n<style>\n");
    let _ = writeln!(out, "{}", KeyframeBlock::new());
    let _ = writeln!(
        out,
        ".{ANIM_CLASS} {{ animation: {}; }}",
        AnimationShorthand::from_config(config)
    );
    out.push_str("</style>\n");
    let _ = write!(out, "<g class=\"{ANIM_CLASS}\">{}</g>\n</svg>", svg.content());
    out
}

/// Root start tag carrying the foreign document's geometry and prefixed
/// namespaces, plus newline.
pub(crate) fn write_root_open(out: &mut String, svg: &ForeignSvg) {
    let view_box = svg.view_box();
    let _ = write!(out, "<svg xmlns=\"{SVG_NS}\" xmlns:xlink=\"{XLINK_NS}\"");
    for (name, value) in [
        ("viewBox", view_box.as_str()),
        ("width", svg.width()),
        ("height", svg.height()),
    ] {
        let _ = write!(out, " {name}=\"");
        escape_attr_into(out, value);
        out.push('"');
    }
    for (prefix, uri) in svg.namespaces() {
        let _ = write!(out, " xmlns:{prefix}=\"");
        escape_attr_into(out, uri);
        out.push('"');
    }
    out.push_str(">\n");
}

/// Parse `text` and assemble the animated document; nothing is produced on a
/// parse failure.
pub fn create_animated(config: &Config, text: &str) -> WobbleResult<String> {
    let svg = ForeignSvg::parse(text)?;
    Ok(assemble_animated(config, &svg))
}

#[cfg(test)]
#[path = "../../tests/unit/document/assemble.rs"]
mod tests;
