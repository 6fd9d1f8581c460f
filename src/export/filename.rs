/// Path prefix of bundled preset assets.
pub const ASSET_PREFIX: &str = "img/";

/// Prefix replacing [`ASSET_PREFIX`] in exported preset names.
pub const PRESET_EXPORT_PREFIX: &str = "animated_";

/// Suffix replacing `.svg` in exported upload names.
pub const UPLOAD_EXPORT_SUFFIX: &str = "_animated.svg";

/// Download name for a preset asset: `img/star.svg` -> `animated_star.svg`.
///
/// Only the first occurrence of the prefix is replaced.
pub fn preset_export_name(asset_path: &str) -> String {
    asset_path.replacen(ASSET_PREFIX, PRESET_EXPORT_PREFIX, 1)
}

/// Download name for an uploaded file: `Icon.SVG` -> `Icon_animated.svg`.
///
/// Names without a trailing `.svg` (any case) are returned unchanged.
pub fn upload_export_name(file_name: &str) -> String {
    match strip_svg_extension(file_name) {
        Some(stem) => format!("{stem}{UPLOAD_EXPORT_SUFFIX}"),
        None => file_name.to_owned(),
    }
}

/// True if `file_name` ends with `.svg`, ignoring ASCII case.
pub fn has_svg_extension(file_name: &str) -> bool {
    strip_svg_extension(file_name).is_some()
}

fn strip_svg_extension(file_name: &str) -> Option<&str> {
    let split = file_name.len().checked_sub(4)?;
    let (stem, ext) = (file_name.get(..split)?, file_name.get(split..)?);
    ext.eq_ignore_ascii_case(".svg").then_some(stem)
}

#[cfg(test)]
#[path = "../../tests/unit/export/filename.rs"]
mod tests;
