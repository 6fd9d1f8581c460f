use std::{fmt::Write as _, io::Cursor, path::Path};

use anyhow::Context as _;

use crate::{
    config::model::Config,
    document::{assemble::write_root_open, foreign::ForeignSvg},
    filter::spec::FilterSpec,
    foundation::{
        core::filter_id,
        error::{WobbleError, WobbleResult},
    },
};

const MAX_DIM: u32 = 16_384;

/// Static document showing keyframe `index`: the foreign content with that
/// keyframe's filter applied as an attribute instead of through CSS.
pub fn keyframe_document(config: &Config, svg: &ForeignSvg, index: usize) -> WobbleResult<String> {
    let filter = FilterSpec::for_keyframe(config, index)?;

    let mut out = String::new();
    write_root_open(&mut out, svg);
    out.push_str("<defs>\n");
    out.push_str(&filter.to_text());
    out.push_str("\n</defs>\n");
    let _ = write!(
        out,
        "<g filter=\"url(#{})\">{}</g>\n</svg>",
        filter_id(index),
        svg.content()
    );
    Ok(out)
}

/// Straight-alpha RGBA8 raster of one keyframe.
#[derive(Clone, Debug)]
pub struct KeyframeStill {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major straight-alpha RGBA8 pixels.
    pub rgba8: Vec<u8>,
}

impl KeyframeStill {
    /// PNG-encoded bytes.
    pub fn encode_png(&self) -> WobbleResult<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.rgba8.clone())
            .ok_or_else(|| WobbleError::render("pixel buffer does not match dimensions"))?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode png")?;
        Ok(buf)
    }

    /// Write a PNG file, creating the parent directory if needed.
    pub fn save_png(&self, path: &Path) -> WobbleResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.rgba8,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Rasterize keyframe `index` of `svg` at `config.img_width` pixels wide,
/// keeping the document's aspect ratio.
#[tracing::instrument(skip(config, svg))]
pub fn render_keyframe(
    config: &Config,
    svg: &ForeignSvg,
    index: usize,
) -> WobbleResult<KeyframeStill> {
    let doc = keyframe_document(config, svg, index)?;
    let tree = usvg::Tree::from_str(&doc, &usvg::Options::default())
        .map_err(|e| WobbleError::render(format!("build svg tree: {e}")))?;

    let size = tree.size();
    let width = config.img_width;
    if width == 0 || width > MAX_DIM {
        return Err(WobbleError::render(format!(
            "raster width {width} out of range (1..={MAX_DIM})"
        )));
    }
    let scale = width as f32 / size.width();
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    if height > MAX_DIM {
        return Err(WobbleError::render(format!(
            "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| WobbleError::render("failed to allocate svg pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let mut rgba8 = pixmap.take();
    demultiply_rgba8_in_place(&mut rgba8);
    tracing::debug!(width, height, "rendered keyframe still");

    Ok(KeyframeStill {
        width,
        height,
        rgba8,
    })
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/still.rs"]
mod tests;
