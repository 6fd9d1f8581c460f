use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::{core::SVG_MEDIA_TYPE, error::WobbleResult};

/// A generated document packaged for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SvgDownload {
    /// Suggested file name.
    pub filename: String,
    /// Always `image/svg+xml`.
    pub media_type: &'static str,
    /// UTF-8 document bytes.
    pub bytes: Vec<u8>,
}

impl SvgDownload {
    /// Package `document` under `filename`.
    pub fn new(filename: impl Into<String>, document: String) -> Self {
        Self {
            filename: filename.into(),
            media_type: SVG_MEDIA_TYPE,
            bytes: document.into_bytes(),
        }
    }

    /// Hand the bytes off to the filesystem: write `dir/<filename>`, creating
    /// `dir` if needed. Only the file name component of `filename` is used.
    pub fn write_into(&self, dir: &Path) -> WobbleResult<PathBuf> {
        let name = Path::new(&self.filename)
            .file_name()
            .with_context(|| format!("download name '{}' has no file name", self.filename))?;

        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let path = dir.join(name);
        std::fs::write(&path, &self.bytes)
            .with_context(|| format!("write svg '{}'", path.display()))?;

        tracing::debug!(path = %path.display(), bytes = self.bytes.len(), "wrote download");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/package.rs"]
mod tests;
