use std::path::PathBuf;

use crate::{
    config::{model::Config, store::ConfigStore},
    document::assemble::create_animated,
    export::{
        filename::{has_svg_extension, preset_export_name, upload_export_name},
        package::SvgDownload,
    },
    foundation::error::{WobbleError, WobbleResult},
};

/// Bundled preset assets that can be exported directly.
pub const PRESET_ASSETS: [&str; 3] = ["img/star.svg", "img/heart.svg", "img/cloud.svg"];

/// Label shown while an export is in flight.
pub const BUSY_LABEL: &str = "Generating...";

/// Label shown after a failed export.
pub const ERROR_LABEL: &str = "Error";

/// Source of preset asset text (the page's fetch).
pub trait SvgSource {
    /// Return the text of the asset at `path`.
    fn fetch(&self, path: &str) -> WobbleResult<String>;
}

/// Reads preset assets relative to a root directory.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SvgSource for DirSource {
    fn fetch(&self, path: &str) -> WobbleResult<String> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full)
            .map_err(|e| WobbleError::fetch(format!("read '{}': {e}", full.display())))
    }
}

/// The button that triggers an export.
///
/// Disabled while an export runs, so a second trigger before completion is
/// refused instead of queued.
#[derive(Clone, Debug)]
pub struct ExportControl {
    idle_label: String,
    label: String,
    disabled: bool,
}

impl ExportControl {
    /// Enabled control showing `label`.
    pub fn new(label: impl Into<String>) -> Self {
        let idle_label = label.into();
        Self {
            label: idle_label.clone(),
            idle_label,
            disabled: false,
        }
    }

    /// Currently displayed label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True while an export is in flight.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable the control for a new export.
    pub fn begin(&mut self) -> WobbleResult<()> {
        if self.disabled {
            return Err(WobbleError::busy(format!(
                "export '{}' already in progress",
                self.idle_label
            )));
        }
        self.disabled = true;
        self.label = BUSY_LABEL.to_owned();
        Ok(())
    }

    /// Re-enable the control; a failure leaves [`ERROR_LABEL`] showing.
    pub fn finish(&mut self, ok: bool) {
        self.disabled = false;
        self.label = if ok {
            self.idle_label.clone()
        } else {
            ERROR_LABEL.to_owned()
        };
    }

    /// Run `f` between [`begin`](Self::begin) and [`finish`](Self::finish).
    pub fn run<T>(&mut self, f: impl FnOnce() -> WobbleResult<T>) -> WobbleResult<T> {
        self.begin()?;
        let res = f();
        self.finish(res.is_ok());
        res
    }
}

/// Export a bundled preset asset animated with the current parameters.
///
/// The configuration is read before the asset is fetched: the download
/// reflects the parameters at trigger time. Failures are logged and returned;
/// `store` is never modified.
#[tracing::instrument(skip(store, source, control))]
pub fn export_preset(
    store: &ConfigStore,
    source: &dyn SvgSource,
    control: &mut ExportControl,
    asset_path: &str,
) -> WobbleResult<SvgDownload> {
    if !PRESET_ASSETS.contains(&asset_path) {
        return Err(WobbleError::validation(format!(
            "'{asset_path}' is not a bundled preset asset"
        )));
    }

    let config = store.snapshot();
    control
        .run(|| {
            let text = source.fetch(asset_path)?;
            let document = create_animated(&config, &text)?;
            Ok(SvgDownload::new(preset_export_name(asset_path), document))
        })
        .inspect_err(|e| tracing::error!(error = %e, "preset export failed"))
}

/// A user-selected SVG file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    /// Original file name.
    pub name: String,
    /// File contents.
    pub text: String,
}

impl Upload {
    /// Accept a file by name; anything not ending in `.svg` is ignored.
    pub fn accept(name: impl Into<String>, text: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if !has_svg_extension(&name) {
            tracing::debug!(%name, "ignoring non-svg upload");
            return None;
        }
        Some(Self {
            name,
            text: text.into(),
        })
    }

    /// Animate this upload with `config`.
    pub fn export(&self, config: &Config) -> WobbleResult<SvgDownload> {
        let document = create_animated(config, &self.text)
            .inspect_err(|e| tracing::error!(error = %e, name = %self.name, "upload export failed"))?;
        Ok(SvgDownload::new(upload_export_name(&self.name), document))
    }
}

/// Holds the most recently accepted upload.
#[derive(Clone, Debug, Default)]
pub struct UploadSlot {
    current: Option<Upload>,
}

impl UploadSlot {
    /// Offer a file; returns whether it replaced the current upload.
    pub fn offer(&mut self, name: impl Into<String>, text: impl Into<String>) -> bool {
        match Upload::accept(name, text) {
            Some(upload) => {
                self.current = Some(upload);
                true
            }
            None => false,
        }
    }

    /// Current upload, if any.
    pub fn current(&self) -> Option<&Upload> {
        self.current.as_ref()
    }

    /// Animate the current upload; `Ok(None)` when nothing was uploaded.
    pub fn download(&self, config: &Config) -> WobbleResult<Option<SvgDownload>> {
        self.current.as_ref().map(|u| u.export(config)).transpose()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/session.rs"]
mod tests;
