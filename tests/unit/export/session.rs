use std::{cell::RefCell, collections::BTreeMap};

use super::*;
use crate::{
    config::model::ConfigField,
    pipeline::artifacts::Artifacts,
};

const STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 2l3 7h7l-6 4 2 8-6-5-6 5 2-8-6-4h7z"/></svg>"#;

#[derive(Default)]
struct MapSource {
    files: BTreeMap<&'static str, &'static str>,
    fetched: RefCell<Vec<String>>,
}

impl SvgSource for MapSource {
    fn fetch(&self, path: &str) -> WobbleResult<String> {
        self.fetched.borrow_mut().push(path.to_owned());
        self.files
            .get(path)
            .map(|s| s.to_string())
            .ok_or_else(|| WobbleError::fetch(format!("404 {path}")))
    }
}

fn source_with_star() -> MapSource {
    let mut src = MapSource::default();
    src.files.insert("img/star.svg", STAR);
    src.files.insert("img/heart.svg", "<notsvg/>");
    src
}

#[test]
fn preset_export_produces_named_download() {
    let store = ConfigStore::new();
    let src = source_with_star();
    let mut control = ExportControl::new("Download");

    let dl = export_preset(&store, &src, &mut control, "img/star.svg").unwrap();
    assert_eq!(dl.filename, "animated_star.svg");
    assert_eq!(dl.media_type, "image/svg+xml");
    let text = String::from_utf8(dl.bytes).unwrap();
    assert!(text.contains("viewBox=\"0 0 24 24\""));
    assert!(!control.is_disabled());
    assert_eq!(control.label(), "Download");
}

#[test]
fn unknown_asset_is_rejected_before_fetch() {
    let store = ConfigStore::new();
    let src = source_with_star();
    let mut control = ExportControl::new("Download");
    let err = export_preset(&store, &src, &mut control, "img/../secret.svg").unwrap_err();
    assert!(matches!(err, WobbleError::Validation(_)));
    assert!(src.fetched.borrow().is_empty());
    assert_eq!(control.label(), "Download");
}

#[test]
fn fetch_failure_flags_control_and_leaves_state_alone() {
    let mut store = ConfigStore::new();
    store.set(ConfigField::ImgWidth(77)).unwrap();
    let before_cfg = store.snapshot();
    let before_artifacts = Artifacts::regenerate(&before_cfg);

    let src = source_with_star();
    let mut control = ExportControl::new("Download");
    let err = export_preset(&store, &src, &mut control, "img/cloud.svg").unwrap_err();

    assert!(matches!(err, WobbleError::Fetch(_)));
    assert_eq!(control.label(), ERROR_LABEL);
    assert!(!control.is_disabled());
    assert_eq!(store.snapshot(), before_cfg);
    assert_eq!(Artifacts::regenerate(&store.snapshot()), before_artifacts);
}

#[test]
fn parse_failure_of_fetched_asset_is_reported() {
    let store = ConfigStore::new();
    let src = source_with_star();
    let mut control = ExportControl::new("Download");
    let err = export_preset(&store, &src, &mut control, "img/heart.svg").unwrap_err();
    assert!(matches!(err, WobbleError::Parse(_)));
    assert_eq!(control.label(), ERROR_LABEL);
}

#[test]
fn control_refuses_second_trigger_while_busy() {
    let mut control = ExportControl::new("Download");
    control.begin().unwrap();
    assert!(control.is_disabled());
    assert_eq!(control.label(), BUSY_LABEL);

    let err = control.begin().unwrap_err();
    assert!(matches!(err, WobbleError::Busy(_)));

    control.finish(true);
    assert!(!control.is_disabled());
    assert_eq!(control.label(), "Download");
    control.begin().unwrap();
}

#[test]
fn busy_control_does_not_fetch() {
    let store = ConfigStore::new();
    let src = source_with_star();
    let mut control = ExportControl::new("Download");
    control.begin().unwrap();

    let err = export_preset(&store, &src, &mut control, "img/star.svg").unwrap_err();
    assert!(matches!(err, WobbleError::Busy(_)));
    assert!(src.fetched.borrow().is_empty());
    assert!(control.is_disabled());
}

#[test]
fn export_reflects_parameters_at_trigger_time() {
    let mut store = ConfigStore::new();
    store.set(ConfigField::Infinite(false)).unwrap();
    let snapshot = store.snapshot();
    store.set(ConfigField::Infinite(true)).unwrap();

    let upload = Upload::accept("a.svg", STAR).unwrap();
    let dl = upload.export(&snapshot).unwrap();
    let text = String::from_utf8(dl.bytes).unwrap();
    assert!(text.contains("svg_filter 0.5s 1;"));
}

#[test]
fn non_svg_upload_is_silently_ignored() {
    let mut slot = UploadSlot::default();
    assert!(!slot.offer("picture.png", STAR));
    assert!(slot.current().is_none());
    assert_eq!(slot.download(&Config::default()).unwrap(), None);
}

#[test]
fn uploaded_file_exports_with_derived_name() {
    let mut slot = UploadSlot::default();
    assert!(slot.offer("Icon.SVG", STAR));
    let dl = slot.download(&Config::default()).unwrap().unwrap();
    assert_eq!(dl.filename, "Icon_animated.svg");
}

#[test]
fn later_non_svg_offer_keeps_previous_upload() {
    let mut slot = UploadSlot::default();
    slot.offer("first.svg", STAR);
    slot.offer("second.txt", "nope");
    assert_eq!(slot.current().unwrap().name, "first.svg");
}

#[test]
fn unparseable_upload_yields_error_and_no_download() {
    let mut slot = UploadSlot::default();
    slot.offer("broken.svg", "<notsvg></notsvg>");
    let err = slot.download(&Config::default()).unwrap_err();
    assert!(matches!(err, WobbleError::Parse(_)));
}

#[test]
fn dir_source_reports_missing_file_as_fetch_error() {
    let src = DirSource::new("target/does-not-exist");
    let err = src.fetch("img/star.svg").unwrap_err();
    assert!(matches!(err, WobbleError::Fetch(_)));
}

#[test]
fn bundled_assets_parse() {
    let src = DirSource::new("assets");
    for path in PRESET_ASSETS {
        let text = src.fetch(path).unwrap();
        crate::document::foreign::ForeignSvg::parse(&text).unwrap();
    }
}
