use std::path::PathBuf;

use super::*;

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_package").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn new_sets_svg_media_type() {
    let d = SvgDownload::new("a_animated.svg", "<svg/>".to_string());
    assert_eq!(d.media_type, "image/svg+xml");
    assert_eq!(d.bytes, b"<svg/>");
}

#[test]
fn write_into_creates_dir_and_file() {
    let dir = out_dir("write");
    let d = SvgDownload::new("x_animated.svg", "<svg>hi</svg>".to_string());
    let path = d.write_into(&dir).unwrap();
    assert_eq!(path, dir.join("x_animated.svg"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg>hi</svg>");
}

#[test]
fn write_into_keeps_only_file_name_component() {
    let dir = out_dir("flatten");
    let d = SvgDownload::new("nested/deeper/y.svg", String::new());
    let path = d.write_into(&dir).unwrap();
    assert_eq!(path, dir.join("y.svg"));
}

#[test]
fn write_into_rejects_nameless_target() {
    let dir = out_dir("nameless");
    let d = SvgDownload::new("..", String::new());
    assert!(d.write_into(&dir).is_err());
}
