use super::*;
use crate::config::model::{DEFAULT_SCALES, TurbulenceType};

#[test]
fn snapshot_is_detached_from_later_mutation() {
    let mut store = ConfigStore::new();
    let snap = store.snapshot();
    store.set(ConfigField::Duration(3.0)).unwrap();
    assert_eq!(snap.duration, 0.5);
    assert_eq!(store.current().duration, 3.0);
}

#[test]
fn reset_restores_defaults_without_aliasing() {
    let mut store = ConfigStore::new();
    store
        .set(ConfigField::Scale {
            index: 0,
            value: 42.0,
        })
        .unwrap();
    store.set(ConfigField::Infinite(false)).unwrap();
    store.reset();
    assert_eq!(store.current(), &Config::default());

    store
        .set(ConfigField::Scale {
            index: 1,
            value: 7.0,
        })
        .unwrap();
    assert_eq!(DEFAULT_SCALES[1], 6.0);
    assert_eq!(Config::default().scales[1], 6.0);
}

#[test]
fn apply_preset_by_name_keeps_infinite() {
    let mut store = ConfigStore::new();
    store.set(ConfigField::Infinite(false)).unwrap();
    store.apply_preset_by_name("strength3").unwrap();

    let c = store.snapshot();
    assert_eq!(c.base_frequency, 0.05);
    assert_eq!(c.num_octaves, 3);
    assert_eq!(c.turbulence_type, TurbulenceType::FractalNoise);
    assert_eq!(c.scales, [2.0, 6.0, 3.0, 5.0, 4.0]);
    assert_eq!(c.img_width, 100);
    assert!(!c.infinite);
}

#[test]
fn unknown_preset_is_rejected_without_change() {
    let mut store = ConfigStore::new();
    let before = store.snapshot();
    let err = store.apply_preset_by_name("nope").unwrap_err();
    assert!(err.to_string().contains("unknown preset 'nope'"));
    assert_eq!(store.current(), &before);
}

#[test]
fn replace_swaps_whole_config() {
    let mut store = ConfigStore::new();
    let cfg = Config {
        img_width: 320,
        ..Config::default()
    };
    store.replace(cfg.clone());
    assert_eq!(store.snapshot(), cfg);
}
