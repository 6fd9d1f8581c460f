use super::*;

#[test]
fn defaults_match_documented_values() {
    let c = Config::default();
    assert_eq!(c.base_frequency, 0.02);
    assert_eq!(c.num_octaves, 3);
    assert_eq!(c.turbulence_type, TurbulenceType::FractalNoise);
    assert_eq!(c.scales, [2.0, 6.0, 3.0, 4.0, 3.0]);
    assert_eq!(c.duration, 0.5);
    assert!(c.infinite);
    assert_eq!(c.img_width, 100);
}

#[test]
fn turbulence_type_tokens_roundtrip() {
    for t in [TurbulenceType::FractalNoise, TurbulenceType::Turbulence] {
        assert_eq!(t.to_string().parse::<TurbulenceType>().unwrap(), t);
    }
    assert!("perlin".parse::<TurbulenceType>().is_err());
}

#[test]
fn json_uses_camel_case_names() {
    let json = Config::default().to_json_pretty().unwrap();
    assert!(json.contains("\"baseFrequency\": 0.02"));
    assert!(json.contains("\"turbulenceType\": \"fractalNoise\""));
    assert!(json.contains("\"imgWidth\": 100"));
}

#[test]
fn partial_json_fills_defaults() {
    let c = Config::from_json(r#"{ "numOctaves": 5, "turbulenceType": "turbulence" }"#).unwrap();
    assert_eq!(c.num_octaves, 5);
    assert_eq!(c.turbulence_type, TurbulenceType::Turbulence);
    assert_eq!(c.scales, DEFAULT_SCALES);
    assert!(c.infinite);
}

#[test]
fn json_with_wrong_scale_count_is_rejected() {
    let err = Config::from_json(r#"{ "scales": [1, 2, 3] }"#).unwrap_err();
    assert!(err.to_string().contains("invalid config JSON"));
}

#[test]
fn set_replaces_single_field() {
    let mut c = Config::default();
    c.set(ConfigField::Scale {
        index: 4,
        value: 9.5,
    })
    .unwrap();
    c.set(ConfigField::Duration(1.25)).unwrap();
    c.set(ConfigField::TurbulenceType(TurbulenceType::Turbulence))
        .unwrap();
    assert_eq!(c.scales, [2.0, 6.0, 3.0, 4.0, 9.5]);
    assert_eq!(c.duration, 1.25);
    assert_eq!(c.turbulence_type, TurbulenceType::Turbulence);
}

#[test]
fn set_scale_out_of_range_leaves_config_untouched() {
    let mut c = Config::default();
    let before = c.clone();
    assert!(
        c.set(ConfigField::Scale {
            index: KEYFRAME_COUNT,
            value: 1.0,
        })
        .is_err()
    );
    assert_eq!(c, before);
}

#[test]
fn out_of_range_values_pass_through() {
    let mut c = Config::default();
    c.set(ConfigField::Duration(-2.0)).unwrap();
    c.set(ConfigField::NumOctaves(0)).unwrap();
    assert_eq!(c.duration, -2.0);
    assert_eq!(c.num_octaves, 0);
}
