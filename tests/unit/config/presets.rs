use super::*;

#[test]
fn strength3_applies_and_preserves_infinite() {
    let current = Config {
        infinite: false,
        ..Config::default()
    };
    let next = preset("strength3").unwrap().apply_to(&current);

    assert_eq!(next.base_frequency, 0.05);
    assert_eq!(next.num_octaves, 3);
    assert_eq!(next.turbulence_type, TurbulenceType::FractalNoise);
    assert_eq!(next.scales, [2.0, 6.0, 3.0, 5.0, 4.0]);
    assert_eq!(next.img_width, 100);
    assert!(!next.infinite);
}

#[test]
fn infinite_true_is_also_preserved() {
    let next = preset("strength5").unwrap().apply_to(&Config::default());
    assert!(next.infinite);
    assert_eq!(next.turbulence_type, TurbulenceType::Turbulence);
}

#[test]
fn ids_are_unique_and_ordered() {
    let ids: Vec<&str> = presets().iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec!["strength1", "strength2", "strength3", "strength4", "strength5"]
    );
}

#[test]
fn unknown_preset_is_none() {
    assert!(preset("strength9").is_none());
    assert!(preset("").is_none());
}

#[test]
fn preset_json_omits_infinite() {
    let json = serde_json::to_string(preset("strength1").unwrap()).unwrap();
    assert!(json.contains("\"id\":\"strength1\""));
    assert!(json.contains("\"baseFrequency\":0.01"));
    assert!(!json.contains("infinite"));
}
