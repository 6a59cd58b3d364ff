use crate::*;
use serde_json::json;

#[test]
fn serializes_with_camel_case_field_names() {
    let settings = CloudSettings::default();
    let value = serde_json::to_value(&settings).unwrap();
    assert_eq!(
        value,
        json!({
            "maxWords": 120,
            "fontSizeRange": [18.0, 78.0],
            "spiral": "archimedean",
            "padding": 2.0,
            "rotationAngles": [-60.0, -30.0, 0.0, 30.0, 60.0],
            "colorSchemeId": "vivid",
            "colorRule": "scheme",
            "aspectRatio": "landscape",
        })
    );
}

#[test]
fn round_trips_field_by_field() {
    let settings = CloudSettings {
        max_words: 200,
        font_size_range: [12.0, 96.0],
        spiral: Spiral::Rectangular,
        padding: 6.0,
        rotation_angles: vec![0.0, 90.0],
        color_scheme_id: "sunset".to_string(),
        color_rule: ColorRule::Frequency,
        aspect_ratio: AspectRatio::Portrait,
    };
    let text = serde_json::to_string(&settings).unwrap();
    let back: CloudSettings = serde_json::from_str(&text).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn older_payloads_without_new_fields_still_load() {
    // colorRule and aspectRatio were added after the first release; saved
    // projects predating them must keep deserializing.
    let back: CloudSettings = serde_json::from_value(json!({
        "maxWords": 80,
        "fontSizeRange": [18.0, 78.0],
        "spiral": "archimedean",
        "padding": 2.0,
        "rotationAngles": [0.0],
        "colorSchemeId": "mono",
    }))
    .unwrap();
    assert_eq!(back.color_rule, ColorRule::Scheme);
    assert_eq!(back.aspect_ratio, AspectRatio::Landscape);
}

#[test]
fn normalized_clamps_out_of_range_values() {
    let settings = CloudSettings {
        max_words: 5000,
        font_size_range: [200.0, 4.0],
        padding: 99.0,
        color_scheme_id: "  ".to_string(),
        ..CloudSettings::default()
    }
    .normalized();
    assert_eq!(settings.max_words, 400);
    assert_eq!(settings.padding, 20.0);
    assert_eq!(settings.color_scheme_id, "vivid");
    let [min, max] = settings.font_size_range;
    assert!(min + 4.0 <= max);
    assert!((10.0..=160.0).contains(&min));
    assert!((10.0..=160.0).contains(&max));
}

#[test]
fn aspect_ratios_match_fixed_dimensions() {
    assert_eq!(AspectRatio::Square.ratio(), 1.0);
    assert_eq!(AspectRatio::Portrait.ratio(), 0.75);
    assert!((AspectRatio::Landscape.ratio() - 16.0 / 9.0).abs() < 1e-12);
    assert_eq!(AspectRatio::Landscape.height_for_width(1280.0), 720.0);
}
