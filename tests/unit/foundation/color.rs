use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#6D7B8D")).unwrap();
    assert_eq!(c, Color::rgb(0x6d, 0x7b, 0x8d));
    assert!(!c.is_translucent());

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert_eq!(c.b, 255);
    assert!((c.opacity() - 128.0 / 255.0).abs() < 1e-9);
}

#[test]
fn parses_object_form_with_optional_alpha() {
    let c: Color = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Color::rgb(1, 2, 3));

    let c: Color = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3, "alpha": 0.4})).unwrap();
    assert_eq!(c.alpha, Some(0.4));
}

#[test]
fn parses_css_functional_notation() {
    let c: Color = serde_json::from_value(json!("rgba(255, 0, 128, 0.3)")).unwrap();
    assert_eq!((c.r, c.g, c.b), (255, 0, 128));
    assert_eq!(c.alpha, Some(0.3));
    assert!(c.is_translucent());

    assert_eq!(Color::parse(" RGB(10,20,30) ").unwrap(), Color::rgb(10, 20, 30));
    assert!(Color::parse("rgba(1, 2, 3)").unwrap().alpha.is_none());
    assert!(Color::parse("rgba(1, 2, 3, 0.5").is_err());
    assert!(Color::parse("rgb(1, 2)").is_err());
    assert!(Color::parse("rgb(1, x, 3)").is_err());
}

#[test]
fn rejects_bad_hex() {
    assert!(Color::parse_hex("#12345").is_err());
    assert!(Color::parse_hex("#zzzzzz").is_err());
}

#[test]
fn shade_clamps_channels() {
    let c = Color::rgb(200, 100, 0).shade(1.5);
    assert_eq!(c, Color::rgb(255, 150, 0));
    let d = Color::rgb(200, 100, 10).shade(0.5);
    assert_eq!(d, Color::rgb(100, 50, 5));
}

#[test]
fn full_alpha_glow_is_still_translucent() {
    let c = Color::WHITE.with_alpha(1.0);
    assert!(c.is_translucent());
    assert_eq!(c.to_premul_rgba8(), [255, 255, 255, 255]);
}

#[test]
fn premultiplies_translucent_channels() {
    let c = Color::rgb(255, 0, 0).with_alpha(0.5);
    assert_eq!(c.to_premul_rgba8(), [128, 0, 0, 128]);
}

#[test]
fn serializes_as_object_and_round_trips() {
    let c = Color::rgb(9, 8, 7).with_alpha(0.3);
    let v = serde_json::to_value(c).unwrap();
    assert_eq!(v, json!({"r": 9, "g": 8, "b": 7, "alpha": 0.3}));
    let back: Color = serde_json::from_value(v).unwrap();
    assert_eq!(back, c);
}
