use super::*;
use serde_json::json;

#[test]
fn parses_mixed_case_hex() {
    let c = HexColor::parse("#EF4444").unwrap();
    assert_eq!(c.as_str(), "#ef4444");
    assert_eq!(c.to_rgb().unwrap(), Rgb8::new(0xef, 0x44, 0x44));
}

#[test]
fn rejects_shorthand_alpha_and_missing_hash() {
    assert!(HexColor::parse("#fff").is_err());
    assert!(HexColor::parse("#ff000080").is_err());
    assert!(HexColor::parse("ff0000").is_err());
    assert!(HexColor::parse("#gg0000").is_err());
    assert!(HexColor::parse("").is_err());
}

#[test]
fn resolve_or_falls_back_on_malformed_input() {
    let fallback = Rgb8::new(1, 2, 3);
    assert_eq!(HexColor::new("not-a-color").resolve_or(fallback), fallback);
    assert_eq!(
        HexColor::new(" #00FF00 ").resolve_or(fallback),
        Rgb8::new(0, 255, 0)
    );
}

#[test]
fn serde_keeps_raw_string() {
    let c: HexColor = serde_json::from_value(json!("#ABCDEF")).unwrap();
    assert_eq!(c.as_str(), "#ABCDEF");
    assert!(c.is_well_formed());
    assert_eq!(serde_json::to_value(&c).unwrap(), json!("#ABCDEF"));

    let bad: HexColor = serde_json::from_value(json!("oceanblue")).unwrap();
    assert!(!bad.is_well_formed());
}
