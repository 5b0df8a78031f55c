use super::*;
use serde_json::json;

#[test]
fn default_matches_session_seed() {
    let c = DesignConfiguration::default();
    assert_eq!(c.primary_color.as_str(), "#ef4444");
    assert_eq!(c.secondary_color.as_str(), "#1e293b");
    assert_eq!(c.accent_color.as_str(), "#fde047");
    assert_eq!(c.text_color.as_str(), "#ffffff");
    assert_eq!(c.pattern, Pattern::Stripes);
    assert_eq!(c.collar_type, CollarType::Round);
    assert_eq!(c.back_number, "10");
    assert_eq!(c.back_name, "MESSI");
    assert_eq!(c.view, ViewMode::Front);
    assert!(c.show_crest);
}

#[test]
fn json_uses_camel_case_and_kebab_enums() {
    let c = DesignConfiguration::default().apply(DesignEdit::Collar(CollarType::VNeck));
    let v = serde_json::to_value(&c).unwrap();
    assert_eq!(v["collarType"], json!("v-neck"));
    assert_eq!(v["primaryColor"], json!("#ef4444"));
    assert_eq!(v["showCrest"], json!(true));
    assert_eq!(v["backNumber"], json!("10"));
}

#[test]
fn lenient_decoding_degrades_unknown_enums_and_fills_missing_fields() {
    let c: DesignConfiguration = serde_json::from_value(json!({
        "pattern": "argyle",
        "collarType": 7,
        "view": "BACK",
        "backName": "rossi"
    }))
    .unwrap();
    assert_eq!(c.pattern, Pattern::Solid);
    assert_eq!(c.collar_type, CollarType::Round);
    assert_eq!(c.view, ViewMode::Back);
    assert_eq!(c.back_name, "rossi");
    assert_eq!(c.back_number, "10");
    assert_eq!(c.primary_color, DesignConfiguration::default().primary_color);
}

#[test]
fn strict_from_str_rejects_unknown_values() {
    assert_eq!("v-neck".parse::<CollarType>().unwrap(), CollarType::VNeck);
    assert_eq!(" Chevron ".parse::<Pattern>().unwrap(), Pattern::Chevron);
    let err = "argyle".parse::<Pattern>().unwrap_err();
    assert!(err.to_string().contains("unknown pattern \"argyle\""));
    assert!("sideways".parse::<ViewMode>().is_err());
}

#[test]
fn apply_changes_exactly_one_field() {
    let base = DesignConfiguration::default();
    let next = base.apply(DesignEdit::Pattern(Pattern::Hoops));
    assert_eq!(next.pattern, Pattern::Hoops);
    assert_eq!(
        DesignConfiguration {
            pattern: base.pattern,
            ..next.clone()
        },
        base
    );
    assert_eq!(base.pattern, Pattern::Stripes);
}

#[test]
fn back_number_edit_is_capped_at_two_chars() {
    let c = DesignConfiguration::default().apply(DesignEdit::BackNumber("123".to_owned()));
    assert_eq!(c.back_number, "12");

    let c = DesignConfiguration::default().apply(DesignEdit::BackNumber("７７７".to_owned()));
    assert_eq!(c.back_number.chars().count(), 2);
}

#[test]
fn display_helpers() {
    let c = DesignConfiguration {
        back_number: "100".to_owned(),
        back_name: "müller".to_owned(),
        ..DesignConfiguration::default()
    };
    assert_eq!(c.display_number(), "10");
    assert_eq!(c.display_name(), "MÜLLER");
    assert_eq!(ViewMode::Back.badge_label(), "BACK VIEW");
    assert_eq!(ViewMode::Front.flipped(), ViewMode::Back);
}

#[test]
fn merge_overwrites_only_present_fields() {
    let base = DesignConfiguration::default();
    let partial = PartialDesignConfiguration {
        primary_color: Some(HexColor::new("#0b1d3a")),
        collar_type: Some(CollarType::Polo),
        ..PartialDesignConfiguration::default()
    };
    let merged = base.merge(&partial);

    assert_eq!(merged.primary_color.as_str(), "#0b1d3a");
    assert_eq!(merged.collar_type, CollarType::Polo);
    assert_eq!(
        DesignConfiguration {
            primary_color: base.primary_color.clone(),
            collar_type: base.collar_type,
            ..merged
        },
        base
    );
}

#[test]
fn empty_partial_is_identity() {
    let base = DesignConfiguration::default().apply(DesignEdit::View(ViewMode::Back));
    let empty = PartialDesignConfiguration::default();
    assert!(empty.is_empty());
    assert_eq!(base.merge(&empty), base);
    assert_eq!(serde_json::to_value(&empty).unwrap(), json!({}));
}

#[test]
fn partial_field_names_follow_wire_spelling() {
    let partial = PartialDesignConfiguration {
        text_color: Some(HexColor::new("#ffffff")),
        pattern: Some(Pattern::Half),
        show_crest: Some(false),
        ..PartialDesignConfiguration::default()
    };
    assert_eq!(partial.field_names(), vec!["textColor", "pattern", "showCrest"]);
}

#[test]
fn reads_configuration_from_reader() {
    let src = br##"{ "primaryColor": "#112233", "pattern": "gradient" }"##;
    let c = DesignConfiguration::from_reader(&src[..]).unwrap();
    assert_eq!(c.primary_color.as_str(), "#112233");
    assert_eq!(c.pattern, Pattern::Gradient);

    assert!(DesignConfiguration::from_reader(&b"[1, 2"[..]).is_err());
}

#[test]
fn missing_file_reports_path_and_io_cause() {
    let err = DesignConfiguration::from_path("target/does-not-exist/design.json").unwrap_err();
    assert!(matches!(err, ProkitError::Other(_)), "{err}");
    assert!(err.to_string().contains("does-not-exist/design.json"));
    assert!(std::error::Error::source(&err).is_some());
}
