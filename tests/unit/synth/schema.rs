use super::*;
use serde_json::json;

#[test]
fn prompt_names_theme_and_enumerations() {
    let p = design_prompt("Neon Tokyo Night");
    assert!(p.contains("\"Neon Tokyo Night\""));
    assert!(p.contains("one of: solid, stripes, hoops, gradient, half, chevron"));
    assert!(p.contains("one of: round, v-neck, polo"));
}

#[test]
fn schema_requires_all_six_fields() {
    let s = design_schema();
    assert_eq!(s["type"], "OBJECT");
    assert_eq!(s["required"], json!(SYNTHESIZED_FIELDS));
    let props = s["properties"].as_object().unwrap();
    assert_eq!(props.len(), 6);
    assert!(props.values().all(|p| p["type"] == "STRING"));
    assert_eq!(s["properties"]["collarType"]["enum"], json!(["round", "v-neck", "polo"]));
    assert_eq!(s["properties"]["pattern"]["enum"].as_array().unwrap().len(), 6);
    assert!(s["properties"]["primaryColor"].get("enum").is_none());
}
