use super::*;
use serde_json::json;

#[test]
fn default_config_targets_flash_preview() {
    let c = GeminiConfig::default();
    assert_eq!(
        c.generate_url(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
    );
    assert!(c.timeout.is_none());
}

#[test]
fn trailing_slash_on_endpoint_is_ignored() {
    let c = GeminiConfig {
        endpoint: "http://localhost:8080/".to_owned(),
        model: "m".to_owned(),
        ..GeminiConfig::default()
    };
    assert_eq!(c.generate_url(), "http://localhost:8080/models/m:generateContent");
}

#[test]
fn body_wraps_prompt_and_schema() {
    let req = GenerationRequest {
        prompt: "hello".to_owned(),
        response_schema: json!({ "type": "OBJECT" }),
        response_mime_type: "application/json",
    };
    assert_eq!(
        serde_json::to_value(request_body(&req)).unwrap(),
        json!({
            "contents": [{ "parts": [{ "text": "hello" }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "type": "OBJECT" }
            }
        })
    );
}

#[test]
fn response_text_joins_first_candidate_parts() {
    let raw = json!({
        "candidates": [
            { "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } },
            { "content": { "parts": [{ "text": "ignored" }] } }
        ]
    })
    .to_string();
    assert_eq!(response_text(&raw).unwrap(), "{\"a\":1}");
}

#[test]
fn response_without_candidates_is_a_synthesis_error() {
    for raw in [r#"{}"#, r#"{"candidates":[]}"#, r#"{"candidates":[{}]}"#, "not json"] {
        let err = response_text(raw).unwrap_err();
        assert!(matches!(err, ProkitError::Synthesis(_)), "{raw}: {err}");
    }
}

#[test]
fn provider_builds_with_timeout() {
    let p = GeminiProvider::new(GeminiConfig {
        timeout: Some(Duration::from_secs(5)),
        ..GeminiConfig::default()
    })
    .unwrap();
    assert_eq!(p.config().model, DEFAULT_MODEL);
}
