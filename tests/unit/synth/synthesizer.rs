use super::*;
use crate::design::config::DesignConfiguration;
use serde_json::json;
use std::sync::Mutex;

struct Canned {
    reply: ProkitResult<String>,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl Canned {
    fn ok(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.into()),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err(ProkitError::synthesis("connection refused")),
            seen: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl GenerativeProvider for Canned {
    async fn generate(&self, request: &GenerationRequest) -> ProkitResult<String> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(s) => Ok(s.clone()),
            Err(e) => Err(ProkitError::synthesis(e.to_string())),
        }
    }
}

fn valid_reply() -> serde_json::Value {
    json!({
        "primaryColor": "#0B1D3A",
        "secondaryColor": "#ff2bd6",
        "accentColor": "#00e5ff",
        "textColor": "#ffffff",
        "pattern": "gradient",
        "collarType": "v-neck"
    })
}

#[tokio::test]
async fn returns_exactly_the_six_fields_unmodified() {
    let provider = Canned::ok(valid_reply().to_string());
    let synth = Synthesizer::new(provider.clone());

    let partial = synth.try_synthesize("Neon Tokyo Night").await.unwrap();
    assert_eq!(
        partial.field_names(),
        vec![
            "primaryColor",
            "secondaryColor",
            "accentColor",
            "textColor",
            "pattern",
            "collarType"
        ]
    );
    assert_eq!(partial.primary_color.as_ref().unwrap().as_str(), "#0B1D3A");
    assert_eq!(partial.pattern, Some(Pattern::Gradient));
    assert_eq!(partial.collar_type, Some(CollarType::VNeck));

    let seen = provider.seen.lock().unwrap();
    assert!(seen[0].prompt.contains("Neon Tokyo Night"));
    assert_eq!(seen[0].response_mime_type, "application/json");
    assert_eq!(seen[0].response_schema, design_schema());
}

#[tokio::test]
async fn merge_changes_only_synthesized_fields() {
    let synth = Synthesizer::new(Canned::ok(valid_reply().to_string()));
    let base = DesignConfiguration::default();
    let merged = base.merge(&synth.synthesize("Neon Tokyo Night").await);

    assert_eq!(merged.pattern, Pattern::Gradient);
    assert_eq!(merged.back_number, base.back_number);
    assert_eq!(merged.back_name, base.back_name);
    assert_eq!(merged.view, base.view);
    assert_eq!(merged.show_crest, base.show_crest);
}

#[tokio::test]
async fn provider_failure_yields_empty_partial() {
    let synth = Synthesizer::new(Canned::failing());
    assert!(synth.synthesize("anything").await.is_empty());
    assert!(matches!(
        synth.try_synthesize("anything").await,
        Err(ProkitError::Synthesis(_))
    ));
}

#[tokio::test]
async fn schema_violations_yield_empty_partial() {
    let mut unknown = valid_reply();
    unknown["sleeves"] = json!("long");
    let mut missing = valid_reply();
    missing.as_object_mut().unwrap().remove("textColor");
    let mut bad_enum = valid_reply();
    bad_enum["pattern"] = json!("argyle");
    let mut bad_color = valid_reply();
    bad_color["accentColor"] = json!("cyan");

    let replies = [
        "not json at all".to_owned(),
        "[1, 2, 3]".to_owned(),
        unknown.to_string(),
        missing.to_string(),
        bad_enum.to_string(),
        bad_color.to_string(),
    ];
    for reply in replies {
        let synth = Synthesizer::new(Canned::ok(reply.clone()));
        assert!(synth.synthesize("Retro").await.is_empty(), "{reply}");
        assert!(synth.try_synthesize("Retro").await.is_err(), "{reply}");
    }
}

#[tokio::test]
async fn blank_theme_skips_provider() {
    let provider = Canned::ok(valid_reply().to_string());
    let synth = Synthesizer::new(provider.clone());
    assert!(synth.synthesize("   ").await.is_empty());
    assert_eq!(provider.calls(), 0);
}
