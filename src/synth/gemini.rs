use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ProkitError, ProkitResult};
use crate::synth::provider::{GenerationRequest, GenerativeProvider};

/// Default model id.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Default REST endpoint root.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Transport settings for [`GeminiProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`.
    pub api_key: String,
    /// Model id, e.g. `gemini-3-flash-preview`.
    pub model: String,
    /// Endpoint root without trailing slash.
    pub endpoint: String,
    /// Whole-request timeout. `None` leaves the transport default.
    pub timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_owned(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
        }
    }
}

impl GeminiConfig {
    /// Read settings from the environment.
    ///
    /// `GEMINI_API_KEY` (or `API_KEY`) supplies the key; `PROKIT_MODEL` and `PROKIT_ENDPOINT`
    /// override the defaults. A missing key is not an error here; requests will be rejected by
    /// the service.
    pub fn from_env() -> Self {
        let var = |k: &str| std::env::var(k).ok().filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: var("GEMINI_API_KEY")
                .or_else(|| var("API_KEY"))
                .unwrap_or_default(),
            model: var("PROKIT_MODEL").unwrap_or(defaults.model),
            endpoint: var("PROKIT_ENDPOINT").unwrap_or(defaults.endpoint),
            timeout: None,
        }
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// Google Gemini REST provider.
#[derive(Clone, Debug)]
pub struct GeminiProvider {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Build a provider with its own HTTP client.
    pub fn new(config: GeminiConfig) -> ProkitResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = config.timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| ProkitError::synthesis(format!("build http client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Active settings.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateBody<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [PartOut<'a>; 1],
}

#[derive(Serialize)]
struct PartOut<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a serde_json::Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartIn>,
}

#[derive(Deserialize)]
struct PartIn {
    text: Option<String>,
}

pub(crate) fn request_body(request: &GenerationRequest) -> GenerateBody<'_> {
    GenerateBody {
        contents: [Content {
            parts: [PartOut {
                text: &request.prompt,
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: request.response_mime_type,
            response_schema: &request.response_schema,
        },
    }
}

/// Concatenate the text parts of the first candidate.
pub(crate) fn response_text(raw: &str) -> ProkitResult<String> {
    let resp: GenerateResponse = serde_json::from_str(raw)
        .map_err(|e| ProkitError::synthesis(format!("decode generateContent response: {e}")))?;
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ProkitError::synthesis("response has no candidates"))?;
    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.is_empty() {
        return Err(ProkitError::synthesis("first candidate has no text"));
    }
    Ok(text)
}

#[async_trait::async_trait]
impl GenerativeProvider for GeminiProvider {
    #[tracing::instrument(level = "debug", skip_all, fields(model = %self.config.model))]
    async fn generate(&self, request: &GenerationRequest) -> ProkitResult<String> {
        tracing::debug!(prompt_len = request.prompt.len(), "sending generateContent");
        let resp = self
            .client
            .post(self.config.generate_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request_body(request))
            .send()
            .await
            .map_err(|e| ProkitError::synthesis(format!("generateContent transport: {e}")))?;

        let status = resp.status();
        let raw = resp
            .text()
            .await
            .map_err(|e| ProkitError::synthesis(format!("read generateContent body: {e}")))?;
        if !status.is_success() {
            return Err(ProkitError::synthesis(format!(
                "generateContent returned {status}: {}",
                raw.chars().take(200).collect::<String>()
            )));
        }
        response_text(&raw)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/gemini.rs"]
mod tests;
