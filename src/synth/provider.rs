use crate::foundation::error::ProkitResult;

/// One structured-output request to a generative model.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    /// Instruction text.
    pub prompt: String,
    /// Schema the response must follow, in the provider's schema dialect.
    pub response_schema: serde_json::Value,
    /// Requested response MIME type.
    pub response_mime_type: &'static str,
}

/// A text-generation backend.
///
/// Implementations return the raw response text. Parsing and validation happen in
/// [`Synthesizer`](crate::synth::synthesizer::Synthesizer), never here.
#[async_trait::async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Run one request and return the concatenated response text.
    async fn generate(&self, request: &GenerationRequest) -> ProkitResult<String>;
}
