/// Gemini REST transport.
pub mod gemini;
/// Provider abstraction.
pub mod provider;
/// Prompt and response schema.
pub mod schema;
/// Theme to partial configuration.
pub mod synthesizer;
