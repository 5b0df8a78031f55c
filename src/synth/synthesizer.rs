use std::sync::Arc;

use serde::Deserialize;

use crate::design::color::HexColor;
use crate::design::config::{CollarType, Pattern, PartialDesignConfiguration};
use crate::foundation::error::{ProkitError, ProkitResult};
use crate::synth::provider::{GenerationRequest, GenerativeProvider};
use crate::synth::schema::{RESPONSE_MIME_TYPE, design_prompt, design_schema};

/// Turns a free-text theme into a partial design via a [`GenerativeProvider`].
///
/// Cheap to clone; clones share the provider.
#[derive(Clone)]
pub struct Synthesizer {
    provider: Arc<dyn GenerativeProvider>,
}

impl std::fmt::Debug for Synthesizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer").finish_non_exhaustive()
    }
}

/// Exactly what the model is allowed to return.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SynthesizedDesign {
    primary_color: HexColor,
    secondary_color: HexColor,
    accent_color: HexColor,
    text_color: HexColor,
    pattern: Pattern,
    collar_type: CollarType,
}

impl SynthesizedDesign {
    fn validate(self) -> ProkitResult<PartialDesignConfiguration> {
        for (field, color) in [
            ("primaryColor", &self.primary_color),
            ("secondaryColor", &self.secondary_color),
            ("accentColor", &self.accent_color),
            ("textColor", &self.text_color),
        ] {
            if !color.is_well_formed() {
                return Err(ProkitError::synthesis(format!(
                    "{field} \"{color}\" is not a #RRGGBB color"
                )));
            }
        }

        Ok(PartialDesignConfiguration {
            primary_color: Some(self.primary_color),
            secondary_color: Some(self.secondary_color),
            accent_color: Some(self.accent_color),
            text_color: Some(self.text_color),
            pattern: Some(self.pattern),
            collar_type: Some(self.collar_type),
            ..PartialDesignConfiguration::default()
        })
    }
}

impl Synthesizer {
    /// Wrap a provider.
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    /// Synthesize a partial design for `theme`.
    ///
    /// Never fails: any transport, parse, or schema problem is logged and yields an empty
    /// partial, which merges as "no change".
    pub async fn synthesize(&self, theme: &str) -> PartialDesignConfiguration {
        match self.try_synthesize(theme).await {
            Ok(partial) => partial,
            Err(e) => {
                tracing::warn!(error = %e, "design synthesis failed; keeping current design");
                PartialDesignConfiguration::default()
            }
        }
    }

    /// Like [`Synthesizer::synthesize`] but surfaces the failure.
    ///
    /// A blank theme returns an empty partial without contacting the provider.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn try_synthesize(&self, theme: &str) -> ProkitResult<PartialDesignConfiguration> {
        let theme = theme.trim();
        if theme.is_empty() {
            tracing::debug!("blank theme; skipping provider call");
            return Ok(PartialDesignConfiguration::default());
        }

        let request = GenerationRequest {
            prompt: design_prompt(theme),
            response_schema: design_schema(),
            response_mime_type: RESPONSE_MIME_TYPE,
        };
        let text = self.provider.generate(&request).await?;
        let partial = parse_response(&text)?;
        tracing::debug!(fields = ?partial.field_names(), "design synthesized");
        Ok(partial)
    }
}

fn parse_response(text: &str) -> ProkitResult<PartialDesignConfiguration> {
    let design: SynthesizedDesign = serde_json::from_str(text.trim())
        .map_err(|e| ProkitError::synthesis(format!("response violates design schema: {e}")))?;
    design.validate()
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesizer.rs"]
mod tests;
