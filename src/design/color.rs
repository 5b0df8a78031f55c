use crate::foundation::core::Rgb8;
use crate::foundation::error::{ProkitError, ProkitResult};
use serde::{Deserialize, Serialize};

/// A configuration color in its textual `#RRGGBB` form.
///
/// The configuration keeps whatever string it was given; parsing happens when the color is
/// consumed. [`HexColor::resolve_or`] is the rendering path and never fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Wrap a color string without validating it.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a validated color, normalized to lower case.
    pub fn parse(raw: &str) -> ProkitResult<Self> {
        let rgb = parse_hex(raw).map_err(ProkitError::validation)?;
        Ok(Self::from_rgb(rgb))
    }

    /// Canonical color for an [`Rgb8`] value.
    pub fn from_rgb(rgb: Rgb8) -> Self {
        Self(rgb.to_hex())
    }

    /// The stored string, exactly as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `true` when the stored string is a well-formed `#RRGGBB` color.
    pub fn is_well_formed(&self) -> bool {
        parse_hex(&self.0).is_ok()
    }

    /// Parse the stored string.
    pub fn to_rgb(&self) -> ProkitResult<Rgb8> {
        parse_hex(&self.0).map_err(ProkitError::validation)
    }

    /// Parse the stored string, substituting `fallback` when it is malformed.
    pub fn resolve_or(&self, fallback: Rgb8) -> Rgb8 {
        match parse_hex(&self.0) {
            Ok(rgb) => rgb,
            Err(e) => {
                tracing::warn!(color = %self.0, fallback = %fallback, "{e}; using fallback");
                fallback
            }
        }
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Rgb8> for HexColor {
    fn from(rgb: Rgb8) -> Self {
        Self::from_rgb(rgb)
    }
}

impl std::str::FromStr for HexColor {
    type Err = ProkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_hex(s: &str) -> Result<Rgb8, String> {
    let s = s.trim();
    let Some(digits) = s.strip_prefix('#') else {
        return Err(format!("color \"{s}\" must start with '#'"));
    };
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!(
            "color \"{s}\" must be #RRGGBB (case-insensitive, 6 hex digits)"
        ));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    Ok(Rgb8::new(
        hex_byte(&digits[0..2])?,
        hex_byte(&digits[2..4])?,
        hex_byte(&digits[4..6])?,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/design/color.rs"]
mod tests;
