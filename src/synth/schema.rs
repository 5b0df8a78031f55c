use serde_json::json;

use crate::design::config::{CollarType, Pattern};

/// The six fields a synthesized design must contain, in wire spelling.
pub const SYNTHESIZED_FIELDS: [&str; 6] = [
    "primaryColor",
    "secondaryColor",
    "accentColor",
    "textColor",
    "pattern",
    "collarType",
];

/// MIME type requested from the model.
pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// Instruction text for a theme.
pub fn design_prompt(theme: &str) -> String {
    format!(
        "Design a soccer jersey based on this theme: \"{theme}\". \
         Respond with a JSON object containing primaryColor, secondaryColor, accentColor, \
         textColor, pattern (one of: {}), and collarType (one of: {}).",
        join(Pattern::ALL.iter().map(|p| p.as_str())),
        join(CollarType::ALL.iter().map(|c| c.as_str())),
    )
}

/// Structured-output schema: an object with six required string properties, the two
/// enumerations constrained to their declared members.
pub fn design_schema() -> serde_json::Value {
    let patterns: Vec<&str> = Pattern::ALL.iter().map(|p| p.as_str()).collect();
    let collars: Vec<&str> = CollarType::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "primaryColor": { "type": "STRING" },
            "secondaryColor": { "type": "STRING" },
            "accentColor": { "type": "STRING" },
            "textColor": { "type": "STRING" },
            "pattern": { "type": "STRING", "enum": patterns },
            "collarType": { "type": "STRING", "enum": collars },
        },
        "required": SYNTHESIZED_FIELDS,
    })
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/synth/schema.rs"]
mod tests;
