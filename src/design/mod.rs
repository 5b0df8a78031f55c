/// Validated color strings.
pub mod color;
/// The design configuration value and its edits.
pub mod config;
