/// Stable scene hashing.
pub mod fingerprint;
/// Declarative scene graph.
pub mod model;
