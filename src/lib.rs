//! ProKit turns a jersey design configuration into a deterministic vector scene.
//!
//! - Describe a design with [`DesignConfiguration`] and edit it with [`DesignEdit`]
//! - [`render()`] it into a [`VectorScene`], then serialize with [`to_svg`] or [`rasterize_png`]
//! - Ask a generative model for a themed palette with [`Synthesizer`] and
//!   [`DesignConfiguration::merge`] the result
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Design configuration model.
pub mod design;
/// Configuration to scene, scene to SVG/PNG.
pub mod render;
/// Boundary scene model.
pub mod scene;
/// AI-assisted configuration synthesis.
pub mod synth;

pub use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgb8, Vec2, ViewBox};
pub use crate::foundation::error::{ProkitError, ProkitResult};

pub use crate::design::color::HexColor;
pub use crate::design::config::{
    CollarType, DesignConfiguration, DesignEdit, MAX_NUMBER_CHARS, PartialDesignConfiguration,
    Pattern, ViewMode,
};
pub use crate::render::engine::{Palette, render};
pub use crate::render::raster::{RasterOpts, rasterize_png};
pub use crate::render::svg::to_svg;
pub use crate::scene::fingerprint::SceneFingerprint;
pub use crate::scene::model::{Paint, SceneNode, VectorScene, Visibility};
pub use crate::synth::gemini::{GeminiConfig, GeminiProvider};
pub use crate::synth::provider::{GenerationRequest, GenerativeProvider};
pub use crate::synth::synthesizer::Synthesizer;
