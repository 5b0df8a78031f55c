pub mod engine;
/// Fixed design-space geometry.
pub mod geometry;
/// SVG to PNG.
pub mod raster;
pub mod svg;
