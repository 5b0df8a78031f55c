use std::sync::Arc;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{ProkitError, ProkitResult};

const MAX_DIM: u32 = 16_384;

/// Raster output settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterOpts {
    /// Output width in pixels; height follows the document's aspect ratio.
    pub width: u32,
    /// Opaque fill behind the drawing. `None` keeps the background transparent.
    pub background: Option<Rgb8>,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            width: 974,
            background: None,
        }
    }
}

/// Rasterize an SVG document into PNG bytes.
///
/// The drawing is scaled uniformly so its width matches `opts.width`.
#[tracing::instrument(level = "debug", skip(svg), fields(width = opts.width))]
pub fn rasterize_png(svg: &str, opts: RasterOpts) -> ProkitResult<Vec<u8>> {
    if opts.width == 0 || opts.width > MAX_DIM {
        return Err(ProkitError::validation(format!(
            "raster width must be in 1..={MAX_DIM}, got {}",
            opts.width
        )));
    }

    let tree = parse_svg(svg)?;
    let size = tree.size();
    if !(size.width().is_finite() && size.height().is_finite()) || size.width() <= 0.0 {
        return Err(ProkitError::evaluation("svg has invalid width/height"));
    }

    let scale = opts.width as f32 / size.width();
    let height = (size.height() * scale).round().max(1.0) as u32;
    if height > MAX_DIM {
        return Err(ProkitError::validation(format!(
            "raster size too large: {}x{height} (max {MAX_DIM}x{MAX_DIM})",
            opts.width
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(opts.width, height)
        .ok_or_else(|| ProkitError::evaluation("failed to allocate raster pixmap"))?;
    if let Some(bg) = opts.background {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));
    }

    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| ProkitError::evaluation(format!("encode png: {e}")))?;
    tracing::debug!(height, bytes = png.len(), "rasterized");
    Ok(png)
}

fn parse_svg(svg: &str) -> ProkitResult<usvg::Tree> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    };
    usvg::Tree::from_str(svg, &opts)
        .map_err(|e| ProkitError::evaluation(format!("parse svg tree: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
