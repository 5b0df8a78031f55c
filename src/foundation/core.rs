use crate::foundation::error::{ProkitError, ProkitResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Straight (non-premultiplied) 8-bit sRGB color without alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque black.
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Lower-case `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fixed design-space bounding box every scene coordinate lives in.
///
/// The engine never scales to a viewport; consumers call [`ViewBox::fit`] to get the uniform,
/// aspect-preserving transform for their display surface.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewBox {
    /// Width in design units.
    pub width: f64,
    /// Height in design units.
    pub height: f64,
}

impl ViewBox {
    /// Create a validated view box with strictly positive, finite extents.
    pub fn new(width: f64, height: f64) -> ProkitResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ProkitError::validation(
                "ViewBox width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Uniform scale + centering transform mapping the view box into a `target_w x target_h`
    /// surface while preserving aspect ratio (SVG `xMidYMid meet`).
    pub fn fit(self, target_w: f64, target_h: f64) -> Affine {
        let s = (target_w / self.width).min(target_h / self.height).max(0.0);
        let dx = (target_w - self.width * s) * 0.5;
        let dy = (target_h - self.height * s) * 0.5;
        Affine::translate(Vec2::new(dx, dy)) * Affine::scale(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
