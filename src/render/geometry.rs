//! Fixed design-space geometry shared by every jersey.
//!
//! All coordinates live in a 974 x 872 box with the neckline touching `y = 0`.

use crate::foundation::core::{BezPath, Point, Rect, Rgb8};
use crate::scene::model::DropShadow;
use std::sync::LazyLock;

/// Design-space width.
pub const DESIGN_WIDTH: f64 = 974.0;
/// Design-space height.
pub const DESIGN_HEIGHT: f64 = 872.0;

/// Horizontal center line of the body.
pub const CENTER_X: f64 = 487.0;

/// Collar interior backing color (slate-900).
pub const COLLAR_BACKING: Rgb8 = Rgb8::new(0x0f, 0x17, 0x2a);

pub(crate) const SHADOW_OFFSET: (f64, f64) = (4.0, 4.0);
pub(crate) const SHADOW_OPACITY: f64 = 0.1;

pub(crate) const PATTERN_TILE: f64 = 100.0;
pub(crate) const PATTERN_BAND: f64 = 50.0;

pub(crate) const COLLAR_RIM_WIDTH: f64 = 16.0;
pub(crate) const POLO_FLAP_STROKE_WIDTH: f64 = 4.0;
pub(crate) const SEAM_WIDTH: f64 = 4.0;
pub(crate) const SEAM_DASH: [f64; 2] = [4.0, 4.0];
pub(crate) const SEAM_OPACITY: f64 = 0.4;

pub(crate) const CREST_ORIGIN: (f64, f64) = (320.0, 260.0);
pub(crate) const CREST_RADIUS: f64 = 45.0;
pub(crate) const CREST_STROKE_WIDTH: f64 = 5.0;
pub(crate) const CREST_MARK_HALF: f64 = 18.0;

pub(crate) const FRONT_NUMBER_AT: Point = Point::new(630.0, 280.0);
pub(crate) const FRONT_NUMBER_SIZE: f64 = 72.0;
pub(crate) const FRONT_NUMBER_SHADOW: DropShadow = DropShadow {
    dx: 0.0,
    dy: 2.0,
    blur: 2.0,
    opacity: 0.2,
};

pub(crate) const SPONSOR_RECT: Rect = Rect::new(337.0, 440.0, 637.0, 530.0);
pub(crate) const SPONSOR_RADIUS: f64 = 12.0;
pub(crate) const SPONSOR_OPACITY: f64 = 0.1;
pub(crate) const SPONSOR_LABEL: &str = "SPONSOR";
pub(crate) const SPONSOR_LABEL_AT: Point = Point::new(CENTER_X, 495.0);
pub(crate) const SPONSOR_LABEL_SIZE: f64 = 38.0;
pub(crate) const SPONSOR_LABEL_SPACING: f64 = 6.0;
pub(crate) const SPONSOR_LABEL_OPACITY: f64 = 0.7;

pub(crate) const BACK_NAME_AT: Point = Point::new(CENTER_X, 230.0);
pub(crate) const BACK_NAME_SIZE: f64 = 52.0;
pub(crate) const BACK_NAME_SPACING: f64 = 10.0;
pub(crate) const BACK_NAME_SHADOW: DropShadow = DropShadow {
    dx: 0.0,
    dy: 2.0,
    blur: 4.0,
    opacity: 0.3,
};

pub(crate) const BACK_NUMBER_AT: Point = Point::new(CENTER_X, 580.0);
pub(crate) const BACK_NUMBER_SIZE: f64 = 340.0;
pub(crate) const BACK_NUMBER_SHADOW: DropShadow = DropShadow {
    dx: 0.0,
    dy: 4.0,
    blur: 10.0,
    opacity: 0.4,
};

pub(crate) const HEM_WIDTH: f64 = 12.0;
pub(crate) const HEM_OPACITY: f64 = 0.9;

#[derive(Clone, Copy)]
enum Seg {
    Move(f64, f64),
    Line(f64, f64),
    Cubic([f64; 6]),
    Close,
}

// Jersey body outline, clockwise from the right sleeve cuff.
const SILHOUETTE: &[Seg] = &[
    Seg::Move(970.914, 355.684),
    Seg::Cubic([967.508, 358.951, 886.81, 436.187, 832.002, 471.655]),
    Seg::Cubic([828.345, 474.019, 823.534, 473.379, 820.629, 470.139]),
    Seg::Cubic([820.128, 469.583, 775.539, 419.835, 734.634, 370.741]),
    Seg::Line(734.634, 849.46),
    Seg::Cubic([734.634, 853.951, 731.255, 857.733, 726.792, 858.233]),
    Seg::Cubic([725.596, 858.372, 605.969, 871.567, 486.814, 871.567]),
    Seg::Cubic([367.659, 871.567, 248.045, 858.372, 246.85, 858.233]),
    Seg::Cubic([242.373, 857.733, 238.995, 853.951, 238.995, 849.46]),
    Seg::Line(238.995, 370.742),
    Seg::Cubic([198.104, 419.836, 153.515, 469.583, 153.014, 470.14]),
    Seg::Cubic([150.108, 473.38, 145.284, 474.019, 141.641, 471.656]),
    Seg::Cubic([86.8328, 436.188, 6.1208, 358.952, 2.7148, 355.685]),
    Seg::Cubic([-0.0941958, 352.988, -0.803149, 348.775, 0.962851, 345.299]),
    Seg::Cubic([5.46785, 336.442, 111.929, 127.817, 161.064, 90.6941]),
    Seg::Cubic([210.784, 53.1261, 371.01, 2.141, 377.809, 0.0]),
    Seg::Cubic([383.0, 0.0, 383.0, 0.0, 388.5, 0.0]),
    Seg::Cubic([391.0, 0.0, 392.5, 0.0, 409.0, 0.0]),
    Seg::Cubic([434.0, 0.0844116, 453.913, 0.0, 483.5, 0.0]),
    Seg::Cubic([513.087, 0.0, 513.5, 0.0, 547.5, 0.0]),
    Seg::Cubic([571.5, 0.0, 575.5, 0.0, 581.0, 0.0]),
    Seg::Cubic([588.0, 0.0, 592.5, 0.0, 595.819, 0.0]),
    Seg::Cubic([602.618, 2.141, 762.858, 53.1261, 812.578, 90.6941]),
    Seg::Cubic([861.7, 127.817, 968.174, 336.442, 972.679, 345.299]),
    Seg::Cubic([974.446, 348.774, 973.723, 352.987, 970.914, 355.684]),
    Seg::Close,
];

fn build(segs: &[Seg]) -> BezPath {
    let mut p = BezPath::new();
    for seg in segs {
        match *seg {
            Seg::Move(x, y) => p.move_to((x, y)),
            Seg::Line(x, y) => p.line_to((x, y)),
            Seg::Cubic([x1, y1, x2, y2, x, y]) => p.curve_to((x1, y1), (x2, y2), (x, y)),
            Seg::Close => p.close_path(),
        }
    }
    p
}

static SILHOUETTE_PATH: LazyLock<BezPath> = LazyLock::new(|| build(SILHOUETTE));

/// Closed outline of the jersey body.
pub fn silhouette() -> &'static BezPath {
    &SILHOUETTE_PATH
}

const NECK_LEFT: (f64, f64) = (378.0, 1.0);
const NECK_RIGHT: (f64, f64) = (596.0, 1.0);
const V_TIP: (f64, f64) = (CENTER_X, 165.0);

/// Open curve of the round neckline.
pub(crate) fn round_rim() -> BezPath {
    let mut p = BezPath::new();
    p.move_to(NECK_LEFT);
    p.quad_to((CENTER_X, 145.0), NECK_RIGHT);
    p
}

/// Open V of the v-neck and polo necklines.
pub(crate) fn v_rim() -> BezPath {
    let mut p = BezPath::new();
    p.move_to(NECK_LEFT);
    p.line_to(V_TIP);
    p.line_to(NECK_RIGHT);
    p
}

fn close_to_top_edge(mut rim: BezPath) -> BezPath {
    rim.line_to((NECK_RIGHT.0, 0.0));
    rim.line_to((NECK_LEFT.0, 0.0));
    rim.close_path();
    rim
}

/// Interior shape behind the round rim.
pub(crate) fn round_backing() -> BezPath {
    close_to_top_edge(round_rim())
}

/// Interior shape behind the V rim.
pub(crate) fn v_backing() -> BezPath {
    close_to_top_edge(v_rim())
}

/// Folded polo flaps around the V.
pub(crate) fn polo_flaps() -> BezPath {
    let mut p = BezPath::new();
    p.move_to(NECK_LEFT);
    p.line_to((315.0, 75.0));
    p.line_to(V_TIP);
    p.line_to((655.0, 75.0));
    p.line_to(NECK_RIGHT);
    p
}

/// Shallow dashed neckline seen from behind.
pub(crate) fn back_seam() -> BezPath {
    let mut p = BezPath::new();
    p.move_to(NECK_LEFT);
    p.quad_to((CENTER_X, 30.0), NECK_RIGHT);
    p
}

/// Bottom hem trim.
pub(crate) fn hem() -> BezPath {
    let mut p = BezPath::new();
    p.move_to((246.0, 858.0));
    p.quad_to((CENTER_X, 872.0), (726.0, 858.0));
    p
}

/// X mark inside the crest, centered on the crest origin.
pub(crate) fn crest_mark() -> BezPath {
    let h = CREST_MARK_HALF;
    let mut p = BezPath::new();
    p.move_to((-h, -h));
    p.line_to((h, h));
    p.move_to((-h, h));
    p.line_to((h, -h));
    p
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
