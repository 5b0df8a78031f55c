//! Configuration to vector scene.
//!
//! [`render`] is pure and total: it never fails, holds no state between calls, and returns equal
//! scenes for equal configurations. Every node it can emit is present in every scene; the
//! configuration only selects paints, text, and visibility flags.

use crate::design::config::{
    CollarType, DEFAULT_ACCENT, DEFAULT_PRIMARY, DEFAULT_SECONDARY, DEFAULT_TEXT,
    DesignConfiguration, Pattern, ViewMode,
};
use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgb8, Vec2, ViewBox};
use crate::render::geometry::{self as geo, DESIGN_HEIGHT, DESIGN_WIDTH};
use crate::scene::model::{
    ClipDef, DropShadow, GradientStop, NodeId, Paint, PaintDef, PaintDefKind, SceneMeta, SceneNode,
    ShadowDef, Stroke, TextRun, TileCell, VectorScene, Visibility,
};

/// Node and definition ids emitted by [`render`].
#[allow(missing_docs)]
pub mod ids {
    use crate::scene::model::NodeId;

    pub const SOLID_FILL: NodeId = "solid-fill";
    pub const STRIPES_FILL: NodeId = "stripes-pattern";
    pub const HOOPS_FILL: NodeId = "hoops-pattern";
    pub const GRADIENT_FILL: NodeId = "gradient-pattern";
    pub const HALF_FILL: NodeId = "half-pattern";
    pub const SHIRT_CLIP: NodeId = "shirt-clip";
    pub const FRONT_NUMBER_SHADOW: NodeId = "front-number-shadow";
    pub const BACK_NAME_SHADOW: NodeId = "back-name-shadow";
    pub const BACK_NUMBER_SHADOW: NodeId = "back-number-shadow";

    pub const SHADOW: NodeId = "shadow";
    pub const BODY: NodeId = "body";

    pub const COLLAR_SYSTEM: NodeId = "collar-system";
    pub const COLLAR_ROUND: NodeId = "collar-round";
    pub const COLLAR_ROUND_BACKING: NodeId = "collar-round-backing";
    pub const COLLAR_ROUND_RIM: NodeId = "collar-round-rim";
    pub const COLLAR_V_NECK: NodeId = "collar-v-neck";
    pub const COLLAR_V_NECK_BACKING: NodeId = "collar-v-neck-backing";
    pub const COLLAR_V_NECK_RIM: NodeId = "collar-v-neck-rim";
    pub const COLLAR_POLO: NodeId = "collar-polo";
    pub const COLLAR_POLO_BACKING: NodeId = "collar-polo-backing";
    pub const COLLAR_POLO_RIM: NodeId = "collar-polo-rim";
    pub const COLLAR_POLO_FLAPS: NodeId = "collar-polo-flaps";
    pub const BACK_SEAM: NodeId = "back-seam";

    pub const DECORATION: NodeId = "decoration";
    pub const FRONT_LAYER: NodeId = "front-layer";
    pub const CREST: NodeId = "crest";
    pub const CREST_BADGE: NodeId = "crest-badge";
    pub const CREST_MARK: NodeId = "crest-mark";
    pub const FRONT_NUMBER: NodeId = "front-number";
    pub const SPONSOR: NodeId = "sponsor";
    pub const SPONSOR_LABEL: NodeId = "sponsor-label";
    pub const BACK_LAYER: NodeId = "back-layer";
    pub const BACK_NAME: NodeId = "back-name";
    pub const BACK_NUMBER: NodeId = "back-number";

    pub const HEM: NodeId = "hem";

    /// All pattern fill definitions, in emission order.
    pub const SURFACE_FILLS: [NodeId; 5] =
        [SOLID_FILL, STRIPES_FILL, HOOPS_FILL, GRADIENT_FILL, HALF_FILL];

    /// All collar variant groups, in emission order.
    pub const COLLAR_VARIANTS: [NodeId; 3] = [COLLAR_ROUND, COLLAR_V_NECK, COLLAR_POLO];

    /// Both view-layer groups.
    pub const VIEW_LAYERS: [NodeId; 2] = [FRONT_LAYER, BACK_LAYER];
}

/// The four configuration colors, resolved to concrete values.
///
/// Malformed strings resolve to the default configuration's color for the same slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Body color.
    pub primary: Rgb8,
    /// Second pattern color, crest detail, polo flap outline.
    pub secondary: Rgb8,
    /// Collar rim, crest, seam, hem.
    pub accent: Rgb8,
    /// Number, name, sponsor.
    pub text: Rgb8,
}

impl Palette {
    /// Resolve a configuration's colors.
    pub fn resolve(config: &DesignConfiguration) -> Self {
        Self {
            primary: config.primary_color.resolve_or(DEFAULT_PRIMARY),
            secondary: config.secondary_color.resolve_or(DEFAULT_SECONDARY),
            accent: config.accent_color.resolve_or(DEFAULT_ACCENT),
            text: config.text_color.resolve_or(DEFAULT_TEXT),
        }
    }
}

/// The fixed design-space box.
pub fn design_view_box() -> ViewBox {
    ViewBox {
        width: DESIGN_WIDTH,
        height: DESIGN_HEIGHT,
    }
}

/// Fill definition used for a pattern.
///
/// `Chevron` has no dedicated fill yet and shares the solid one.
pub fn surface_fill_id(pattern: Pattern) -> NodeId {
    match pattern {
        Pattern::Solid | Pattern::Chevron => ids::SOLID_FILL,
        Pattern::Stripes => ids::STRIPES_FILL,
        Pattern::Hoops => ids::HOOPS_FILL,
        Pattern::Gradient => ids::GRADIENT_FILL,
        Pattern::Half => ids::HALF_FILL,
    }
}

/// Collar group id for a collar type.
pub fn collar_variant_id(collar: CollarType) -> NodeId {
    match collar {
        CollarType::Round => ids::COLLAR_ROUND,
        CollarType::VNeck => ids::COLLAR_V_NECK,
        CollarType::Polo => ids::COLLAR_POLO,
    }
}

/// View-layer group id for a view.
pub fn view_layer_id(view: ViewMode) -> NodeId {
    match view {
        ViewMode::Front => ids::FRONT_LAYER,
        ViewMode::Back => ids::BACK_LAYER,
    }
}

/// Render a configuration into a complete vector scene.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(pattern = %config.pattern, collar = %config.collar_type, view = %config.view)
)]
pub fn render(config: &DesignConfiguration) -> VectorScene {
    let palette = Palette::resolve(config);

    let scene = VectorScene {
        view_box: design_view_box(),
        meta: SceneMeta {
            view: config.view,
            pattern: config.pattern,
            collar: config.collar_type,
            badge: config.view.badge_label(),
        },
        paints: surface_paints(&palette),
        clips: vec![ClipDef {
            id: ids::SHIRT_CLIP,
            path: geo::silhouette().clone(),
        }],
        shadows: text_shadows(),
        nodes: vec![
            shadow(),
            body(config.pattern),
            collar_system(config.collar_type, config.view, &palette),
            back_seam(config.view, &palette),
            decoration(config, &palette),
            hem(&palette),
        ],
    };

    tracing::debug!(fill = surface_fill_id(config.pattern), "scene rendered");
    scene
}

fn surface_paints(p: &Palette) -> Vec<PaintDef> {
    let tile = Rect::new(0.0, 0.0, geo::PATTERN_TILE, geo::PATTERN_TILE);
    let band = geo::PATTERN_BAND;

    vec![
        PaintDef {
            id: ids::SOLID_FILL,
            kind: PaintDefKind::Flat { color: p.primary },
        },
        PaintDef {
            id: ids::STRIPES_FILL,
            kind: PaintDefKind::Tile {
                tile,
                cells: vec![
                    TileCell {
                        rect: Rect::new(0.0, 0.0, band, tile.y1),
                        color: p.primary,
                    },
                    TileCell {
                        rect: Rect::new(band, 0.0, tile.x1, tile.y1),
                        color: p.secondary,
                    },
                ],
            },
        },
        PaintDef {
            id: ids::HOOPS_FILL,
            kind: PaintDefKind::Tile {
                tile,
                cells: vec![
                    TileCell {
                        rect: Rect::new(0.0, 0.0, tile.x1, band),
                        color: p.primary,
                    },
                    TileCell {
                        rect: Rect::new(0.0, band, tile.x1, tile.y1),
                        color: p.secondary,
                    },
                ],
            },
        },
        PaintDef {
            id: ids::GRADIENT_FILL,
            kind: PaintDefKind::LinearGradient {
                start: Point::new(0.0, 0.0),
                end: Point::new(0.0, 1.0),
                stops: vec![
                    GradientStop {
                        offset: 0.0,
                        color: p.primary,
                    },
                    GradientStop {
                        offset: 1.0,
                        color: p.secondary,
                    },
                ],
            },
        },
        // Two coincident stops give a hard edge.
        PaintDef {
            id: ids::HALF_FILL,
            kind: PaintDefKind::LinearGradient {
                start: Point::new(0.0, 0.0),
                end: Point::new(1.0, 0.0),
                stops: vec![
                    GradientStop {
                        offset: 0.5,
                        color: p.primary,
                    },
                    GradientStop {
                        offset: 0.5,
                        color: p.secondary,
                    },
                ],
            },
        },
    ]
}

fn text_shadows() -> Vec<ShadowDef> {
    let def = |id, shadow: DropShadow| ShadowDef { id, shadow };
    vec![
        def(ids::FRONT_NUMBER_SHADOW, geo::FRONT_NUMBER_SHADOW),
        def(ids::BACK_NAME_SHADOW, geo::BACK_NAME_SHADOW),
        def(ids::BACK_NUMBER_SHADOW, geo::BACK_NUMBER_SHADOW),
    ]
}

fn shadow() -> SceneNode {
    let (dx, dy) = geo::SHADOW_OFFSET;
    SceneNode::path(
        ids::SHADOW,
        geo::silhouette().clone(),
        Paint::Solid(Rgb8::black()),
        None,
    )
    .opacity(geo::SHADOW_OPACITY)
    .transform(Affine::translate(Vec2::new(dx, dy)))
}

fn body(pattern: Pattern) -> SceneNode {
    SceneNode::path(
        ids::BODY,
        geo::silhouette().clone(),
        Paint::Def(surface_fill_id(pattern)),
        None,
    )
}

fn backing(id: NodeId, path: BezPath) -> SceneNode {
    SceneNode::path(id, path, Paint::Solid(geo::COLLAR_BACKING), None)
}

fn rim(id: NodeId, path: BezPath, accent: Rgb8) -> SceneNode {
    SceneNode::path(
        id,
        path,
        Paint::None,
        Some(Stroke::rounded(accent, geo::COLLAR_RIM_WIDTH)),
    )
}

fn collar_variant(kind: CollarType, selected: CollarType, p: &Palette) -> SceneNode {
    let children = match kind {
        CollarType::Round => vec![
            backing(ids::COLLAR_ROUND_BACKING, geo::round_backing()),
            rim(ids::COLLAR_ROUND_RIM, geo::round_rim(), p.accent),
        ],
        CollarType::VNeck => vec![
            backing(ids::COLLAR_V_NECK_BACKING, geo::v_backing()),
            rim(ids::COLLAR_V_NECK_RIM, geo::v_rim(), p.accent),
        ],
        CollarType::Polo => vec![
            backing(ids::COLLAR_POLO_BACKING, geo::v_backing()),
            rim(ids::COLLAR_POLO_RIM, geo::v_rim(), p.accent),
            SceneNode::path(
                ids::COLLAR_POLO_FLAPS,
                geo::polo_flaps(),
                Paint::Solid(p.accent),
                Some(Stroke::solid(p.secondary, geo::POLO_FLAP_STROKE_WIDTH)),
            ),
        ],
    };

    SceneNode::group(collar_variant_id(kind), children)
        .visibility(Visibility::collapsed_unless(kind == selected))
}

// Collars are not drawn from behind; the subtree fades out instead of being removed so that
// flipping the view never rebuilds geometry.
fn collar_system(selected: CollarType, view: ViewMode, p: &Palette) -> SceneNode {
    let variants = CollarType::ALL
        .into_iter()
        .map(|kind| collar_variant(kind, selected, p))
        .collect();

    let opacity = match view {
        ViewMode::Front => 1.0,
        ViewMode::Back => 0.0,
    };
    SceneNode::group(ids::COLLAR_SYSTEM, variants).opacity(opacity)
}

fn back_seam(view: ViewMode, p: &Palette) -> SceneNode {
    SceneNode::path(
        ids::BACK_SEAM,
        geo::back_seam(),
        Paint::None,
        Some(Stroke::solid(p.accent, geo::SEAM_WIDTH).dashed(&geo::SEAM_DASH)),
    )
    .opacity(geo::SEAM_OPACITY)
    .visibility(Visibility::collapsed_unless(view == ViewMode::Back))
}

fn label(content: String, anchor: Point, size: f64, weight: u16, color: Rgb8) -> TextRun {
    TextRun {
        content,
        anchor,
        size,
        weight,
        letter_spacing: 0.0,
        fill: Paint::Solid(color),
        shadow: None,
    }
}

fn crest(show: bool, p: &Palette) -> SceneNode {
    let (x, y) = geo::CREST_ORIGIN;
    SceneNode::group(
        ids::CREST,
        vec![
            SceneNode::circle(
                ids::CREST_BADGE,
                Point::ORIGIN,
                geo::CREST_RADIUS,
                Paint::Solid(p.accent),
                Some(Stroke::solid(p.secondary, geo::CREST_STROKE_WIDTH)),
            ),
            SceneNode::path(
                ids::CREST_MARK,
                geo::crest_mark(),
                Paint::None,
                Some(Stroke::rounded(p.secondary, geo::CREST_STROKE_WIDTH)),
            ),
        ],
    )
    .transform(Affine::translate(Vec2::new(x, y)))
    .visibility(Visibility::hidden_unless(show))
}

fn front_layer(config: &DesignConfiguration, p: &Palette) -> SceneNode {
    let sponsor_label = TextRun {
        letter_spacing: geo::SPONSOR_LABEL_SPACING,
        ..label(
            geo::SPONSOR_LABEL.to_owned(),
            geo::SPONSOR_LABEL_AT,
            geo::SPONSOR_LABEL_SIZE,
            900,
            p.text,
        )
    };

    SceneNode::group(
        ids::FRONT_LAYER,
        vec![
            crest(config.show_crest, p),
            SceneNode::text(
                ids::FRONT_NUMBER,
                TextRun {
                    shadow: Some(ids::FRONT_NUMBER_SHADOW),
                    ..label(
                        config.display_number(),
                        geo::FRONT_NUMBER_AT,
                        geo::FRONT_NUMBER_SIZE,
                        900,
                        p.text,
                    )
                },
            ),
            SceneNode::rect(
                ids::SPONSOR,
                geo::SPONSOR_RECT,
                geo::SPONSOR_RADIUS,
                Paint::Solid(p.text),
            )
            .opacity(geo::SPONSOR_OPACITY),
            SceneNode::text(ids::SPONSOR_LABEL, sponsor_label).opacity(geo::SPONSOR_LABEL_OPACITY),
        ],
    )
    .visibility(Visibility::collapsed_unless(config.view == ViewMode::Front))
}

fn back_layer(config: &DesignConfiguration, p: &Palette) -> SceneNode {
    let name = TextRun {
        letter_spacing: geo::BACK_NAME_SPACING,
        shadow: Some(ids::BACK_NAME_SHADOW),
        ..label(
            config.display_name(),
            geo::BACK_NAME_AT,
            geo::BACK_NAME_SIZE,
            800,
            p.text,
        )
    };

    SceneNode::group(
        ids::BACK_LAYER,
        vec![
            SceneNode::text(ids::BACK_NAME, name),
            SceneNode::text(
                ids::BACK_NUMBER,
                TextRun {
                    shadow: Some(ids::BACK_NUMBER_SHADOW),
                    ..label(
                        config.display_number(),
                        geo::BACK_NUMBER_AT,
                        geo::BACK_NUMBER_SIZE,
                        900,
                        p.text,
                    )
                },
            ),
        ],
    )
    .visibility(Visibility::collapsed_unless(config.view == ViewMode::Back))
}

fn decoration(config: &DesignConfiguration, p: &Palette) -> SceneNode {
    SceneNode::group(
        ids::DECORATION,
        vec![front_layer(config, p), back_layer(config, p)],
    )
    .clip(ids::SHIRT_CLIP)
}

fn hem(p: &Palette) -> SceneNode {
    SceneNode::path(
        ids::HEM,
        geo::hem(),
        Paint::None,
        Some(Stroke::rounded(p.accent, geo::HEM_WIDTH)),
    )
    .opacity(geo::HEM_OPACITY)
}

#[cfg(test)]
#[path = "../../tests/unit/render/engine.rs"]
mod tests;
