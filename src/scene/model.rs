use crate::design::config::{CollarType, Pattern, ViewMode};
use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgb8, ViewBox};
use serde::Serialize;

/// Stable identifier of a scene node or definition.
pub type NodeId = &'static str;

/// Declarative output of the rendering engine.
///
/// Every node the engine can produce is always present; configuration changes only flip
/// [`Visibility`], opacity, paints, and text content. Definitions (`paints`, `clips`) are emitted
/// once and referenced by id.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VectorScene {
    /// Design-space coordinate box.
    pub view_box: ViewBox,
    /// Which variants were selected.
    pub meta: SceneMeta,
    /// Reusable fills referenced through [`Paint::Def`].
    pub paints: Vec<PaintDef>,
    /// Reusable clip regions referenced through [`SceneNode::clip`].
    pub clips: Vec<ClipDef>,
    /// Drop-shadow filters referenced through [`TextRun::shadow`].
    pub shadows: Vec<ShadowDef>,
    /// Top-level nodes in painter's order.
    pub nodes: Vec<SceneNode>,
}

/// Selection summary attached to a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SceneMeta {
    /// Displayed side.
    pub view: ViewMode,
    /// Selected body pattern.
    pub pattern: Pattern,
    /// Selected collar.
    pub collar: CollarType,
    /// Badge text for the displayed side.
    pub badge: &'static str,
}

/// Display state of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Painted.
    Visible,
    /// Not painted, still occupies layout.
    Hidden,
    /// Not painted, no layout; kept as an inert definition.
    Collapsed,
}

impl Visibility {
    /// `Visible` when `on`, otherwise `Hidden`.
    pub fn hidden_unless(on: bool) -> Self {
        if on { Self::Visible } else { Self::Hidden }
    }

    /// `Visible` when `on`, otherwise `Collapsed`.
    pub fn collapsed_unless(on: bool) -> Self {
        if on { Self::Visible } else { Self::Collapsed }
    }
}

/// One node in the scene tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneNode {
    /// Unique id within the scene.
    pub id: NodeId,
    /// Display state.
    pub visibility: Visibility,
    /// Opacity multiplier in `[0, 1]`.
    pub opacity: f64,
    /// Local-to-parent transform.
    pub transform: Affine,
    /// Optional clip region id (see [`VectorScene::clips`]).
    pub clip: Option<NodeId>,
    /// Payload.
    pub kind: NodeKind,
}

impl SceneNode {
    fn with_kind(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            visibility: Visibility::Visible,
            opacity: 1.0,
            transform: Affine::IDENTITY,
            clip: None,
            kind,
        }
    }

    /// Group node.
    pub fn group(id: NodeId, children: Vec<SceneNode>) -> Self {
        Self::with_kind(id, NodeKind::Group { children })
    }

    /// Path node.
    pub fn path(id: NodeId, path: BezPath, fill: Paint, stroke: Option<Stroke>) -> Self {
        Self::with_kind(id, NodeKind::Path { path, fill, stroke })
    }

    /// Circle node.
    pub fn circle(id: NodeId, center: Point, radius: f64, fill: Paint, stroke: Option<Stroke>) -> Self {
        Self::with_kind(
            id,
            NodeKind::Circle {
                center,
                radius,
                fill,
                stroke,
            },
        )
    }

    /// Rounded-rectangle node.
    pub fn rect(id: NodeId, rect: Rect, corner_radius: f64, fill: Paint) -> Self {
        Self::with_kind(
            id,
            NodeKind::Rect {
                rect,
                corner_radius,
                fill,
            },
        )
    }

    /// Text node.
    pub fn text(id: NodeId, run: TextRun) -> Self {
        Self::with_kind(id, NodeKind::Text(run))
    }

    /// Set visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Set opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Set local transform.
    pub fn transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Clip this node (and its subtree) by a clip definition.
    pub fn clip(mut self, clip: NodeId) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Child nodes (empty for leaves).
    pub fn children(&self) -> &[SceneNode] {
        match &self.kind {
            NodeKind::Group { children } => children,
            _ => &[],
        }
    }
}

/// Node payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Container.
    Group {
        /// Children in painter's order.
        children: Vec<SceneNode>,
    },
    /// Arbitrary vector path.
    Path {
        /// Geometry.
        path: BezPath,
        /// Interior paint.
        fill: Paint,
        /// Optional outline.
        stroke: Option<Stroke>,
    },
    /// Circle.
    Circle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f64,
        /// Interior paint.
        fill: Paint,
        /// Optional outline.
        stroke: Option<Stroke>,
    },
    /// Rounded rectangle.
    Rect {
        /// Bounds.
        rect: Rect,
        /// Corner radius.
        corner_radius: f64,
        /// Interior paint.
        fill: Paint,
    },
    /// Single line of text.
    Text(TextRun),
}

/// How an area is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Paint {
    /// Nothing.
    None,
    /// Flat color.
    Solid(Rgb8),
    /// Reference to a [`PaintDef`] by id.
    Def(NodeId),
}

/// Line cap style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat end at the endpoint.
    Butt,
    /// Half-disc end.
    Round,
}

/// Outline style.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    /// Outline color.
    pub color: Rgb8,
    /// Width in design units.
    pub width: f64,
    /// End cap.
    pub cap: LineCap,
    /// Dash pattern; empty for a solid line.
    pub dash: Vec<f64>,
}

impl Stroke {
    /// Solid outline with butt caps.
    pub fn solid(color: Rgb8, width: f64) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
            dash: Vec::new(),
        }
    }

    /// Solid outline with round caps.
    pub fn rounded(color: Rgb8, width: f64) -> Self {
        Self {
            cap: LineCap::Round,
            ..Self::solid(color, width)
        }
    }

    /// Replace the dash pattern.
    pub fn dashed(mut self, dash: &[f64]) -> Self {
        self.dash = dash.to_vec();
        self
    }
}

/// A positioned run of text, centered on its anchor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextRun {
    /// Characters to draw.
    pub content: String,
    /// Baseline anchor.
    pub anchor: Point,
    /// Font size in design units.
    pub size: f64,
    /// CSS-style weight (100..=900).
    pub weight: u16,
    /// Extra spacing between glyphs.
    pub letter_spacing: f64,
    /// Glyph paint.
    pub fill: Paint,
    /// Optional drop shadow (see [`VectorScene::shadows`]).
    pub shadow: Option<NodeId>,
}

/// Black drop shadow behind a shape, in design units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DropShadow {
    /// Horizontal offset.
    pub dx: f64,
    /// Vertical offset.
    pub dy: f64,
    /// Blur radius; the Gaussian standard deviation is half of it.
    pub blur: f64,
    /// Shadow opacity in `[0, 1]`.
    pub opacity: f64,
}

/// A reusable drop-shadow filter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ShadowDef {
    /// Id referenced by [`TextRun::shadow`].
    pub id: NodeId,
    /// Shadow parameters.
    pub shadow: DropShadow,
}

/// A reusable fill definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PaintDef {
    /// Id referenced by [`Paint::Def`].
    pub id: NodeId,
    /// Fill recipe.
    pub kind: PaintDefKind,
}

/// Fill recipes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintDefKind {
    /// Flat color.
    Flat {
        /// Fill color.
        color: Rgb8,
    },
    /// Repeating user-space tile made of colored cells.
    Tile {
        /// Tile bounds; repeats across the plane.
        tile: Rect,
        /// Cells covering the tile.
        cells: Vec<TileCell>,
    },
    /// Linear gradient in object-bounding-box units.
    LinearGradient {
        /// Start point, `(0, 0)` = top-left of the painted shape.
        start: Point,
        /// End point, `(1, 1)` = bottom-right of the painted shape.
        end: Point,
        /// Color stops, offsets ascending in `[0, 1]`.
        stops: Vec<GradientStop>,
    },
}

/// One colored rectangle inside a tile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TileCell {
    /// Cell bounds in tile space.
    pub rect: Rect,
    /// Cell color.
    pub color: Rgb8,
}

/// Gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GradientStop {
    /// Position in `[0, 1]`.
    pub offset: f64,
    /// Color at `offset`.
    pub color: Rgb8,
}

/// A reusable clip region.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClipDef {
    /// Id referenced by [`SceneNode::clip`].
    pub id: NodeId,
    /// Region outline.
    pub path: BezPath,
}

impl VectorScene {
    /// Depth-first lookup by id.
    pub fn find(&self, id: &str) -> Option<&SceneNode> {
        self.ancestry(id).and_then(|chain| chain.last().copied())
    }

    /// Chain of nodes from a top-level node down to `id` (inclusive).
    pub fn ancestry(&self, id: &str) -> Option<Vec<&SceneNode>> {
        fn walk<'a>(nodes: &'a [SceneNode], id: &str, chain: &mut Vec<&'a SceneNode>) -> bool {
            for n in nodes {
                chain.push(n);
                if n.id == id || walk(n.children(), id, chain) {
                    return true;
                }
                chain.pop();
            }
            false
        }

        let mut chain = Vec::new();
        walk(&self.nodes, id, &mut chain).then_some(chain)
    }

    /// `true` when `id` and all its ancestors are visible with non-zero opacity.
    pub fn is_displayed(&self, id: &str) -> bool {
        self.ancestry(id).is_some_and(|chain| {
            chain
                .iter()
                .all(|n| n.visibility == Visibility::Visible && n.opacity > 0.0)
        })
    }

    /// Paint definition by id.
    pub fn paint_def(&self, id: &str) -> Option<&PaintDef> {
        self.paints.iter().find(|p| p.id == id)
    }

    /// Clip definition by id.
    pub fn clip_def(&self, id: &str) -> Option<&ClipDef> {
        self.clips.iter().find(|c| c.id == id)
    }

    /// Shadow filter definition by id.
    pub fn shadow_def(&self, id: &str) -> Option<&ShadowDef> {
        self.shadows.iter().find(|s| s.id == id)
    }

    /// The fill definition referenced by the jersey body.
    pub fn surface_fill(&self) -> Option<&PaintDef> {
        let body = self.find(crate::render::engine::ids::BODY)?;
        match &body.kind {
            NodeKind::Path {
                fill: Paint::Def(id),
                ..
            } => self.paint_def(id),
            _ => None,
        }
    }

    /// Every node in depth-first painter's order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = &SceneNode> {
        let mut stack: Vec<&SceneNode> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            let n = stack.pop()?;
            stack.extend(n.children().iter().rev());
            Some(n)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
