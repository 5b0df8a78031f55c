use crate::scene::model::{
    LineCap, NodeKind, Paint, PaintDefKind, SceneNode, Stroke, TextRun, VectorScene, Visibility,
};
use kurbo::{BezPath, PathEl, Point, Rect};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x3c6e_f372_fe94_f82b;

/// Stable 128-bit digest of a [`VectorScene`].
///
/// Equal scenes always produce equal fingerprints, across runs and platforms. Used to skip
/// re-serialization and re-rasterization when an edit did not change the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for SceneFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

impl VectorScene {
    /// Content fingerprint of this scene.
    pub fn fingerprint(&self) -> SceneFingerprint {
        let mut h = StableHasher::new();
        write_scene(&mut h, self);
        h.finish()
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> SceneFingerprint {
        let v = self.inner.digest128();
        SceneFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_scene(h: &mut StableHasher, scene: &VectorScene) {
    h.write_f64(scene.view_box.width);
    h.write_f64(scene.view_box.height);
    h.write_str(scene.meta.view.as_str());
    h.write_str(scene.meta.pattern.as_str());
    h.write_str(scene.meta.collar.as_str());

    h.write_u32(scene.paints.len() as u32);
    for def in &scene.paints {
        h.write_str(def.id);
        match &def.kind {
            PaintDefKind::Flat { color } => {
                h.write_u8(0);
                h.write_bytes(&[color.r, color.g, color.b]);
            }
            PaintDefKind::Tile { tile, cells } => {
                h.write_u8(1);
                write_rect(h, *tile);
                h.write_u32(cells.len() as u32);
                for c in cells {
                    write_rect(h, c.rect);
                    h.write_bytes(&[c.color.r, c.color.g, c.color.b]);
                }
            }
            PaintDefKind::LinearGradient { start, end, stops } => {
                h.write_u8(2);
                write_point(h, *start);
                write_point(h, *end);
                h.write_u32(stops.len() as u32);
                for s in stops {
                    h.write_f64(s.offset);
                    h.write_bytes(&[s.color.r, s.color.g, s.color.b]);
                }
            }
        }
    }

    h.write_u32(scene.clips.len() as u32);
    for clip in &scene.clips {
        h.write_str(clip.id);
        write_path(h, &clip.path);
    }

    h.write_u32(scene.shadows.len() as u32);
    for def in &scene.shadows {
        h.write_str(def.id);
        h.write_f64(def.shadow.dx);
        h.write_f64(def.shadow.dy);
        h.write_f64(def.shadow.blur);
        h.write_f64(def.shadow.opacity);
    }

    h.write_u32(scene.nodes.len() as u32);
    for n in &scene.nodes {
        write_node(h, n);
    }
}

fn write_node(h: &mut StableHasher, n: &SceneNode) {
    h.write_str(n.id);
    h.write_u8(match n.visibility {
        Visibility::Visible => 0,
        Visibility::Hidden => 1,
        Visibility::Collapsed => 2,
    });
    h.write_f64(n.opacity);
    for c in n.transform.as_coeffs() {
        h.write_f64(c);
    }
    match n.clip {
        Some(id) => {
            h.write_u8(1);
            h.write_str(id);
        }
        None => h.write_u8(0),
    }

    match &n.kind {
        NodeKind::Group { children } => {
            h.write_u8(0);
            h.write_u32(children.len() as u32);
            for c in children {
                write_node(h, c);
            }
        }
        NodeKind::Path { path, fill, stroke } => {
            h.write_u8(1);
            write_path(h, path);
            write_paint(h, fill);
            write_stroke(h, stroke.as_ref());
        }
        NodeKind::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            h.write_u8(2);
            write_point(h, *center);
            h.write_f64(*radius);
            write_paint(h, fill);
            write_stroke(h, stroke.as_ref());
        }
        NodeKind::Rect {
            rect,
            corner_radius,
            fill,
        } => {
            h.write_u8(3);
            write_rect(h, *rect);
            h.write_f64(*corner_radius);
            write_paint(h, fill);
        }
        NodeKind::Text(run) => {
            h.write_u8(4);
            write_text(h, run);
        }
    }
}

fn write_text(h: &mut StableHasher, run: &TextRun) {
    h.write_str(&run.content);
    write_point(h, run.anchor);
    h.write_f64(run.size);
    h.write_u16(run.weight);
    h.write_f64(run.letter_spacing);
    write_paint(h, &run.fill);
    match run.shadow {
        Some(id) => {
            h.write_u8(1);
            h.write_str(id);
        }
        None => h.write_u8(0),
    }
}

fn write_paint(h: &mut StableHasher, p: &Paint) {
    match p {
        Paint::None => h.write_u8(0),
        Paint::Solid(c) => {
            h.write_u8(1);
            h.write_bytes(&[c.r, c.g, c.b]);
        }
        Paint::Def(id) => {
            h.write_u8(2);
            h.write_str(id);
        }
    }
}

fn write_stroke(h: &mut StableHasher, s: Option<&Stroke>) {
    let Some(s) = s else {
        h.write_u8(0);
        return;
    };
    h.write_u8(1);
    h.write_bytes(&[s.color.r, s.color.g, s.color.b]);
    h.write_f64(s.width);
    h.write_u8(match s.cap {
        LineCap::Butt => 0,
        LineCap::Round => 1,
    });
    h.write_u32(s.dash.len() as u32);
    for d in &s.dash {
        h.write_f64(*d);
    }
}

fn write_point(h: &mut StableHasher, p: Point) {
    h.write_f64(p.x);
    h.write_f64(p.y);
}

fn write_rect(h: &mut StableHasher, r: Rect) {
    h.write_f64(r.x0);
    h.write_f64(r.y0);
    h.write_f64(r.x1);
    h.write_f64(r.y1);
}

fn write_path(h: &mut StableHasher, path: &BezPath) {
    h.write_u32(path.elements().len() as u32);
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                h.write_u8(0);
                write_point(h, p);
            }
            PathEl::LineTo(p) => {
                h.write_u8(1);
                write_point(h, p);
            }
            PathEl::QuadTo(a, b) => {
                h.write_u8(2);
                write_point(h, a);
                write_point(h, b);
            }
            PathEl::CurveTo(a, b, c) => {
                h.write_u8(3);
                write_point(h, a);
                write_point(h, b);
                write_point(h, c);
            }
            PathEl::ClosePath => h.write_u8(4),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
