//! SVG serialization of a [`VectorScene`].
//!
//! The output is a standalone SVG 1.1 document. Numbers use Rust's shortest round-trip float
//! formatting, so identical scenes always serialize to identical bytes.

use crate::foundation::core::{Affine, Rgb8};
use crate::scene::model::{
    ClipDef, LineCap, NodeKind, Paint, PaintDef, PaintDefKind, SceneNode, ShadowDef, Stroke,
    TextRun, VectorScene, Visibility,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const FONT_FAMILY: &str = "sans-serif";

/// Serialize a scene into a complete SVG document.
pub fn to_svg(scene: &VectorScene) -> String {
    let vb = scene.view_box;
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"{SVG_NS}\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\" data-view=\"{}\" data-pattern=\"{}\" data-collar=\"{}\">",
        num(vb.width),
        num(vb.height),
        num(vb.width),
        num(vb.height),
        scene.meta.view,
        scene.meta.pattern,
        scene.meta.collar,
    ));

    svg.push_str("<defs>");
    for def in &scene.paints {
        paint_def_svg(&mut svg, def);
    }
    for clip in &scene.clips {
        clip_def_svg(&mut svg, clip);
    }
    for shadow in &scene.shadows {
        shadow_def_svg(&mut svg, shadow);
    }
    svg.push_str("</defs>");

    for node in &scene.nodes {
        node_svg(&mut svg, node);
    }
    svg.push_str("</svg>");
    svg
}

fn paint_def_svg(svg: &mut String, def: &PaintDef) {
    match &def.kind {
        // A single-stop gradient paints a flat color and keeps every body fill a url() reference.
        PaintDefKind::Flat { color } => {
            svg.push_str(&format!(
                "<linearGradient id=\"{}\"><stop offset=\"0\" stop-color=\"{}\"/></linearGradient>",
                def.id, color
            ));
        }
        PaintDefKind::Tile { tile, cells } => {
            svg.push_str(&format!(
                "<pattern id=\"{}\" patternUnits=\"userSpaceOnUse\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\">",
                def.id,
                num(tile.x0),
                num(tile.y0),
                num(tile.width()),
                num(tile.height()),
            ));
            for cell in cells {
                svg.push_str(&format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
                    num(cell.rect.x0),
                    num(cell.rect.y0),
                    num(cell.rect.width()),
                    num(cell.rect.height()),
                    cell.color,
                ));
            }
            svg.push_str("</pattern>");
        }
        PaintDefKind::LinearGradient { start, end, stops } => {
            svg.push_str(&format!(
                "<linearGradient id=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\">",
                def.id,
                num(start.x),
                num(start.y),
                num(end.x),
                num(end.y),
            ));
            for stop in stops {
                svg.push_str(&format!(
                    "<stop offset=\"{}\" stop-color=\"{}\"/>",
                    num(stop.offset),
                    stop.color
                ));
            }
            svg.push_str("</linearGradient>");
        }
    }
}

fn clip_def_svg(svg: &mut String, clip: &ClipDef) {
    svg.push_str(&format!(
        "<clipPath id=\"{}\"><path d=\"{}\"/></clipPath>",
        clip.id,
        clip.path.to_svg()
    ));
}

fn shadow_def_svg(svg: &mut String, def: &ShadowDef) {
    let s = def.shadow;
    svg.push_str(&format!(
        "<filter id=\"{}\"><feDropShadow dx=\"{}\" dy=\"{}\" stdDeviation=\"{}\" flood-color=\"#000000\" flood-opacity=\"{}\"/></filter>",
        def.id,
        num(s.dx),
        num(s.dy),
        num(s.blur / 2.0),
        num(s.opacity),
    ));
}

fn node_svg(svg: &mut String, node: &SceneNode) {
    let common = common_attrs(node);
    match &node.kind {
        NodeKind::Group { children } => {
            svg.push_str(&format!("<g{common}>"));
            for child in children {
                node_svg(svg, child);
            }
            svg.push_str("</g>");
        }
        NodeKind::Path { path, fill, stroke } => {
            svg.push_str(&format!(
                "<path{common} d=\"{}\" fill=\"{}\"{}/>",
                path.to_svg(),
                paint_attr(fill),
                stroke_attrs(stroke.as_ref()),
            ));
        }
        NodeKind::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            svg.push_str(&format!(
                "<circle{common} cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"{}/>",
                num(center.x),
                num(center.y),
                num(*radius),
                paint_attr(fill),
                stroke_attrs(stroke.as_ref()),
            ));
        }
        NodeKind::Rect {
            rect,
            corner_radius,
            fill,
        } => {
            svg.push_str(&format!(
                "<rect{common} x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>",
                num(rect.x0),
                num(rect.y0),
                num(rect.width()),
                num(rect.height()),
                num(*corner_radius),
                paint_attr(fill),
            ));
        }
        NodeKind::Text(run) => text_svg(svg, &common, run),
    }
}

fn text_svg(svg: &mut String, common: &str, run: &TextRun) {
    let spacing = if run.letter_spacing != 0.0 {
        format!(" letter-spacing=\"{}\"", num(run.letter_spacing))
    } else {
        String::new()
    };
    let filter = match run.shadow {
        Some(id) => format!(" filter=\"url(#{id})\""),
        None => String::new(),
    };
    svg.push_str(&format!(
        "<text{common} x=\"{}\" y=\"{}\" font-family=\"{FONT_FAMILY}\" font-size=\"{}\" font-weight=\"{}\" text-anchor=\"middle\"{spacing} fill=\"{}\"{filter}>{}</text>",
        num(run.anchor.x),
        num(run.anchor.y),
        num(run.size),
        run.weight,
        paint_attr(&run.fill),
        escape_xml(&run.content),
    ));
}

fn common_attrs(node: &SceneNode) -> String {
    let mut out = format!(" id=\"{}\"", node.id);
    match node.visibility {
        Visibility::Visible => {}
        Visibility::Hidden => out.push_str(" visibility=\"hidden\""),
        Visibility::Collapsed => out.push_str(" display=\"none\""),
    }
    if node.opacity != 1.0 {
        out.push_str(&format!(" opacity=\"{}\"", num(node.opacity)));
    }
    if node.transform != Affine::IDENTITY {
        let [a, b, c, d, e, f] = node.transform.as_coeffs();
        out.push_str(&format!(
            " transform=\"matrix({} {} {} {} {} {})\"",
            num(a),
            num(b),
            num(c),
            num(d),
            num(e),
            num(f)
        ));
    }
    if let Some(clip) = node.clip {
        out.push_str(&format!(" clip-path=\"url(#{clip})\""));
    }
    out
}

fn paint_attr(paint: &Paint) -> String {
    match paint {
        Paint::None => "none".to_owned(),
        Paint::Solid(c) => hex(*c),
        Paint::Def(id) => format!("url(#{id})"),
    }
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    let Some(s) = stroke else {
        return String::new();
    };
    let mut out = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        hex(s.color),
        num(s.width)
    );
    if s.cap == LineCap::Round {
        out.push_str(" stroke-linecap=\"round\" stroke-linejoin=\"round\"");
    }
    if !s.dash.is_empty() {
        let dash: Vec<String> = s.dash.iter().map(|d| num(*d)).collect();
        out.push_str(&format!(" stroke-dasharray=\"{}\"", dash.join(" ")));
    }
    out
}

fn hex(c: Rgb8) -> String {
    c.to_hex()
}

// `-0` and `0` must serialize the same.
fn num(v: f64) -> String {
    if v == 0.0 { "0".to_owned() } else { format!("{v}") }
}

// Characters outside the XML 1.0 `Char` production cannot be escaped, only dropped.
fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if c < ' ' || c == '\u{fffe}' || c == '\u{ffff}' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
