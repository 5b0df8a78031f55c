use super::*;

fn leaf(id: NodeId) -> SceneNode {
    SceneNode::rect(id, Rect::new(0.0, 0.0, 1.0, 1.0), 0.0, Paint::None)
}

fn scene(nodes: Vec<SceneNode>) -> VectorScene {
    VectorScene {
        view_box: ViewBox {
            width: 10.0,
            height: 10.0,
        },
        meta: SceneMeta {
            view: ViewMode::Front,
            pattern: Pattern::Solid,
            collar: CollarType::Round,
            badge: "FRONT VIEW",
        },
        paints: vec![PaintDef {
            id: "flat",
            kind: PaintDefKind::Flat {
                color: Rgb8::black(),
            },
        }],
        clips: Vec::new(),
        shadows: vec![ShadowDef {
            id: "soft",
            shadow: DropShadow {
                dx: 0.0,
                dy: 2.0,
                blur: 4.0,
                opacity: 0.3,
            },
        }],
        nodes,
    }
}

#[test]
fn opacity_is_clamped() {
    assert_eq!(leaf("a").opacity(1.5).opacity, 1.0);
    assert_eq!(leaf("a").opacity(-0.2).opacity, 0.0);
}

#[test]
fn visibility_helpers() {
    assert_eq!(Visibility::hidden_unless(false), Visibility::Hidden);
    assert_eq!(Visibility::collapsed_unless(false), Visibility::Collapsed);
    assert_eq!(Visibility::collapsed_unless(true), Visibility::Visible);
}

#[test]
fn find_and_ancestry_walk_nested_groups() {
    let s = scene(vec![
        leaf("first"),
        SceneNode::group("outer", vec![SceneNode::group("inner", vec![leaf("deep")])]),
    ]);

    let chain: Vec<NodeId> = s.ancestry("deep").unwrap().iter().map(|n| n.id).collect();
    assert_eq!(chain, vec!["outer", "inner", "deep"]);
    assert_eq!(s.find("first").unwrap().id, "first");
    assert!(s.find("missing").is_none());
}

#[test]
fn displayed_requires_every_ancestor() {
    let s = scene(vec![
        SceneNode::group("collapsed", vec![leaf("a")]).visibility(Visibility::Collapsed),
        SceneNode::group("faded", vec![leaf("b")]).opacity(0.0),
        SceneNode::group("hidden", vec![leaf("c")]).visibility(Visibility::Hidden),
        SceneNode::group("shown", vec![leaf("d")]),
    ]);
    assert!(!s.is_displayed("a"));
    assert!(!s.is_displayed("b"));
    assert!(!s.is_displayed("c"));
    assert!(s.is_displayed("d"));
    assert!(!s.is_displayed("nope"));
}

#[test]
fn iter_nodes_is_depth_first_in_paint_order() {
    let s = scene(vec![
        SceneNode::group("g", vec![leaf("g0"), leaf("g1")]),
        leaf("tail"),
    ]);
    let order: Vec<NodeId> = s.iter_nodes().map(|n| n.id).collect();
    assert_eq!(order, vec!["g", "g0", "g1", "tail"]);
}

#[test]
fn surface_fill_follows_body_reference() {
    let body = SceneNode::path("body", BezPath::new(), Paint::Def("flat"), None);
    let s = scene(vec![body]);
    assert_eq!(s.surface_fill().unwrap().id, "flat");

    let s = scene(vec![leaf("body")]);
    assert!(s.surface_fill().is_none());
}

#[test]
fn stroke_builders() {
    let s = Stroke::rounded(Rgb8::black(), 3.0).dashed(&[2.0, 1.0]);
    assert_eq!(s.cap, LineCap::Round);
    assert_eq!(s.dash, vec![2.0, 1.0]);
    assert!(Stroke::solid(Rgb8::black(), 1.0).dash.is_empty());
}

#[test]
fn scene_serializes_with_snake_case_tags() {
    let s = scene(vec![leaf("r").visibility(Visibility::Hidden)]);
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["nodes"][0]["visibility"], "hidden");
    assert!(v["nodes"][0]["kind"].get("rect").is_some());
    assert_eq!(v["meta"]["pattern"], "solid");
}

#[test]
fn shadow_defs_are_found_by_id() {
    let s = scene(Vec::new());
    assert_eq!(s.shadow_def("soft").unwrap().shadow.dy, 2.0);
    assert!(s.shadow_def("hard").is_none());
}
