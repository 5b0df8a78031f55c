use super::*;
use kurbo::{PathEl, Shape};

#[test]
fn silhouette_is_closed_and_fills_the_design_box() {
    let p = silhouette();
    let els = p.elements();
    assert!(matches!(els.first(), Some(PathEl::MoveTo(_))));
    assert!(matches!(els.last(), Some(PathEl::ClosePath)));

    let bb = p.bounding_box();
    assert!(bb.x0 > -2.0 && bb.x1 < DESIGN_WIDTH + 2.0);
    assert!(bb.y0 > -2.0 && bb.y1 < DESIGN_HEIGHT + 2.0);
    assert!(bb.width() > 960.0);
    assert!(bb.height() > 860.0);
    assert!(p.area().abs() > 100_000.0);
}

#[test]
fn silhouette_is_shared() {
    assert!(std::ptr::eq(silhouette(), silhouette()));
}

#[test]
fn backings_are_closed_and_rims_are_open() {
    for backing in [round_backing(), v_backing()] {
        assert!(matches!(backing.elements().last(), Some(PathEl::ClosePath)));
    }
    for rim in [round_rim(), v_rim(), polo_flaps(), back_seam(), hem()] {
        assert!(!matches!(rim.elements().last(), Some(PathEl::ClosePath)));
    }
}

#[test]
fn v_neck_dips_deeper_than_round() {
    assert!(v_rim().bounding_box().y1 > round_rim().bounding_box().y1);
    assert!(back_seam().bounding_box().y1 < round_rim().bounding_box().y1);
}

#[test]
fn crest_mark_is_centered() {
    let bb = crest_mark().bounding_box();
    assert_eq!(bb.center(), Point::new(0.0, 0.0));
    assert!(bb.width() < CREST_RADIUS * 2.0);
}
