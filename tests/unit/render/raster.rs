use super::*;
use crate::design::config::DesignConfiguration;
use crate::render::engine::render;
use crate::render::svg::to_svg;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

fn png_size(png: &[u8]) -> (u32, u32) {
    let w = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let h = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    (w, h)
}

#[test]
fn rasterizes_rendered_scene_at_requested_width() {
    let svg = to_svg(&render(&DesignConfiguration::default()));
    let png = rasterize_png(
        &svg,
        RasterOpts {
            width: 487,
            background: Some(Rgb8::new(255, 255, 255)),
        },
    )
    .unwrap();
    assert_eq!(png[..8], PNG_MAGIC);
    assert_eq!(png_size(&png), (487, 436));
}

#[test]
fn rejects_zero_and_oversized_widths() {
    let svg = to_svg(&render(&DesignConfiguration::default()));
    for width in [0, MAX_DIM + 1] {
        let err = rasterize_png(
            &svg,
            RasterOpts {
                width,
                background: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ProkitError::Validation(_)), "{err}");
    }
}

#[test]
fn malformed_svg_is_an_evaluation_error() {
    let err = rasterize_png("<svg", RasterOpts::default()).unwrap_err();
    assert!(matches!(err, ProkitError::Evaluation(_)), "{err}");
}
