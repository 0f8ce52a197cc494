//! Front-elevation sketch of the core as a standalone SVG.
//!
//! The drawing is scaled onto a fixed-width canvas so the output views
//! at the same size whether the core is a 50 VA toroid or a 2 MVA
//! three-limb stack. Steel outlines are solid blue, window openings are
//! dashed red, and the captions carry the real millimetre dimensions.

use td_materials::CoreShape;
use td_models::CoreGeometry;

const CANVAS_W: f64 = 420.0;
const MARGIN: f64 = 30.0;
const CAPTION_H: f64 = 44.0;

const CORE_STYLE: &str = r#"fill="none" stroke="blue" stroke-width="2""#;
const WINDOW_STYLE: &str = r#"fill="none" stroke="red" stroke-width="1" stroke-dasharray="6 4""#;

/// Render the core front elevation for the given geometry.
pub fn render_diagram(core: &CoreGeometry) -> String {
    match core.shape {
        CoreShape::Ei => ei_elevation(core),
        CoreShape::Toroidal => toroid_elevation(core),
        _ => single_window_elevation(core),
    }
}

/// Three-limb elevation: half-width outer limbs, two windows flanking
/// the central limb, yokes top and bottom.
fn ei_elevation(core: &CoreGeometry) -> String {
    let limb = core.width_mm;
    let total_w = 2.0 * limb + 2.0 * core.window_width_mm;
    let total_h = core.window_height_mm + 2.0 * core.yoke_height_mm;
    let s = (CANVAS_W - 2.0 * MARGIN) / total_w;

    let mut svg = svg_open(total_h * s);
    push_rect(&mut svg, MARGIN, MARGIN, total_w * s, total_h * s, CORE_STYLE);

    let wy = MARGIN + core.yoke_height_mm * s;
    let left_x = MARGIN + (limb / 2.0) * s;
    let right_x = MARGIN + (limb / 2.0 + core.window_width_mm + limb) * s;
    push_rect(
        &mut svg,
        left_x,
        wy,
        core.window_width_mm * s,
        core.window_height_mm * s,
        WINDOW_STYLE,
    );
    push_rect(
        &mut svg,
        right_x,
        wy,
        core.window_width_mm * s,
        core.window_height_mm * s,
        WINDOW_STYLE,
    );

    push_captions(
        &mut svg,
        total_h * s,
        &format!(
            "{}: {:.0} × {:.0} mm",
            core.shape.display_name(),
            total_w,
            total_h
        ),
        &format!(
            "Window: {:.0} × {:.0} mm",
            core.window_width_mm, core.window_height_mm
        ),
    );
    svg.push_str("</svg>\n");
    svg
}

/// Plan view of a toroid: outer rim and the dashed inner bore.
fn toroid_elevation(core: &CoreGeometry) -> String {
    let inner_r = core.window_width_mm / 2.0;
    let outer_r = inner_r + core.width_mm;
    let total = 2.0 * outer_r;
    let s = (CANVAS_W - 2.0 * MARGIN) / total;
    let center = MARGIN + outer_r * s;

    let mut svg = svg_open(total * s);
    push_circle(&mut svg, center, center, outer_r * s, CORE_STYLE);
    push_circle(&mut svg, center, center, inner_r * s, WINDOW_STYLE);

    push_captions(
        &mut svg,
        total * s,
        &format!("{}: Ø{:.0} mm", core.shape.display_name(), total),
        &format!("Window: Ø{:.0} mm", 2.0 * inner_r),
    );
    svg.push_str("</svg>\n");
    svg
}

/// Two-limb elevation for UI, C, shell and berry stacks: a rectangular
/// outline with one window between the limbs.
fn single_window_elevation(core: &CoreGeometry) -> String {
    let total_w = 2.0 * core.width_mm + core.window_width_mm;
    let total_h = core.window_height_mm + 2.0 * core.yoke_height_mm;
    let s = (CANVAS_W - 2.0 * MARGIN) / total_w;

    let mut svg = svg_open(total_h * s);
    push_rect(&mut svg, MARGIN, MARGIN, total_w * s, total_h * s, CORE_STYLE);
    push_rect(
        &mut svg,
        MARGIN + core.width_mm * s,
        MARGIN + core.yoke_height_mm * s,
        core.window_width_mm * s,
        core.window_height_mm * s,
        WINDOW_STYLE,
    );

    push_captions(
        &mut svg,
        total_h * s,
        &format!(
            "{}: {:.0} × {:.0} mm",
            core.shape.display_name(),
            total_w,
            total_h
        ),
        &format!(
            "Window: {:.0} × {:.0} mm",
            core.window_width_mm, core.window_height_mm
        ),
    );
    svg.push_str("</svg>\n");
    svg
}

fn svg_open(drawing_h: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {:.0} {:.0}\">\n",
        CANVAS_W,
        drawing_h + 2.0 * MARGIN + CAPTION_H
    )
}

fn push_rect(svg: &mut String, x: f64, y: f64, w: f64, h: f64, style: &str) {
    svg.push_str(&format!(
        "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" {}/>\n",
        x, y, w, h, style
    ));
}

fn push_circle(svg: &mut String, cx: f64, cy: f64, r: f64, style: &str) {
    svg.push_str(&format!(
        "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" {}/>\n",
        cx, cy, r, style
    ));
}

fn push_captions(svg: &mut String, drawing_h: f64, line1: &str, line2: &str) {
    let x = CANVAS_W / 2.0;
    let y = MARGIN + drawing_h + 18.0;
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"13\" text-anchor=\"middle\">{}</text>\n",
        x, y, line1
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\">{}</text>\n",
        x,
        y + 16.0,
        line2
    ));
}
