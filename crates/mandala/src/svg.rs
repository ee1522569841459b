//! SVG serialization of a rendered `Scene`.
//!
//! Fixed palette of the reference UI: black background, yellow boundary,
//! red dots, white chords.

use crate::scene::Scene;
use crate::viewport::Viewport;

const BACKGROUND: &str = "black";
const BOUNDARY_STROKE: &str = "yellow";
const BOUNDARY_STROKE_WIDTH: f64 = 3.0;
const DOT_FILL: &str = "red";
const CHORD_STROKE: &str = "white";

/// Render `scene` as a standalone SVG document sized to `viewport`.
///
/// Element order: background, boundary, dots, chords; one element per line.
pub fn to_svg(scene: &Scene, viewport: &Viewport) -> String {
    let mut lines = Vec::with_capacity(4 + scene.dots.len() + scene.chords.len());
    lines.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
        viewport.width, viewport.height, viewport.width, viewport.height
    ));
    lines.push(format!(
        r#"  <rect x="0" y="0" width="100%" height="100%" fill="{BACKGROUND}"/>"#
    ));
    let b = scene.boundary;
    lines.push(format!(
        r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{BOUNDARY_STROKE}" stroke-width="{BOUNDARY_STROKE_WIDTH}"/>"#,
        b.center.x, b.center.y, b.radius
    ));
    lines.extend(scene.dots.iter().map(|p| {
        format!(
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{DOT_FILL}" stroke="none"/>"#,
            p.x, p.y, scene.dot_radius
        )
    }));
    lines.extend(scene.chords.iter().map(|c| {
        format!(
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{CHORD_STROKE}"/>"#,
            c.start.x, c.start.y, c.end.x, c.end.y
        )
    }));
    lines.push("</svg>".to_string());
    let mut svg = lines.join("\n");
    svg.push('\n');
    svg
}
