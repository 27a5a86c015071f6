//! Standalone SVG export of the chart.

use super::renderer::VisualElements;
use crate::viewport::Viewport;
use std::fmt::{self, Write as _};

/// Radius of a value marker, in pixels.
const MARKER_RADIUS: f64 = 4.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub point: &'static str,
    pub guide_circle: &'static str,
    pub spoke: &'static str,
    pub marker_outline: &'static str,
    pub label: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            point: "#5232B9",
            guide_circle: "#c3c3c3",
            spoke: "#ccc",
            marker_outline: "#fff",
            label: "#444",
        }
    }
}

/// Renders `elements` centered in a `viewport`-sized SVG document.
pub fn render_document(elements: &VisualElements, viewport: Viewport, palette: &Palette) -> String {
    let mut svg = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut svg, elements, viewport, palette);
    svg
}

fn write_document(
    svg: &mut String,
    elements: &VisualElements,
    viewport: Viewport,
    palette: &Palette,
) -> fmt::Result {
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        viewport.width, viewport.height, viewport.width, viewport.height
    )?;
    writeln!(
        svg,
        r#"  <text x="{:.2}" y="32" text-anchor="middle" font-size="20" font-weight="bold" fill="{}">{}</text>"#,
        viewport.width / 2.0,
        palette.label,
        escape_xml(&elements.entity_name)
    )?;
    writeln!(
        svg,
        r#"  <g transform="translate({:.2}, {:.2})">"#,
        viewport.width / 2.0,
        viewport.height / 2.0
    )?;

    for circle in &elements.axis_circles {
        writeln!(
            svg,
            r#"    <circle cx="0" cy="0" r="{:.2}" fill="rgba(10,10,10,0.01)" stroke="{}" stroke-width="0.5"/>"#,
            circle.radius, palette.guide_circle
        )?;
    }

    for spoke in &elements.spokes {
        writeln!(
            svg,
            r#"    <line x1="0" y1="0" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="0.5"/>"#,
            spoke.end.x, spoke.end.y, palette.spoke
        )?;
    }

    writeln!(
        svg,
        r#"    <path d="{}" fill="{}" fill-opacity="0.1" stroke="{}" stroke-width="1.3"/>"#,
        elements.value_path.to_svg_path(),
        palette.point,
        palette.point
    )?;

    for marker in &elements.markers {
        writeln!(
            svg,
            r#"    <circle cx="{:.2}" cy="{:.2}" r="{MARKER_RADIUS}" fill="{}" stroke="{}" stroke-width="2.6"/>"#,
            marker.position.x, marker.position.y, palette.point, palette.marker_outline
        )?;
    }

    for label in &elements.labels {
        writeln!(
            svg,
            r#"    <text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12" fill="{}" class="labels">{}</text>"#,
            label.anchor.x,
            label.anchor.y,
            palette.label,
            escape_xml(label.text)
        )?;
    }

    writeln!(svg, "  </g>")?;
    writeln!(svg, "</svg>")
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
