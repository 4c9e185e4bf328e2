//! SVG cut sheet.

use crate::error::{ExportError, ExportResult};
use crate::finger_box::SheetLayout;
use std::fmt::Write;

/// Render the sheet as one `<path>` per panel. Y is flipped so the drawing
/// reads the same way up as the machine coordinates.
pub fn to_svg(layout: &SheetLayout) -> ExportResult<String> {
    let bounds = layout
        .bounds()
        .ok_or_else(|| ExportError::Empty("sheet layout has no panels".to_string()))?;

    let mut svg = String::new();
    writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{:.4} {:.4} {:.4} {:.4}" width="{:.4}" height="{:.4}">"#,
        bounds.min_x,
        -bounds.max_y,
        bounds.width(),
        bounds.height(),
        bounds.width(),
        bounds.height()
    )?;
    writeln!(
        svg,
        r#"  <g transform="scale(1,-1)" fill="none" stroke="black" stroke-width="0.01">"#
    )?;

    for placed in &layout.panels {
        let mut d = String::new();
        for (i, p) in placed.outline.points().iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            write!(d, "{} {:.4} {:.4} ", cmd, p.x, p.y)?;
        }
        d.push('Z');
        writeln!(
            svg,
            r#"    <path id="{}" d="{}"/>"#,
            escape_attribute(&placed.label),
            d
        )?;
    }

    writeln!(svg, "  </g>")?;
    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
