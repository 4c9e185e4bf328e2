//! Binary STL of the solid panels, laid flat as they sit on the sheet.

use crate::error::{ExportError, ExportResult};
use crate::finger_box::{FingerBox, SheetLayout};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use stl_io::{Normal, Vertex};
use tracing::info;

fn to_stl_triangles(finger_box: &FingerBox, layout: &SheetLayout) -> Vec<stl_io::Triangle> {
    let mut triangles = Vec::new();
    for (solid, placed) in finger_box.panels.iter().zip(&layout.panels) {
        let body = solid.body.translated(placed.offset.0, placed.offset.1);
        for t in &body.triangles {
            let [a, b, c] = t.vertices;
            triangles.push(stl_io::Triangle {
                normal: Normal::new([t.normal.x as f32, t.normal.y as f32, t.normal.z as f32]),
                vertices: [
                    Vertex::new([a.x as f32, a.y as f32, a.z as f32]),
                    Vertex::new([b.x as f32, b.y as f32, b.z as f32]),
                    Vertex::new([c.x as f32, c.y as f32, c.z as f32]),
                ],
            });
        }
    }
    triangles
}

/// Write every panel body into one binary STL stream.
pub fn write_stl<W: Write>(
    finger_box: &FingerBox,
    layout: &SheetLayout,
    writer: &mut W,
) -> ExportResult<()> {
    if finger_box.is_empty() || layout.is_empty() {
        return Err(ExportError::Empty("no solid panels to write".to_string()));
    }
    let triangles = to_stl_triangles(finger_box, layout);
    stl_io::write_stl(writer, triangles.iter())?;
    Ok(())
}

pub fn write_stl_file(
    finger_box: &FingerBox,
    layout: &SheetLayout,
    path: impl AsRef<Path>,
) -> ExportResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_stl(finger_box, layout, &mut writer)?;
    writer.flush()?;
    info!("Wrote STL to {}", path.display());
    Ok(())
}
