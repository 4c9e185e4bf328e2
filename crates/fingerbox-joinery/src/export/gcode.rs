//! Laser cutting program for a sheet of panels.

use crate::error::{ExportError, ExportResult};
use crate::finger_box::{FingerBox, SheetLayout};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserSettings {
    pub passes: u32,
    /// Spindle/laser power word (`S`)
    pub power: u32,
    /// Cutting feed in units per minute
    pub feed_rate: f64,
    /// Z lowered by this much on every pass after the first, which cuts at Z0
    pub z_step_down: f64,
    pub safe_height: f64,
}

impl Default for LaserSettings {
    fn default() -> Self {
        Self {
            passes: 1,
            power: 1000,
            feed_rate: 500.0,
            z_step_down: 0.0,
            safe_height: 5.0,
        }
    }
}

/// Render the cut program. Panels are cut in sheet order, each as one
/// closed contour repeated `passes` times.
pub fn to_gcode(
    finger_box: &FingerBox,
    layout: &SheetLayout,
    laser: &LaserSettings,
) -> ExportResult<String> {
    if layout.is_empty() {
        return Err(ExportError::Empty("sheet layout has no panels".to_string()));
    }
    let mut gcode = String::new();
    write_header(&mut gcode, finger_box, laser)?;

    for (i, placed) in layout.panels.iter().enumerate() {
        let points = placed.outline.points();
        let Some(first) = points.first() else {
            continue;
        };
        writeln!(gcode, "; Panel {}: {}", i + 1, placed.label)?;
        writeln!(gcode, "G0 Z{:.3} ; Move to safe height", laser.safe_height)?;
        writeln!(gcode, "G0 X{:.3} Y{:.3} ; Rapid to start", first.x, first.y)?;

        for pass in 1..=laser.passes {
            let z = 0.0 - (pass - 1) as f64 * laser.z_step_down;
            writeln!(gcode, "; Pass {}/{} at Z{:.3}", pass, laser.passes, z)?;
            writeln!(gcode, "G0 Z{:.3} ; Move to pass depth", z)?;
            writeln!(gcode, "M3 S{} ; Laser on", laser.power)?;
            for (idx, p) in points.iter().skip(1).chain(std::iter::once(first)).enumerate() {
                if idx == 0 {
                    writeln!(gcode, "G1 X{:.3} Y{:.3} F{:.0}", p.x, p.y, laser.feed_rate)?;
                } else {
                    writeln!(gcode, "G1 X{:.3} Y{:.3}", p.x, p.y)?;
                }
            }
            writeln!(gcode, "M5 ; Laser off")?;
        }
        gcode.push('\n');
    }

    writeln!(gcode, "M5 ; Ensure laser off")?;
    writeln!(gcode, "G0 Z{:.3} ; Move to safe height", laser.safe_height)?;
    writeln!(gcode, "G0 X0 Y0 ; Return to origin")?;
    writeln!(gcode, "M2 ; Program end")?;
    Ok(gcode)
}

fn write_header(
    gcode: &mut String,
    finger_box: &FingerBox,
    laser: &LaserSettings,
) -> std::fmt::Result {
    let params = &finger_box.params;
    let g = &finger_box.geometry;

    writeln!(gcode, "; Finger Box G-code")?;
    writeln!(
        gcode,
        "; Generated: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(gcode, ";")?;
    writeln!(gcode, "; --- Box Dimensions ---")?;
    writeln!(
        gcode,
        "; Dimensions: {}x{}x{}",
        params.length, params.width, params.height
    )?;
    writeln!(
        gcode,
        "; Outer dimensions: {:.3}x{:.3}x{:.3}",
        g.length.outer, g.width.outer, g.height.outer
    )?;
    writeln!(gcode, "; Box Type: {}", params.box_type)?;
    writeln!(gcode, "; Material thickness: {}", params.thickness)?;
    writeln!(gcode, ";")?;
    writeln!(gcode, "; --- Finger Joints ---")?;
    for axis in [&g.length, &g.width, &g.height] {
        writeln!(
            gcode,
            "; {}: {} fingers, width {:.4}",
            axis.axis, axis.finger_count, axis.finger_width
        )?;
    }
    writeln!(gcode, "; Overhang: {}", g.overhang)?;
    writeln!(gcode, "; Finger depth: {:.4}", g.depth)?;
    writeln!(gcode, ";")?;
    writeln!(gcode, "; --- Laser Settings ---")?;
    writeln!(gcode, "; Laser passes: {}", laser.passes)?;
    writeln!(gcode, "; Laser power: S{}", laser.power)?;
    writeln!(gcode, "; Feed rate: {:.0}", laser.feed_rate)?;
    writeln!(gcode, "; Z step down: {}", laser.z_step_down)?;
    writeln!(gcode, ";")?;
    writeln!(gcode, "; Initialization")?;
    writeln!(gcode, "G21 ; Set units to millimeters")?;
    writeln!(gcode, "G90 ; Absolute positioning")?;
    writeln!(gcode, "G17 ; XY plane selection")?;
    writeln!(
        gcode,
        "G0 Z{:.3} ; Move to safe height\n",
        laser.safe_height
    )?;
    Ok(())
}
