//! Running one box job: generate, lay out and write the requested outputs.

use anyhow::{Context, Result};
use clap::Args;
use fingerbox_joinery::{
    to_gcode, to_svg, write_stl_file, BoxParameters, BoxReport, BoxType, FingerBox,
    FingerBoxMaker, PrismSolidifier, SheetLayout,
};
use fingerbox_settings::Config;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Command line overrides for individual box parameters.
#[derive(Debug, Clone, Default, Args)]
pub struct BoxOverrides {
    /// Box length
    #[arg(long)]
    pub length: Option<f64>,
    /// Box width
    #[arg(long)]
    pub width: Option<f64>,
    /// Box height
    #[arg(long)]
    pub height: Option<f64>,
    /// Material thickness
    #[arg(long)]
    pub thickness: Option<f64>,
    /// Box type: open or closed
    #[arg(long = "type")]
    pub box_type: Option<BoxType>,
    /// Fingers along each length edge
    #[arg(long)]
    pub fingers_length: Option<u32>,
    /// Fingers along each width edge
    #[arg(long)]
    pub fingers_width: Option<u32>,
    /// Fingers along each height edge
    #[arg(long)]
    pub fingers_height: Option<u32>,
    /// Extra finger protrusion for sanding
    #[arg(long)]
    pub overhang: Option<f64>,
}

impl BoxOverrides {
    pub fn apply(&self, params: &mut BoxParameters) {
        if let Some(v) = self.length {
            params.length = v;
        }
        if let Some(v) = self.width {
            params.width = v;
        }
        if let Some(v) = self.height {
            params.height = v;
        }
        if let Some(v) = self.thickness {
            params.thickness = v;
        }
        if let Some(v) = self.box_type {
            params.box_type = v;
        }
        if let Some(v) = self.fingers_length {
            params.finger_count_length = v;
        }
        if let Some(v) = self.fingers_width {
            params.finger_count_width = v;
        }
        if let Some(v) = self.fingers_height {
            params.finger_count_height = v;
        }
        if let Some(v) = self.overhang {
            params.overhang = v;
        }
    }
}

/// Files to write. Nothing is written for `None`.
#[derive(Debug, Clone, Default)]
pub struct Outputs {
    pub svg: Option<PathBuf>,
    pub gcode: Option<PathBuf>,
    pub stl: Option<PathBuf>,
    /// Build the JSON report
    pub report: bool,
}

pub struct JobOutcome {
    pub finger_box: FingerBox,
    pub layout: SheetLayout,
    pub report: Option<String>,
}

pub fn run_job(config: &Config, outputs: &Outputs) -> Result<JobOutcome> {
    config.validate().context("Invalid job configuration")?;

    let maker = FingerBoxMaker::new(config.box_params.clone()).context("Invalid box parameters")?;
    let params = maker.params();
    let geometry = maker.geometry();
    info!(
        "{} box {}x{}x{}, outer {:.3}x{:.3}x{:.3}, finger depth {:.3}",
        params.box_type,
        params.length,
        params.width,
        params.height,
        geometry.length.outer,
        geometry.width.outer,
        geometry.height.outer,
        geometry.depth
    );
    let finger_box = maker
        .generate(&mut PrismSolidifier::new())
        .context("Box generation failed")?;
    let layout = SheetLayout::arrange(&finger_box, &config.layout);

    if let Some(path) = &outputs.svg {
        let svg = to_svg(&layout)?;
        fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote SVG to {}", path.display());
    }

    if let Some(path) = &outputs.gcode {
        let gcode = to_gcode(&finger_box, &layout, &config.laser)?;
        fs::write(path, gcode).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote G-code to {}", path.display());
    }

    if let Some(path) = &outputs.stl {
        write_stl_file(&finger_box, &layout, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    let report = if outputs.report {
        Some(BoxReport::from_box(&finger_box).to_json()?)
    } else {
        None
    };

    Ok(JobOutcome {
        finger_box,
        layout,
        report,
    })
}
