//! JSON summary of a generated box.

use crate::error::ExportResult;
use crate::finger_box::{BoxParameters, FingerBox, FingerGeometry, PanelRole};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReport {
    pub role: PanelRole,
    pub archetype: u8,
    pub width: f64,
    pub height: f64,
    pub vertices: usize,
    pub area: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxReport {
    pub parameters: BoxParameters,
    pub geometry: FingerGeometry,
    pub panels: Vec<PanelReport>,
    pub total_volume: f64,
}

impl BoxReport {
    pub fn from_box(finger_box: &FingerBox) -> Self {
        let panels = finger_box
            .panels
            .iter()
            .map(|p| PanelReport {
                role: p.role,
                archetype: p.panel.archetype.number(),
                width: p.panel.dims.width,
                height: p.panel.dims.height,
                vertices: p.panel.vertex_count(),
                area: p.panel.outline.area(),
                volume: p.body.volume(),
            })
            .collect();
        Self {
            parameters: finger_box.params.clone(),
            geometry: finger_box.geometry.clone(),
            panels,
            total_volume: finger_box.total_volume(),
        }
    }

    pub fn to_json(&self) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
