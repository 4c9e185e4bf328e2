//! Finger Box Maker
//!
//! Generates the panels of a rectangular box joined with evenly spaced
//! rectangular fingers on every mating edge. A closed box has six panels
//! from three outlines; an open box drops the lid and flattens the wall
//! tops, leaving five panels.

pub mod geometry;
pub mod layout;
pub mod outline;
pub mod pattern;
pub mod types;

pub use geometry::{finger_depth, finger_width, AxisGeometry, EdgeEnds, FingerGeometry};
pub use layout::{LayoutSettings, PlacedPanel, SheetLayout};
pub use outline::{
    build_panel, edge_layouts, ArchetypeDescriptor, EdgeFingers, EdgeLayout, EdgeSide,
    FingerSpec, Panel, PanelArchetype, PanelDims,
};
pub use pattern::{generate_edge_points, EdgePhase, EdgeSegment, FingerPattern};
pub use types::{BoxAxis, BoxParameters, BoxType};

use crate::error::{BoxError, BoxResult};
use crate::solidify::{SolidBody, Solidifier};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Where a solid panel goes in the assembled box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelRole {
    Front,
    Back,
    Left,
    Right,
    Bottom,
    Top,
}

impl PanelRole {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Back => "Back",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Bottom => "Bottom",
            Self::Top => "Top",
        }
    }
}

impl fmt::Display for PanelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One outline to build and the roles it is solidified for.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlan {
    pub archetype: PanelArchetype,
    pub dims: PanelDims,
    pub spec: FingerSpec,
    pub roles: Vec<PanelRole>,
}

/// A solidified panel in its role.
#[derive(Debug, Clone)]
pub struct SolidPanel {
    pub role: PanelRole,
    pub panel: Panel,
    pub body: SolidBody,
}

impl SolidPanel {
    /// Label used for output files and sheet annotations.
    pub fn label(&self) -> String {
        format!("{} (type {})", self.role, self.panel.archetype.number())
    }
}

/// The result of one generation request.
#[derive(Debug, Clone)]
pub struct FingerBox {
    pub params: BoxParameters,
    pub geometry: FingerGeometry,
    pub panels: Vec<SolidPanel>,
}

impl FingerBox {
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel(&self, role: PanelRole) -> Option<&SolidPanel> {
        self.panels.iter().find(|p| p.role == role)
    }

    pub fn total_volume(&self) -> f64 {
        self.panels.iter().map(|p| p.body.volume()).sum()
    }
}

pub struct FingerBoxMaker {
    params: BoxParameters,
    geometry: FingerGeometry,
}

impl FingerBoxMaker {
    /// Validate the parameters and derive the finger geometry. Nothing is
    /// built when validation fails.
    pub fn new(params: BoxParameters) -> BoxResult<Self> {
        params.validate()?;
        let geometry = FingerGeometry::derive(&params)?;
        Ok(Self { params, geometry })
    }

    pub fn params(&self) -> &BoxParameters {
        &self.params
    }

    pub fn geometry(&self) -> &FingerGeometry {
        &self.geometry
    }

    fn fingers(&self, axis: BoxAxis) -> EdgeFingers {
        let a = self.geometry.axis(axis);
        EdgeFingers {
            count: a.finger_count,
            width: a.finger_width,
        }
    }

    fn plan_entry(
        &self,
        archetype: PanelArchetype,
        horizontal: BoxAxis,
        vertical: BoxAxis,
        roles: Vec<PanelRole>,
    ) -> PanelPlan {
        PanelPlan {
            archetype,
            dims: PanelDims::new(
                self.geometry.axis(horizontal).outer,
                self.geometry.axis(vertical).outer,
            ),
            spec: FingerSpec {
                horizontal: self.fingers(horizontal),
                vertical: self.fingers(vertical),
            },
            roles,
        }
    }

    /// The outlines to build for the configured box type, in cut order.
    pub fn plan(&self) -> Vec<PanelPlan> {
        use BoxAxis::{Height, Length, Width};
        use PanelRole::*;
        match self.params.box_type {
            BoxType::Closed => vec![
                self.plan_entry(PanelArchetype::LengthWall, Length, Height, vec![Front, Back]),
                self.plan_entry(PanelArchetype::WidthWall, Width, Height, vec![Left, Right]),
                self.plan_entry(PanelArchetype::Base, Length, Width, vec![Bottom, Top]),
            ],
            BoxType::Open => vec![
                self.plan_entry(PanelArchetype::OpenLengthWall, Length, Height, vec![Front, Back]),
                self.plan_entry(PanelArchetype::OpenWidthWall, Width, Height, vec![Left, Right]),
                self.plan_entry(PanelArchetype::Base, Length, Width, vec![Bottom]),
            ],
        }
    }

    /// Build one outline per planned archetype.
    pub fn build_outlines(&self) -> BoxResult<Vec<Panel>> {
        self.plan()
            .iter()
            .map(|plan| {
                build_panel(
                    plan.archetype,
                    plan.dims,
                    &plan.spec,
                    self.geometry.thickness,
                    self.geometry.depth,
                )
            })
            .collect()
    }

    /// Build every outline, then solidify each once per role. The first
    /// failure aborts the request and no partial box is returned.
    pub fn generate<S: Solidifier + ?Sized>(&self, solidifier: &mut S) -> BoxResult<FingerBox> {
        let plan = self.plan();
        let outlines = self.build_outlines()?;
        let panel_count: usize = plan.iter().map(|p| p.roles.len()).sum();

        info!(
            "Generating {} box {}x{}x{} (thickness {}): {} panels",
            self.params.box_type,
            self.params.length,
            self.params.width,
            self.params.height,
            self.params.thickness,
            panel_count
        );

        let mut panels = Vec::with_capacity(panel_count);
        for (entry, panel) in plan.iter().zip(outlines) {
            for role in &entry.roles {
                let body = solidifier
                    .solidify(&panel.outline, self.geometry.thickness)
                    .map_err(|source| BoxError::SolidifyFailure {
                        panel: format!("{} ({})", role, panel.archetype),
                        source,
                    })?;
                debug!("Solidified {} from {}", role, panel.archetype);
                panels.push(SolidPanel {
                    role: *role,
                    panel: panel.clone(),
                    body,
                });
            }
        }

        Ok(FingerBox {
            params: self.params.clone(),
            geometry: self.geometry.clone(),
            panels,
        })
    }
}
