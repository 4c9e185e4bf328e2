//! Finger geometry derived once per box from [`BoxParameters`].

use super::types::{BoxAxis, BoxParameters, BoxType};
use crate::error::{BoxError, BoxResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How many ends of an edge lose one material thickness to a mating panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeEnds {
    /// Mating panels at both ends (every edge of a closed box).
    Both,
    /// A mating panel at one end only (height edges under an open top).
    One,
}

impl EdgeEnds {
    pub fn thickness_loss(&self, thickness: f64) -> f64 {
        match self {
            Self::Both => 2.0 * thickness,
            Self::One => thickness,
        }
    }
}

/// Width of one finger on an edge: the usable length split into
/// `2 * count + 1` equal segments.
pub fn finger_width(edge_length: f64, thickness: f64, count: u32, ends: EdgeEnds) -> f64 {
    (edge_length - ends.thickness_loss(thickness)) / (2.0 * count as f64 + 1.0)
}

/// How far a finger protrudes past the recessed line.
pub fn finger_depth(thickness: f64, overhang: f64) -> f64 {
    if overhang > 0.0 {
        thickness + overhang
    } else {
        thickness
    }
}

/// Per-axis derived quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub axis: BoxAxis,
    /// Nominal dimension as requested.
    pub nominal: f64,
    /// Outer dimension after overhang inflation.
    pub outer: f64,
    pub finger_count: u32,
    pub finger_width: f64,
    pub ends: EdgeEnds,
}

impl AxisGeometry {
    /// Length covered by the `2n + 1` segments of the pattern.
    pub fn span(&self) -> f64 {
        self.finger_width * (2.0 * self.finger_count as f64 + 1.0)
    }
}

/// Immutable derived geometry threaded through outline construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerGeometry {
    pub box_type: BoxType,
    pub thickness: f64,
    pub overhang: f64,
    pub depth: f64,
    pub length: AxisGeometry,
    pub width: AxisGeometry,
    pub height: AxisGeometry,
}

impl FingerGeometry {
    /// Derive finger widths, finger depth and outer dimensions. Parameters
    /// are expected to have passed [`BoxParameters::validate`]; a
    /// non-positive finger width is still reported as `InvalidParameter`.
    pub fn derive(params: &BoxParameters) -> BoxResult<Self> {
        let thickness = params.thickness;
        let overhang = params.overhang;
        let depth = finger_depth(thickness, overhang);

        if overhang > 0.0 {
            warn!(
                "Overhang {} applied: finger depth {}, outer dimensions inflated",
                overhang, depth
            );
        }

        let axis = |axis: BoxAxis| -> BoxResult<AxisGeometry> {
            let nominal = params.dimension(axis);
            let count = params.finger_count(axis);
            let (ends, inflation) = match (params.box_type, axis) {
                (BoxType::Open, BoxAxis::Height) => (EdgeEnds::One, overhang),
                _ => (EdgeEnds::Both, 2.0 * overhang),
            };
            let width = finger_width(nominal, thickness, count, ends);
            if !width.is_finite() || width <= 0.0 {
                return Err(BoxError::invalid_parameter(
                    axis.to_string(),
                    format!(
                        "finger width {:.4} is not positive ({} fingers, thickness {})",
                        width, count, thickness
                    ),
                ));
            }
            debug!(
                "Finger width along {}: {:.4} ({} fingers over {})",
                axis, width, count, nominal
            );
            Ok(AxisGeometry {
                axis,
                nominal,
                outer: nominal + inflation,
                finger_count: count,
                finger_width: width,
                ends,
            })
        };

        Ok(Self {
            box_type: params.box_type,
            thickness,
            overhang,
            depth,
            length: axis(BoxAxis::Length)?,
            width: axis(BoxAxis::Width)?,
            height: axis(BoxAxis::Height)?,
        })
    }

    pub fn axis(&self, axis: BoxAxis) -> &AxisGeometry {
        match axis {
            BoxAxis::Length => &self.length,
            BoxAxis::Width => &self.width,
            BoxAxis::Height => &self.height,
        }
    }
}
