//! Type definitions for the Finger Box Maker

use crate::error::{BoxError, BoxResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxType {
    /// No lid; the wall tops are flat.
    Open,
    /// Lid and base share one outline.
    #[default]
    Closed,
}

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

impl FromStr for BoxType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("Unknown box type: {}", s)),
        }
    }
}

/// One of the three box axes. Every panel edge runs along exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxAxis {
    Length,
    Width,
    Height,
}

impl fmt::Display for BoxAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// User-facing box description. All distances share one length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParameters {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Material thickness
    pub thickness: f64,
    pub box_type: BoxType,
    /// Fingers along each length edge
    pub finger_count_length: u32,
    /// Fingers along each width edge
    pub finger_count_width: u32,
    /// Fingers along each height edge
    pub finger_count_height: u32,
    /// Extra finger protrusion beyond flush, left for sanding after assembly
    pub overhang: f64,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            length: 12.0,
            width: 8.0,
            height: 6.0,
            thickness: 0.5,
            box_type: BoxType::Closed,
            finger_count_length: 6,
            finger_count_width: 4,
            finger_count_height: 4,
            overhang: 0.05,
        }
    }
}

impl BoxParameters {
    pub fn dimension(&self, axis: BoxAxis) -> f64 {
        match axis {
            BoxAxis::Length => self.length,
            BoxAxis::Width => self.width,
            BoxAxis::Height => self.height,
        }
    }

    pub fn finger_count(&self, axis: BoxAxis) -> u32 {
        match axis {
            BoxAxis::Length => self.finger_count_length,
            BoxAxis::Width => self.finger_count_width,
            BoxAxis::Height => self.finger_count_height,
        }
    }

    /// Pre-flight validation. Runs before any geometry is generated.
    pub fn validate(&self) -> BoxResult<()> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
            ("thickness", self.thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoxError::invalid_parameter(
                    name,
                    format!("must be a positive distance, got {}", value),
                ));
            }
        }

        if !self.overhang.is_finite() || self.overhang < 0.0 {
            return Err(BoxError::invalid_parameter(
                "overhang",
                format!("must be zero or positive, got {}", self.overhang),
            ));
        }

        for (name, count) in [
            ("finger_count_length", self.finger_count_length),
            ("finger_count_width", self.finger_count_width),
            ("finger_count_height", self.finger_count_height),
        ] {
            if count < 1 {
                return Err(BoxError::invalid_parameter(name, "must be at least 1"));
            }
        }

        // Both ends of every edge lose one thickness to the mating panel, so
        // anything at or above half a dimension leaves no room for fingers.
        let (axis, smallest) = [BoxAxis::Length, BoxAxis::Width, BoxAxis::Height]
            .into_iter()
            .map(|axis| (axis, self.dimension(axis)))
            .fold((BoxAxis::Length, f64::INFINITY), |best, candidate| {
                if candidate.1 < best.1 {
                    candidate
                } else {
                    best
                }
            });
        if 2.0 * self.thickness >= smallest {
            return Err(BoxError::invalid_parameter(
                "thickness",
                format!(
                    "{} must be less than half the box {} ({})",
                    self.thickness, axis, smallest
                ),
            ));
        }

        Ok(())
    }
}
