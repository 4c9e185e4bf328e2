//! Finger pattern generation along a single edge.
//!
//! An edge carries `2n + 1` equal segments. With [`EdgePhase::Fingers`] the
//! odd segments protrude and both ends stay recessed; [`EdgePhase::Notches`]
//! is the complement, protruding at the ends with `n` recesses between.
//! Mating edges always use opposite phases.

use fingerbox_core::Point2D;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgePhase {
    /// `n` protruding fingers, ends recessed.
    Fingers,
    /// `n` recessed notches, ends protruding.
    Notches,
}

impl EdgePhase {
    /// The phase a mating edge must carry.
    pub fn complement(&self) -> Self {
        match self {
            Self::Fingers => Self::Notches,
            Self::Notches => Self::Fingers,
        }
    }
}

/// One segment of a pattern, measured along the edge from its start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub start: f64,
    pub end: f64,
    pub protruding: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerPattern {
    pub count: u32,
    pub width: f64,
    pub phase: EdgePhase,
}

impl FingerPattern {
    pub fn new(count: u32, width: f64, phase: EdgePhase) -> Self {
        Self {
            count,
            width,
            phase,
        }
    }

    pub fn segment_count(&self) -> usize {
        2 * self.count as usize + 1
    }

    /// Total length covered by all segments.
    pub fn span(&self) -> f64 {
        self.width * self.segment_count() as f64
    }

    pub fn is_protruding(&self, index: usize) -> bool {
        let odd = index % 2 == 1;
        match self.phase {
            EdgePhase::Fingers => odd,
            EdgePhase::Notches => !odd,
        }
    }

    pub fn protruding_at_ends(&self) -> bool {
        self.is_protruding(0)
    }

    /// Segments in walk order, offset by `lead_in`. The first and last
    /// segments are reported at their nominal width; the outline builder
    /// stretches them to the panel corners.
    pub fn segments(&self, lead_in: f64) -> Vec<EdgeSegment> {
        (0..self.segment_count())
            .map(|k| EdgeSegment {
                start: lead_in + k as f64 * self.width,
                end: lead_in + (k + 1) as f64 * self.width,
                protruding: self.is_protruding(k),
            })
            .collect()
    }
}

/// Transition points of a pattern in edge-local coordinates: `x` runs along
/// the edge, `y` is the perpendicular offset (`baseline` when recessed,
/// `baseline + depth` when protruding).
///
/// Every segment boundary yields a pair of points, one at the level before
/// and one at the level after, so a tooth is drawn as rise, run and fall.
/// The edge's own end points are not included; they are shared with the
/// neighbouring edges and placed by the outline builder.
pub fn generate_edge_points(
    pattern: &FingerPattern,
    lead_in: f64,
    depth: f64,
    baseline: f64,
) -> Vec<Point2D> {
    let level = |k: usize| {
        if pattern.is_protruding(k) {
            baseline + depth
        } else {
            baseline
        }
    };

    let transitions = 2 * pattern.count as usize;
    let mut points = Vec::with_capacity(2 * transitions);
    for k in 1..=transitions {
        let s = lead_in + k as f64 * pattern.width;
        points.push(Point2D::new(s, level(k - 1)));
        points.push(Point2D::new(s, level(k)));
    }
    points
}
