//! Panel outline construction.
//!
//! Every panel is a rectangle of `width x height` in its own XY plane whose
//! four edges are walked counter-clockwise: bottom (+x), right (+y),
//! top (-x), left (-y). Each edge lives in an [`EdgeFrame`] whose local `u`
//! runs along the walk and whose local `v` measures outward from the
//! recessed line, so one routine draws all four edges of all archetypes.

use super::pattern::{generate_edge_points, EdgePhase, EdgeSegment, FingerPattern};
use crate::error::{BoxError, BoxResult};
use fingerbox_core::{ClosedPolygon, GeometryError, Point2D, EPSILON};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The five outline recipes. Numbers match the panel types used in the
/// generation plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelArchetype {
    /// Length x height wall, fingers on all four edges.
    LengthWall = 1,
    /// Length x width face, notches on all four edges.
    Base = 2,
    /// Width x height wall, fingers top and bottom, notches on the sides.
    WidthWall = 3,
    /// [`PanelArchetype::LengthWall`] with a flat top.
    OpenLengthWall = 4,
    /// [`PanelArchetype::WidthWall`] with a flat top.
    OpenWidthWall = 5,
}

/// Which phase each pair of edges carries and whether the top is flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeDescriptor {
    pub horizontal: EdgePhase,
    pub vertical: EdgePhase,
    pub flat_top: bool,
}

impl PanelArchetype {
    pub const ALL: [PanelArchetype; 5] = [
        Self::LengthWall,
        Self::Base,
        Self::WidthWall,
        Self::OpenLengthWall,
        Self::OpenWidthWall,
    ];

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.number() == number)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::LengthWall => "length wall",
            Self::Base => "base",
            Self::WidthWall => "width wall",
            Self::OpenLengthWall => "open length wall",
            Self::OpenWidthWall => "open width wall",
        }
    }

    pub fn descriptor(&self) -> ArchetypeDescriptor {
        use EdgePhase::{Fingers, Notches};
        let (horizontal, vertical, flat_top) = match self {
            Self::LengthWall => (Fingers, Fingers, false),
            Self::Base => (Notches, Notches, false),
            Self::WidthWall => (Fingers, Notches, false),
            Self::OpenLengthWall => (Fingers, Fingers, true),
            Self::OpenWidthWall => (Fingers, Notches, true),
        };
        ArchetypeDescriptor {
            horizontal,
            vertical,
            flat_top,
        }
    }

    /// Vertex count of a well-formed outline: four corners plus two points
    /// per segment boundary on every toothed edge.
    pub fn expected_vertex_count(&self, spec: &FingerSpec) -> usize {
        let h = spec.horizontal.count as usize;
        let v = spec.vertical.count as usize;
        let toothed_horizontal = if self.descriptor().flat_top { h } else { 2 * h };
        4 + 4 * (toothed_horizontal + 2 * v)
    }
}

impl fmt::Display for PanelArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type {} ({})", self.number(), self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSide {
    Bottom,
    Right,
    Top,
    Left,
}

impl EdgeSide {
    /// Walk order.
    pub const ALL: [EdgeSide; 4] = [Self::Bottom, Self::Right, Self::Top, Self::Left];

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }

    fn index(&self) -> usize {
        match self {
            Self::Bottom => 0,
            Self::Right => 1,
            Self::Top => 2,
            Self::Left => 3,
        }
    }
}

impl fmt::Display for EdgeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bottom => write!(f, "bottom edge"),
            Self::Right => write!(f, "right edge"),
            Self::Top => write!(f, "top edge"),
            Self::Left => write!(f, "left edge"),
        }
    }
}

/// Outer size of a panel in its local plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelDims {
    /// Extent along local x (bottom and top edges).
    pub width: f64,
    /// Extent along local y (left and right edges).
    pub height: f64,
}

impl PanelDims {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn edge_length(&self, side: EdgeSide) -> f64 {
        if side.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeFingers {
    pub count: u32,
    pub width: f64,
}

/// Finger counts and widths for the horizontal and vertical edge pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FingerSpec {
    pub horizontal: EdgeFingers,
    pub vertical: EdgeFingers,
}

/// How one edge of a panel is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeLayout {
    pub side: EdgeSide,
    pub length: f64,
    /// Distance walked before the first pattern segment begins.
    pub lead_in: f64,
    /// Distance reserved after the pattern for the corner.
    pub trailing: f64,
    /// `None` for a flat edge.
    pub pattern: Option<FingerPattern>,
}

impl EdgeLayout {
    pub fn is_flat(&self) -> bool {
        self.pattern.is_none()
    }

    /// Outward level at the start of the walk: 0 when recessed, `depth`
    /// when protruding. Flat edges sit on the outer line.
    pub fn start_level(&self, depth: f64) -> f64 {
        match &self.pattern {
            Some(p) if !p.protruding_at_ends() => 0.0,
            _ => depth,
        }
    }

    /// Patterns are symmetric, so both ends share a level.
    pub fn end_level(&self, depth: f64) -> f64 {
        self.start_level(depth)
    }

    /// Pattern segments in panel coordinates (x for horizontal edges, y for
    /// vertical ones), sorted by position. Empty for flat edges.
    pub fn panel_segments(&self) -> Vec<EdgeSegment> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };
        let mut segments = pattern.segments(self.lead_in);
        if matches!(self.side, EdgeSide::Top | EdgeSide::Left) {
            for s in &mut segments {
                let (start, end) = (self.length - s.end, self.length - s.start);
                s.start = start;
                s.end = end;
            }
            segments.reverse();
        }
        segments
    }
}

/// Local frame of one edge.
#[derive(Debug, Clone, Copy)]
struct EdgeFrame {
    origin: Vector2<f64>,
    along: Vector2<f64>,
    outward: Vector2<f64>,
}

impl EdgeFrame {
    fn for_side(side: EdgeSide, dims: &PanelDims, depth: f64) -> Self {
        let (a, b) = (dims.width, dims.height);
        let (origin, along, outward) = match side {
            EdgeSide::Bottom => (
                Vector2::new(0.0, depth),
                Vector2::new(1.0, 0.0),
                Vector2::new(0.0, -1.0),
            ),
            EdgeSide::Right => (
                Vector2::new(a - depth, 0.0),
                Vector2::new(0.0, 1.0),
                Vector2::new(1.0, 0.0),
            ),
            EdgeSide::Top => (
                Vector2::new(a, b - depth),
                Vector2::new(-1.0, 0.0),
                Vector2::new(0.0, 1.0),
            ),
            EdgeSide::Left => (
                Vector2::new(depth, b),
                Vector2::new(0.0, -1.0),
                Vector2::new(-1.0, 0.0),
            ),
        };
        Self {
            origin,
            along,
            outward,
        }
    }

    fn map(&self, u: f64, v: f64) -> Point2D {
        let p = self.origin + self.along * u + self.outward * v;
        Point2D::new(p.x, p.y)
    }
}

/// Lay out all four edges of a panel in walk order.
pub fn edge_layouts(
    archetype: PanelArchetype,
    dims: &PanelDims,
    spec: &FingerSpec,
    depth: f64,
) -> [EdgeLayout; 4] {
    let desc = archetype.descriptor();
    EdgeSide::ALL.map(|side| {
        let length = dims.edge_length(side);
        let (fingers, phase) = if side.is_horizontal() {
            (spec.horizontal, desc.horizontal)
        } else {
            (spec.vertical, desc.vertical)
        };
        if desc.flat_top && side == EdgeSide::Top {
            return EdgeLayout {
                side,
                length,
                lead_in: 0.0,
                trailing: 0.0,
                pattern: None,
            };
        }
        // Under a flat top the vertical pattern starts at the recessed bottom
        // line and runs to the top of the panel.
        let (lead_in, trailing) = match side {
            EdgeSide::Right if desc.flat_top => (depth, 0.0),
            EdgeSide::Left if desc.flat_top => (0.0, depth),
            _ => (depth, depth),
        };
        EdgeLayout {
            side,
            length,
            lead_in,
            trailing,
            pattern: Some(FingerPattern::new(fingers.count, fingers.width, phase)),
        }
    })
}

/// A panel outline together with the layout it was drawn from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub archetype: PanelArchetype,
    pub dims: PanelDims,
    pub thickness: f64,
    pub depth: f64,
    pub outline: ClosedPolygon,
    edges: [EdgeLayout; 4],
}

impl Panel {
    pub fn edge(&self, side: EdgeSide) -> &EdgeLayout {
        &self.edges[side.index()]
    }

    pub fn edges(&self) -> &[EdgeLayout; 4] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.outline.len()
    }
}

fn check_edge(archetype: PanelArchetype, edge: &EdgeLayout) -> BoxResult<()> {
    let Some(pattern) = &edge.pattern else {
        return Ok(());
    };
    let fail = |reason: String| {
        Err(BoxError::invalid_geometry(
            archetype.to_string(),
            edge.side.to_string(),
            reason,
        ))
    };

    if pattern.count == 0 {
        return fail("finger count must be at least 1".to_string());
    }
    if !pattern.width.is_finite() || pattern.width <= 0.0 {
        return fail(format!("finger width {} is not positive", pattern.width));
    }
    let needed = edge.lead_in + pattern.span() + edge.trailing;
    let tolerance = EPSILON * edge.length.abs().max(1.0);
    if needed > edge.length + tolerance {
        return fail(format!(
            "{} fingers of width {:.4} need {:.4} but the edge is {:.4}",
            pattern.count, pattern.width, needed, edge.length
        ));
    }
    Ok(())
}

/// Build the closed outline of one panel.
///
/// Fails with `InvalidJointGeometry` when a pattern does not fit its edge or
/// the resulting outline is degenerate or self-intersecting.
pub fn build_panel(
    archetype: PanelArchetype,
    dims: PanelDims,
    spec: &FingerSpec,
    thickness: f64,
    depth: f64,
) -> BoxResult<Panel> {
    let panel_name = archetype.to_string();

    let edges = edge_layouts(archetype, &dims, spec, depth);
    for edge in &edges {
        check_edge(archetype, edge)?;
    }

    let mut points = Vec::with_capacity(archetype.expected_vertex_count(spec));
    let mut owners = Vec::with_capacity(points.capacity());
    for (i, edge) in edges.iter().enumerate() {
        let previous = &edges[(i + 3) % 4];
        let frame = EdgeFrame::for_side(edge.side, &dims, depth);

        points.push(frame.map(depth - previous.end_level(depth), edge.start_level(depth)));
        owners.push(edge.side);

        if let Some(pattern) = &edge.pattern {
            for local in generate_edge_points(pattern, edge.lead_in, depth, 0.0) {
                points.push(frame.map(local.x, local.y));
                owners.push(edge.side);
            }
        }
    }

    let side_of = |index: usize| owners.get(index).copied().unwrap_or(EdgeSide::Bottom);
    let outline = ClosedPolygon::new(points).map_err(|err| {
        let side = match &err {
            GeometryError::NonFinite { index } => side_of(*index),
            GeometryError::CoincidentVertices { index } => side_of(*index),
            _ => EdgeSide::Bottom,
        };
        BoxError::invalid_geometry(&panel_name, side.to_string(), err.to_string())
    })?;

    if let Err(err) = outline.validate_simple() {
        let side = match &err {
            GeometryError::SelfIntersection { first, .. } => side_of(*first),
            _ => EdgeSide::Bottom,
        };
        return Err(BoxError::invalid_geometry(&panel_name, side.to_string(), err.to_string()));
    }

    debug!(
        "Built {} outline: {}x{}, {} vertices",
        panel_name,
        dims.width,
        dims.height,
        outline.len()
    );

    Ok(Panel {
        archetype,
        dims,
        thickness,
        depth,
        outline,
        edges,
    })
}
