//! 2D geometry primitives
//!
//! Panel outlines are plain ordered vertex lists in the panel's local XY
//! plane. The closing edge from the last vertex back to the first is
//! implicit and never stored.

use crate::error::{GeometryError, GeometryResult};
use serde::{Deserialize, Serialize};

/// Absolute tolerance used for coordinate comparisons.
pub const EPSILON: f64 = 1e-9;

/// A point in a panel's local 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    /// True when both coordinates agree within `tolerance`.
    pub fn approx_eq(&self, other: &Point2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box of a point set, `None` when the set is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2D>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in iter {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A closed outline. Vertices are stored once; the polygon closes from the
/// last vertex back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedPolygon {
    points: Vec<Point2D>,
}

impl ClosedPolygon {
    /// Build an outline, rejecting fewer than three vertices, non-finite
    /// coordinates, coincident neighbours and zero enclosed area.
    ///
    /// Self-intersection is not checked here; see [`ClosedPolygon::validate_simple`].
    pub fn new(points: Vec<Point2D>) -> GeometryResult<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewVertices(points.len()));
        }

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(GeometryError::NonFinite { index });
        }

        let n = points.len();
        for i in 0..n {
            let next = (i + 1) % n;
            if points[i].approx_eq(&points[next], EPSILON) {
                return Err(GeometryError::CoincidentVertices { index: next });
            }
        }

        let polygon = Self { points };
        if polygon.signed_area().abs() <= EPSILON {
            return Err(GeometryError::ZeroArea);
        }
        Ok(polygon)
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges in order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area; positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f64 {
        let twice: f64 = self
            .edges()
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .sum();
        twice / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| a.distance_to(&b)).sum()
    }

    pub fn bounds(&self) -> Bounds {
        // `new` guarantees at least three vertices.
        Bounds::from_points(&self.points).unwrap_or(Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
        })
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translated(dx, dy)).collect(),
        }
    }

    /// Returns the first pair of edges that cross, touch or fold back onto
    /// each other.
    pub fn find_self_intersection(&self) -> Option<(usize, usize)> {
        let n = self.points.len();
        for i in 0..n {
            let (a, b) = (self.points[i], self.points[(i + 1) % n]);
            for j in (i + 1)..n {
                let (c, d) = (self.points[j], self.points[(j + 1) % n]);
                let adjacent = j == i + 1 || (i == 0 && j == n - 1);
                if adjacent {
                    // Neighbours share exactly one vertex; they only conflict
                    // when the second edge doubles back along the first.
                    let (shared, far_a, far_b) = if j == i + 1 { (b, a, d) } else { (a, b, c) };
                    if orientation(far_a, shared, far_b) == 0
                        && dot(sub(far_a, shared), sub(far_b, shared)) > 0.0
                    {
                        return Some((i, j));
                    }
                    continue;
                }
                if segments_intersect(a, b, c, d) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    pub fn is_simple(&self) -> bool {
        self.find_self_intersection().is_none()
    }

    pub fn validate_simple(&self) -> GeometryResult<()> {
        match self.find_self_intersection() {
            Some((first, second)) => Err(GeometryError::SelfIntersection { first, second }),
            None => Ok(()),
        }
    }
}

fn sub(a: Point2D, b: Point2D) -> (f64, f64) {
    (a.x - b.x, a.y - b.y)
}

fn dot(u: (f64, f64), v: (f64, f64)) -> f64 {
    u.0 * v.0 + u.1 * v.1
}

fn orientation(a: Point2D, b: Point2D, c: Point2D) -> i8 {
    let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if cross > EPSILON {
        1
    } else if cross < -EPSILON {
        -1
    } else {
        0
    }
}

fn on_segment(a: Point2D, b: Point2D, p: Point2D) -> bool {
    p.x >= a.x.min(b.x) - EPSILON
        && p.x <= a.x.max(b.x) + EPSILON
        && p.y >= a.y.min(b.y) - EPSILON
        && p.y <= a.y.max(b.y) + EPSILON
}

fn segments_intersect(a: Point2D, b: Point2D, c: Point2D, d: Point2D) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 != o2 && o3 != o4 && o1 != 0 && o2 != 0 && o3 != 0 && o4 != 0 {
        return true;
    }

    (o1 == 0 && on_segment(a, b, c))
        || (o2 == 0 && on_segment(a, b, d))
        || (o3 == 0 && on_segment(c, d, a))
        || (o4 == 0 && on_segment(c, d, b))
}
