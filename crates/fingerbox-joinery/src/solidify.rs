//! Turning closed outlines into solid panel bodies.
//!
//! [`Solidifier`] is the seam to whatever CAD kernel hosts the generator.
//! [`PrismSolidifier`] extrudes an outline straight along +Z into a closed
//! triangle mesh, which is all a flat cut panel needs.

use crate::error::SolidifyError;
use fingerbox_core::{ClosedPolygon, Point2D};
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};
use nalgebra::{Point3, Vector3};

/// Extrudes a closed outline into a solid of uniform thickness.
pub trait Solidifier {
    fn solidify(
        &mut self,
        outline: &ClosedPolygon,
        thickness: f64,
    ) -> Result<SolidBody, SolidifyError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub normal: Vector3<f64>,
    pub vertices: [Point3<f64>; 3],
}

impl Triangle {
    /// Builds a triangle with the normal implied by its winding.
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        let normal = (b - a).cross(&(c - a));
        let normal = if normal.norm() > 0.0 {
            normal.normalize()
        } else {
            Vector3::zeros()
        };
        Self {
            normal,
            vertices: [a, b, c],
        }
    }

    fn translated(&self, offset: &Vector3<f64>) -> Self {
        Self {
            normal: self.normal,
            vertices: self.vertices.map(|v| v + offset),
        }
    }
}

/// A solid panel body lying on the XY plane, `thickness` deep along +Z.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidBody {
    pub outline: ClosedPolygon,
    pub thickness: f64,
    pub triangles: Vec<Triangle>,
}

impl SolidBody {
    /// Nominal volume: outline area times thickness.
    pub fn volume(&self) -> f64 {
        self.outline.area() * self.thickness
    }

    /// Volume enclosed by the triangle mesh (divergence theorem). Matches
    /// [`SolidBody::volume`] for a closed, outward-facing mesh.
    pub fn mesh_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.vertices;
                a.coords.dot(&b.coords.cross(&c.coords))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Axis-aligned bounds as (min, max) corners.
    pub fn bounds(&self) -> (Point3<f64>, Point3<f64>) {
        let b = self.outline.bounds();
        (
            Point3::new(b.min_x, b.min_y, 0.0),
            Point3::new(b.max_x, b.max_y, self.thickness),
        )
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let offset = Vector3::new(dx, dy, 0.0);
        Self {
            outline: self.outline.translated(dx, dy),
            thickness: self.thickness,
            triangles: self.triangles.iter().map(|t| t.translated(&offset)).collect(),
        }
    }
}

/// Straight extrusion with caps triangulated by lyon.
#[derive(Debug, Clone, Copy)]
pub struct PrismSolidifier {
    options: FillOptions,
}

impl Default for PrismSolidifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PrismSolidifier {
    pub fn new() -> Self {
        Self {
            options: FillOptions::default(),
        }
    }

    /// Triangulate the outline and return index triples into its vertex
    /// list, each wound counter-clockwise.
    fn triangulate_cap(&self, points: &[Point2D]) -> Result<Vec<[usize; 3]>, SolidifyError> {
        let mut builder = Path::builder();
        builder.begin(point(points[0].x as f32, points[0].y as f32));
        for p in &points[1..] {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(true);
        let path = builder.build();

        let mut buffers: VertexBuffers<lyon::math::Point, u32> = VertexBuffers::new();
        FillTessellator::new()
            .tessellate_path(
                &path,
                &self.options,
                &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| vertex.position()),
            )
            .map_err(|e| SolidifyError::Tessellation(format!("{:?}", e)))?;

        // lyon works in f32; snap its vertices back onto the exact outline.
        let extent = points
            .iter()
            .fold(1.0_f64, |m, p| m.max(p.x.abs()).max(p.y.abs()));
        let tolerance = extent * 1e-4;
        let mut snapped = Vec::with_capacity(buffers.vertices.len());
        for v in &buffers.vertices {
            let (x, y) = (v.x as f64, v.y as f64);
            let nearest = points
                .iter()
                .enumerate()
                .map(|(i, p)| (i, (p.x - x).hypot(p.y - y)))
                .min_by(|a, b| a.1.total_cmp(&b.1));
            match nearest {
                Some((index, distance)) if distance <= tolerance => snapped.push(index),
                _ => {
                    return Err(SolidifyError::Tessellation(format!(
                        "tessellator introduced vertex ({}, {}) not on the outline",
                        x, y
                    )))
                }
            }
        }

        let mut triangles = Vec::with_capacity(buffers.indices.len() / 3);
        for tri in buffers.indices.chunks_exact(3) {
            let [a, b, c] = [
                snapped[tri[0] as usize],
                snapped[tri[1] as usize],
                snapped[tri[2] as usize],
            ];
            let (pa, pb, pc) = (points[a], points[b], points[c]);
            let cross = (pb.x - pa.x) * (pc.y - pa.y) - (pb.y - pa.y) * (pc.x - pa.x);
            if cross > 0.0 {
                triangles.push([a, b, c]);
            } else if cross < 0.0 {
                triangles.push([a, c, b]);
            }
        }

        if triangles.is_empty() {
            return Err(SolidifyError::Tessellation(
                "outline produced no cap triangles".to_string(),
            ));
        }
        Ok(triangles)
    }
}

impl Solidifier for PrismSolidifier {
    fn solidify(
        &mut self,
        outline: &ClosedPolygon,
        thickness: f64,
    ) -> Result<SolidBody, SolidifyError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(SolidifyError::NonPositiveThickness(thickness));
        }
        if outline.len() < 3 || outline.area() <= 0.0 {
            return Err(SolidifyError::DegenerateOutline(format!(
                "{} vertices, area {}",
                outline.len(),
                outline.area()
            )));
        }

        let mut points = outline.points().to_vec();
        if !outline.is_counter_clockwise() {
            points.reverse();
        }

        let cap = self.triangulate_cap(&points)?;
        let bottom = |i: usize| Point3::new(points[i].x, points[i].y, 0.0);
        let top = |i: usize| Point3::new(points[i].x, points[i].y, thickness);

        let mut triangles = Vec::with_capacity(2 * cap.len() + 2 * points.len());
        for [a, b, c] in &cap {
            triangles.push(Triangle::new(top(*a), top(*b), top(*c)));
            triangles.push(Triangle::new(bottom(*a), bottom(*c), bottom(*b)));
        }

        let n = points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            triangles.push(Triangle::new(bottom(i), bottom(j), top(j)));
            triangles.push(Triangle::new(bottom(i), top(j), top(i)));
        }

        Ok(SolidBody {
            outline: outline.clone(),
            thickness,
            triangles,
        })
    }
}
