//! # fingerbox core
//!
//! Geometry primitives shared by the fingerbox crates: points, bounding
//! boxes and closed panel outlines with simplicity checking.

pub mod error;
pub mod geometry;

pub use error::{GeometryError, GeometryResult};
pub use geometry::{Bounds, ClosedPolygon, Point2D, EPSILON};
