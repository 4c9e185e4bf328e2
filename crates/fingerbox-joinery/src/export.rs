//! Writers for generated boxes: laser G-code, SVG cut sheets, STL meshes
//! and a JSON summary.

pub mod gcode;
pub mod report;
pub mod stl;
pub mod svg;

pub use gcode::{to_gcode, LaserSettings};
pub use report::{BoxReport, PanelReport};
pub use stl::{write_stl, write_stl_file};
pub use svg::to_svg;
