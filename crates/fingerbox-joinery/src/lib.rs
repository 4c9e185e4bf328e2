//! # fingerbox joinery
//!
//! Parametric finger-joint boxes: from box dimensions, material thickness
//! and per-edge finger counts to flat panel outlines with interlocking
//! fingers and notches, solid panel bodies and cut files.
//!
//! ## Pipeline
//!
//! - **Finger Pattern Generator**: alternating finger and notch segments along one edge
//! - **Panel Outline Builder**: four edges stitched into one closed outline per panel archetype
//! - **Finger Box Maker**: validates parameters, plans the panels for open or closed boxes and solidifies them
//!
//! ## Output
//!
//! - **Solidifier**: extrusion seam with a lyon-tessellated prism implementation
//! - **Sheet Layout**: flat placement of all panels for cutting
//! - **Exporters**: laser G-code, SVG, binary STL and a JSON report

pub mod error;
pub mod export;
pub mod finger_box;
pub mod solidify;

// Re-export commonly used items
pub use error::{BoxError, BoxResult, ExportError, ExportResult, SolidifyError};
pub use export::{to_gcode, to_svg, write_stl, write_stl_file, BoxReport, LaserSettings};
pub use finger_box::{
    build_panel, generate_edge_points, BoxAxis, BoxParameters, BoxType, EdgePhase, EdgeSide,
    FingerBox, FingerBoxMaker, FingerGeometry, FingerPattern, FingerSpec, LayoutSettings, Panel,
    PanelArchetype, PanelDims, PanelRole, SheetLayout, SolidPanel,
};
pub use solidify::{PrismSolidifier, SolidBody, Solidifier, Triangle};
