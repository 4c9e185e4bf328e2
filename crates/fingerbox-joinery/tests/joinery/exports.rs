use fingerbox_joinery::{
    to_gcode, to_svg, write_stl_file, BoxParameters, BoxReport, FingerBox, FingerBoxMaker,
    LaserSettings, LayoutSettings, PrismSolidifier, SheetLayout,
};
use std::fs;
use tempfile::TempDir;

fn generated() -> (FingerBox, SheetLayout) {
    let finger_box = FingerBoxMaker::new(BoxParameters::default())
        .unwrap()
        .generate(&mut PrismSolidifier::new())
        .unwrap();
    let layout = SheetLayout::arrange(
        &finger_box,
        &LayoutSettings {
            offset_x: 1.0,
            offset_y: 1.0,
            ..Default::default()
        },
    );
    (finger_box, layout)
}

#[test]
fn test_write_all_outputs() {
    let (finger_box, layout) = generated();
    let dir = TempDir::new().unwrap();

    let svg_path = dir.path().join("box.svg");
    fs::write(&svg_path, to_svg(&layout).unwrap()).unwrap();
    let svg = fs::read_to_string(&svg_path).unwrap();
    assert_eq!(svg.matches("<path ").count(), 6);

    let gcode_path = dir.path().join("box.gcode");
    fs::write(
        &gcode_path,
        to_gcode(&finger_box, &layout, &LaserSettings::default()).unwrap(),
    )
    .unwrap();
    let gcode = fs::read_to_string(&gcode_path).unwrap();
    assert!(gcode.contains("; Panel 1: Front (type 1)"));

    let stl_path = dir.path().join("box.stl");
    write_stl_file(&finger_box, &layout, &stl_path).unwrap();
    let triangles: usize = finger_box.panels.iter().map(|p| p.body.triangles.len()).sum();
    assert_eq!(fs::metadata(&stl_path).unwrap().len() as usize, 84 + 50 * triangles);
}

#[test]
fn test_gcode_coordinates_respect_sheet_offset() {
    let (finger_box, layout) = generated();
    let gcode = to_gcode(&finger_box, &layout, &LaserSettings::default()).unwrap();
    for line in gcode.lines().filter(|l| l.starts_with("G1 X")) {
        let x: f64 = line
            .split_whitespace()
            .find_map(|w| w.strip_prefix('X'))
            .and_then(|v| v.parse().ok())
            .unwrap();
        assert!(x >= 1.0 - 1e-3, "{}", line);
    }
}

#[test]
fn test_stl_to_missing_directory_fails() {
    let (finger_box, layout) = generated();
    let dir = TempDir::new().unwrap();
    let result = write_stl_file(&finger_box, &layout, dir.path().join("missing/box.stl"));
    assert!(matches!(result, Err(fingerbox_joinery::ExportError::Io(_))));
}

#[test]
fn test_report_counts_vertices() {
    let (finger_box, _) = generated();
    let report = BoxReport::from_box(&finger_box);
    for (entry, panel) in report.panels.iter().zip(&finger_box.panels) {
        assert_eq!(entry.vertices, panel.panel.outline.len());
    }
    assert!((report.total_volume - finger_box.total_volume()).abs() < 1e-12);
}
