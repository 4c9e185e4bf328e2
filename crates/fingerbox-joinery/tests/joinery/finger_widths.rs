use fingerbox_joinery::{BoxAxis, BoxError, BoxParameters, BoxType, FingerBoxMaker, FingerGeometry};

fn scenario() -> BoxParameters {
    BoxParameters {
        length: 12.0,
        width: 8.0,
        height: 6.0,
        thickness: 0.5,
        box_type: BoxType::Closed,
        finger_count_length: 6,
        finger_count_width: 4,
        finger_count_height: 4,
        overhang: 0.0,
    }
}

#[test]
fn test_boundary_scenario_widths() {
    let g = FingerGeometry::derive(&scenario()).unwrap();
    assert!((g.length.finger_width - 11.0 / 13.0).abs() < 1e-12);
    assert!((g.width.finger_width - 7.0 / 9.0).abs() < 1e-12);
    assert!((g.height.finger_width - 5.0 / 9.0).abs() < 1e-12);
    assert!((g.length.finger_width - 0.8462).abs() < 1e-4);
    assert!((g.width.finger_width - 0.7778).abs() < 1e-4);
    assert!((g.height.finger_width - 0.5556).abs() < 1e-4);
}

#[test]
fn test_boundary_scenario_builds_all_panels() {
    let maker = FingerBoxMaker::new(scenario()).unwrap();
    let panels = maker.build_outlines().unwrap();
    assert_eq!(panels.len(), 3);
    for panel in &panels {
        assert!(panel.outline.is_simple());
        assert!(panel.outline.area() > 0.0);
    }
}

#[test]
fn test_overhang_depth_and_inflation() {
    let plain = FingerGeometry::derive(&scenario()).unwrap();
    let inflated = FingerGeometry::derive(&BoxParameters {
        overhang: 0.05,
        ..scenario()
    })
    .unwrap();

    assert!((inflated.depth - 0.55).abs() < 1e-12);
    for axis in [BoxAxis::Length, BoxAxis::Width, BoxAxis::Height] {
        let delta = inflated.axis(axis).outer - plain.axis(axis).outer;
        assert!((delta - 0.10).abs() < 1e-12, "{} inflated by {}", axis, delta);
        // Finger widths are unaffected; only the protrusion grows.
        assert!((inflated.axis(axis).finger_width - plain.axis(axis).finger_width).abs() < 1e-12);
    }
}

#[test]
fn test_invalid_scenario_rejected_before_build() {
    let result = FingerBoxMaker::new(BoxParameters {
        thickness: 4.0,
        ..scenario()
    });
    match result {
        Err(BoxError::InvalidParameter { name, .. }) => assert_eq!(name, "thickness"),
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("thickness 4 on a height of 6 must be rejected"),
    }
}

#[test]
fn test_open_box_height_loses_one_thickness() {
    let g = FingerGeometry::derive(&BoxParameters {
        box_type: BoxType::Open,
        ..scenario()
    })
    .unwrap();
    assert!((g.height.finger_width - 5.5 / 9.0).abs() < 1e-12);
    assert!((g.length.finger_width - 11.0 / 13.0).abs() < 1e-12);
}
