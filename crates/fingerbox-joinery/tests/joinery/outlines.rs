use fingerbox_joinery::finger_box::EdgeFingers;
use fingerbox_joinery::{
    build_panel, BoxError, BoxParameters, BoxType, EdgeSide, FingerBoxMaker, FingerSpec,
    PanelArchetype, PanelDims,
};

fn panels_for(box_type: BoxType) -> Vec<fingerbox_joinery::Panel> {
    FingerBoxMaker::new(BoxParameters {
        box_type,
        ..Default::default()
    })
    .unwrap()
    .build_outlines()
    .unwrap()
}

#[test]
fn test_every_archetype_is_simple_with_expected_vertices() {
    let mut seen = Vec::new();
    for box_type in [BoxType::Closed, BoxType::Open] {
        let maker = FingerBoxMaker::new(BoxParameters {
            box_type,
            ..Default::default()
        })
        .unwrap();
        for (plan, panel) in maker.plan().iter().zip(maker.build_outlines().unwrap()) {
            assert!(panel.outline.is_simple(), "{} self-intersects", panel.archetype);
            assert!(panel.outline.is_counter_clockwise());

            let h = plan.spec.horizontal.count as usize;
            let v = plan.spec.vertical.count as usize;
            let expected = if panel.archetype.descriptor().flat_top {
                4 + 4 * h + 8 * v
            } else {
                4 + 8 * h + 8 * v
            };
            assert_eq!(panel.vertex_count(), expected, "{}", panel.archetype);
            seen.push(panel.archetype.number());
        }
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_outline_fits_panel_dims() {
    for panel in panels_for(BoxType::Closed) {
        let b = panel.outline.bounds();
        assert!(b.min_x >= -1e-12 && b.min_y >= -1e-12);
        assert!(b.max_x <= panel.dims.width + 1e-12);
        assert!(b.max_y <= panel.dims.height + 1e-12);
    }
}

#[test]
fn test_open_walls_have_flat_top_at_full_height() {
    for panel in panels_for(BoxType::Open) {
        if !panel.archetype.descriptor().flat_top {
            continue;
        }
        let top = panel.edge(EdgeSide::Top);
        assert!(top.is_flat());
        let at_top = panel
            .outline
            .points()
            .iter()
            .filter(|p| (p.y - panel.dims.height).abs() < 1e-12)
            .count();
        assert_eq!(at_top, 2, "{} top should be one straight segment", panel.archetype);
    }
}

#[test]
fn test_builder_is_idempotent() {
    let first = panels_for(BoxType::Closed);
    let second = panels_for(BoxType::Closed);
    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.outline.points(), b.outline.points());
    }
}

#[test]
fn test_protruding_count_matches_finger_count() {
    for panel in panels_for(BoxType::Closed) {
        for edge in panel.edges() {
            let Some(pattern) = &edge.pattern else {
                continue;
            };
            let segments = edge.panel_segments();
            let protruding = segments.iter().filter(|s| s.protruding).count();
            let expected = if pattern.protruding_at_ends() {
                pattern.count as usize + 1
            } else {
                pattern.count as usize
            };
            assert_eq!(protruding, expected);
            assert_eq!(segments.len(), 2 * pattern.count as usize + 1);
        }
    }
}

fn spec(count: u32, width: f64) -> FingerSpec {
    FingerSpec {
        horizontal: EdgeFingers { count, width },
        vertical: EdgeFingers { count, width },
    }
}

#[test]
fn test_too_many_fingers_is_invalid_joint_geometry() {
    let err = build_panel(
        PanelArchetype::Base,
        PanelDims::new(10.0, 10.0),
        &spec(5, 1.0),
        0.5,
        0.5,
    )
    .unwrap_err();
    match err {
        BoxError::InvalidJointGeometry { panel, edge, reason } => {
            assert!(panel.contains("base"));
            assert_eq!(edge, "bottom edge");
            assert!(reason.contains("5 fingers"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_non_positive_width_is_invalid_joint_geometry() {
    for width in [0.0, -0.25, f64::NAN] {
        let err = build_panel(
            PanelArchetype::OpenLengthWall,
            PanelDims::new(10.0, 10.0),
            &spec(2, width),
            0.5,
            0.5,
        )
        .unwrap_err();
        assert!(err.is_invalid_geometry(), "width {} accepted", width);
    }
}

#[test]
fn test_zero_count_is_invalid_joint_geometry() {
    let err = build_panel(
        PanelArchetype::WidthWall,
        PanelDims::new(10.0, 10.0),
        &spec(0, 1.0),
        0.5,
        0.5,
    )
    .unwrap_err();
    assert!(err.is_invalid_geometry());
}

#[test]
fn test_open_box_with_large_overhang_builds() {
    // 2t + overhang >= height, which only the flat-top walls can absorb.
    let params = BoxParameters {
        length: 12.0,
        width: 8.0,
        height: 6.0,
        thickness: 1.0,
        box_type: BoxType::Open,
        overhang: 4.0,
        ..Default::default()
    };
    let maker = FingerBoxMaker::new(params).unwrap();
    let panels = maker.build_outlines().unwrap();
    assert_eq!(panels.len(), 3);
    for (plan, panel) in maker.plan().iter().zip(&panels) {
        assert!(panel.outline.is_simple(), "{} self-intersects", panel.archetype);
        assert_eq!(
            panel.vertex_count(),
            panel.archetype.expected_vertex_count(&plan.spec)
        );
    }
    let finger_box = maker
        .generate(&mut fingerbox_joinery::PrismSolidifier::new())
        .unwrap();
    assert_eq!(finger_box.len(), 5);
}
