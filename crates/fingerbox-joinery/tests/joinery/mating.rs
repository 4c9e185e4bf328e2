use fingerbox_joinery::{BoxParameters, BoxType, EdgeSide, FingerBoxMaker, Panel, PanelArchetype};

fn outlines(box_type: BoxType) -> Vec<Panel> {
    FingerBoxMaker::new(BoxParameters {
        box_type,
        ..Default::default()
    })
    .unwrap()
    .build_outlines()
    .unwrap()
}

fn find(panels: &[Panel], archetype: PanelArchetype) -> &Panel {
    panels
        .iter()
        .find(|p| p.archetype == archetype)
        .unwrap_or_else(|| panic!("{} not generated", archetype))
}

/// Fingers on one edge must sit exactly where the other edge is recessed.
fn assert_mates(a: &Panel, a_side: EdgeSide, b: &Panel, b_side: EdgeSide) {
    let a_edge = a.edge(a_side);
    let b_edge = b.edge(b_side);
    assert!((a_edge.length - b_edge.length).abs() < 1e-9);

    let a_segments = a_edge.panel_segments();
    let b_segments = b_edge.panel_segments();
    assert_eq!(a_segments.len(), b_segments.len());
    assert!(!a_segments.is_empty());
    for (x, y) in a_segments.iter().zip(&b_segments) {
        assert!(
            (x.start - y.start).abs() < 1e-9,
            "{} {} vs {} {}",
            a.archetype,
            a_side,
            b.archetype,
            b_side
        );
        assert!((x.end - y.end).abs() < 1e-9);
        assert_ne!(x.protruding, y.protruding);
    }
}

#[test]
fn test_closed_box_edges_mate() {
    let panels = outlines(BoxType::Closed);
    let length_wall = find(&panels, PanelArchetype::LengthWall);
    let width_wall = find(&panels, PanelArchetype::WidthWall);
    let base = find(&panels, PanelArchetype::Base);

    // Length walls onto bottom and lid.
    assert_mates(length_wall, EdgeSide::Bottom, base, EdgeSide::Bottom);
    assert_mates(length_wall, EdgeSide::Top, base, EdgeSide::Top);
    // Width walls onto bottom and lid.
    assert_mates(width_wall, EdgeSide::Bottom, base, EdgeSide::Left);
    assert_mates(width_wall, EdgeSide::Top, base, EdgeSide::Right);
    // Wall corners.
    assert_mates(length_wall, EdgeSide::Right, width_wall, EdgeSide::Left);
    assert_mates(length_wall, EdgeSide::Left, width_wall, EdgeSide::Right);
}

#[test]
fn test_open_box_edges_mate() {
    let panels = outlines(BoxType::Open);
    let length_wall = find(&panels, PanelArchetype::OpenLengthWall);
    let width_wall = find(&panels, PanelArchetype::OpenWidthWall);
    let base = find(&panels, PanelArchetype::Base);

    assert_mates(length_wall, EdgeSide::Bottom, base, EdgeSide::Bottom);
    assert_mates(width_wall, EdgeSide::Bottom, base, EdgeSide::Right);
    assert_mates(length_wall, EdgeSide::Right, width_wall, EdgeSide::Left);
    assert_mates(length_wall, EdgeSide::Left, width_wall, EdgeSide::Right);
}

#[test]
fn test_open_wall_pattern_starts_above_base() {
    let panels = outlines(BoxType::Open);
    let wall = find(&panels, PanelArchetype::OpenLengthWall);
    let segments = wall.edge(EdgeSide::Right).panel_segments();
    let first = segments.first().unwrap();
    let last = segments.last().unwrap();
    assert!((first.start - wall.depth).abs() < 1e-9);
    assert!((last.end - wall.dims.height).abs() < 1e-9);
}
