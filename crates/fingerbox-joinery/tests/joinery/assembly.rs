use fingerbox_core::ClosedPolygon;
use fingerbox_joinery::{
    BoxError, BoxParameters, BoxType, FingerBoxMaker, PanelRole, PrismSolidifier, SolidBody,
    Solidifier, SolidifyError,
};

/// Records every call and returns an empty body.
#[derive(Default)]
struct RecordingSolidifier {
    calls: Vec<(usize, f64)>,
}

impl Solidifier for RecordingSolidifier {
    fn solidify(
        &mut self,
        outline: &ClosedPolygon,
        thickness: f64,
    ) -> Result<SolidBody, SolidifyError> {
        self.calls.push((outline.len(), thickness));
        Ok(SolidBody {
            outline: outline.clone(),
            thickness,
            triangles: Vec::new(),
        })
    }
}

/// Fails on the n-th call.
struct FailingSolidifier {
    fail_on: usize,
    calls: usize,
}

impl Solidifier for FailingSolidifier {
    fn solidify(
        &mut self,
        outline: &ClosedPolygon,
        thickness: f64,
    ) -> Result<SolidBody, SolidifyError> {
        self.calls += 1;
        if self.calls == self.fail_on {
            return Err(SolidifyError::DegenerateOutline("rejected".to_string()));
        }
        Ok(SolidBody {
            outline: outline.clone(),
            thickness,
            triangles: Vec::new(),
        })
    }
}

#[test]
fn test_closed_box_solidifies_six_panels() {
    let mut solidifier = RecordingSolidifier::default();
    let finger_box = FingerBoxMaker::new(BoxParameters::default())
        .unwrap()
        .generate(&mut solidifier)
        .unwrap();

    assert_eq!(finger_box.len(), 6);
    assert_eq!(solidifier.calls.len(), 6);
    assert!(solidifier.calls.iter().all(|(_, t)| *t == 0.5));

    let roles: Vec<PanelRole> = finger_box.panels.iter().map(|p| p.role).collect();
    assert_eq!(
        roles,
        vec![
            PanelRole::Front,
            PanelRole::Back,
            PanelRole::Left,
            PanelRole::Right,
            PanelRole::Bottom,
            PanelRole::Top
        ]
    );
    // Each outline is solidified twice: once per role.
    assert_eq!(solidifier.calls[0], solidifier.calls[1]);
    assert_eq!(solidifier.calls[4], solidifier.calls[5]);
}

#[test]
fn test_open_box_solidifies_five_panels() {
    let mut solidifier = RecordingSolidifier::default();
    let finger_box = FingerBoxMaker::new(BoxParameters {
        box_type: BoxType::Open,
        ..Default::default()
    })
    .unwrap()
    .generate(&mut solidifier)
    .unwrap();

    assert_eq!(finger_box.len(), 5);
    assert_eq!(solidifier.calls.len(), 5);
    assert!(finger_box.panel(PanelRole::Top).is_none());
    let archetypes: Vec<u8> = finger_box
        .panels
        .iter()
        .map(|p| p.panel.archetype.number())
        .collect();
    assert_eq!(archetypes, vec![4, 4, 5, 5, 2]);
}

#[test]
fn test_solidify_failure_aborts_whole_request() {
    let mut solidifier = FailingSolidifier {
        fail_on: 3,
        calls: 0,
    };
    let err = FingerBoxMaker::new(BoxParameters::default())
        .unwrap()
        .generate(&mut solidifier)
        .unwrap_err();

    assert_eq!(solidifier.calls, 3);
    match err {
        BoxError::SolidifyFailure { panel, source } => {
            assert!(panel.starts_with("Left"));
            assert_eq!(source, SolidifyError::DegenerateOutline("rejected".to_string()));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_invalid_parameters_never_reach_solidifier() {
    let params = BoxParameters {
        finger_count_length: 0,
        ..Default::default()
    };
    let mut solidifier = RecordingSolidifier::default();
    let result = FingerBoxMaker::new(params).and_then(|maker| maker.generate(&mut solidifier));
    assert!(result.unwrap_err().is_invalid_parameter());
    assert!(solidifier.calls.is_empty());
}

#[test]
fn test_prism_bodies_match_outline_volume() {
    let finger_box = FingerBoxMaker::new(BoxParameters::default())
        .unwrap()
        .generate(&mut PrismSolidifier::new())
        .unwrap();
    for panel in &finger_box.panels {
        let expected = panel.panel.outline.area() * 0.5;
        assert!((panel.body.volume() - expected).abs() < 1e-9);
        assert!(
            (panel.body.mesh_volume() - expected).abs() < 1e-6,
            "{} mesh volume {} vs {}",
            panel.label(),
            panel.body.mesh_volume(),
            expected
        );
    }
}
