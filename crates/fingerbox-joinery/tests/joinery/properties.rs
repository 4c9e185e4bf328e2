use fingerbox_joinery::{BoxAxis, BoxParameters, BoxType, FingerBoxMaker, FingerGeometry};
use proptest::prelude::*;

fn valid_params() -> impl Strategy<Value = BoxParameters> {
    (
        5.0f64..60.0,
        5.0f64..60.0,
        5.0f64..60.0,
        0.1f64..1.5,
        prop::bool::ANY,
        1u32..10,
        1u32..10,
        1u32..10,
        prop_oneof![Just(0.0), 0.0f64..0.3],
    )
        .prop_map(|(length, width, height, thickness, open, fl, fw, fh, overhang)| {
            BoxParameters {
                length,
                width,
                height,
                thickness,
                box_type: if open { BoxType::Open } else { BoxType::Closed },
                finger_count_length: fl,
                finger_count_width: fw,
                finger_count_height: fh,
                overhang,
            }
        })
}

proptest! {
    #[test]
    fn finger_widths_reconstruct_usable_length(params in valid_params()) {
        let g = FingerGeometry::derive(&params).unwrap();
        for axis in [BoxAxis::Length, BoxAxis::Width, BoxAxis::Height] {
            let a = g.axis(axis);
            prop_assert!(a.finger_width > 0.0);
            let usable = a.nominal - a.ends.thickness_loss(params.thickness);
            prop_assert!((a.span() - usable).abs() < 1e-9);
        }
    }

    #[test]
    fn outlines_are_simple_with_expected_counts(params in valid_params()) {
        let maker = FingerBoxMaker::new(params).unwrap();
        for (plan, panel) in maker.plan().iter().zip(maker.build_outlines().unwrap()) {
            prop_assert!(panel.outline.is_simple());
            prop_assert_eq!(panel.vertex_count(), plan.archetype.expected_vertex_count(&plan.spec));
        }
    }

    #[test]
    fn outline_building_is_idempotent(params in valid_params()) {
        let maker = FingerBoxMaker::new(params).unwrap();
        prop_assert_eq!(maker.build_outlines().unwrap(), maker.build_outlines().unwrap());
    }
}
