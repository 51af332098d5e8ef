use cardiq_core::{synthesize, CardiqError, RecordedLeads};

fn recorded(lead_i: Vec<f64>, lead_ii: Vec<f64>, lead_v1: Vec<f64>, lead_v5: Vec<f64>) -> RecordedLeads {
    RecordedLeads {
        lead_i,
        lead_ii,
        lead_v1,
        lead_v5,
    }
}

#[test]
fn limb_leads_follow_einthoven_goldberger_algebra() {
    let leads = recorded(
        vec![1.0, 2.0],
        vec![3.0, 4.0],
        vec![5.0, 6.0],
        vec![7.0, 8.0],
    );
    let derived = synthesize(&leads).unwrap();

    assert_eq!(derived.lead_iii, vec![2.0, 2.0]); // II - I
    assert_eq!(derived.avr, vec![-2.0, -3.0]); // -(I + II) / 2
    assert_eq!(derived.avf, vec![2.5, 3.0]); // (II + III) / 2
    assert_eq!(derived.avl, vec![-0.5, 0.0]); // (I - III) / 2
}

#[test]
fn chest_leads_apply_the_regression_coefficients() {
    let leads = recorded(vec![1.0], vec![3.0], vec![5.0], vec![7.0]);
    let derived = synthesize(&leads).unwrap();

    assert_eq!(
        derived.v2[0],
        0.088733 * 1.0 - 0.09116 * 3.0 + 1.57862 * 5.0 + 0.230214 * 7.0
    );
    assert_eq!(
        derived.v3[0],
        0.245068 * 1.0 + 0.447773 * 3.0 + 1.14726 * 5.0 + 0.609744 * 7.0
    );
    assert_eq!(
        derived.v4[0],
        0.111111 * 1.0 + 0.064849 * 3.0 + 0.465706 * 5.0 + 1.07423 * 7.0
    );
    assert_eq!(
        derived.v6[0],
        0.202721 * 1.0 + 0.038811 * 3.0 - 0.176913 * 5.0 + 0.59492 * 7.0
    );
}

#[test]
fn each_recorded_lead_isolates_its_own_contribution() {
    // Unit impulses on one lead at a time pick individual coefficients out of
    // the chest-lead combinations.
    let derived = synthesize(&recorded(vec![1.0], vec![0.0], vec![0.0], vec![0.0])).unwrap();
    assert_eq!(derived.v2[0], 0.088733);
    assert_eq!(derived.lead_iii[0], -1.0);

    let derived = synthesize(&recorded(vec![0.0], vec![0.0], vec![1.0], vec![0.0])).unwrap();
    assert_eq!(derived.v2[0], 1.57862);
    assert_eq!(derived.lead_iii[0], 0.0);
}

#[test]
fn length_mismatch_is_reported_before_any_computation() {
    let leads = recorded(vec![1.0, 2.0], vec![3.0], vec![5.0, 6.0], vec![7.0, 8.0]);
    match synthesize(&leads) {
        Err(CardiqError::ShapeMismatch { expected, actual }) => {
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected ShapeMismatch, got {other:?}"),
    }
}

#[test]
fn empty_leads_synthesize_to_empty_leads() {
    let derived = synthesize(&recorded(vec![], vec![], vec![], vec![])).unwrap();
    assert!(derived.lead_iii.is_empty());
    assert!(derived.v6.is_empty());
}
