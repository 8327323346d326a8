use crate::domain::delivery::{DeliveryInput, DismissalKind};
use crate::domain::test_state_helpers::in_progress_state;
use crate::domain::validate::validate;
use crate::errors::domain::{DomainError, ValidationKind};

fn input() -> DeliveryInput {
    DeliveryInput {
        innings: 1,
        ..Default::default()
    }
}

#[test]
fn plain_delivery_passes() {
    let state = in_progress_state(1);
    assert!(validate(&state, &input()).is_ok());
}

#[test]
fn non_positive_innings_rejected() {
    let state = in_progress_state(1);
    let bad = DeliveryInput {
        innings: 0,
        ..Default::default()
    };
    assert!(matches!(
        validate(&state, &bad),
        Err(DomainError::Validation(ValidationKind::InvalidInnings, _))
    ));
}

#[test]
fn unresolved_striker_rejected() {
    let mut state = in_progress_state(1);
    state.striker_id = None;
    assert!(matches!(
        validate(&state, &input()),
        Err(DomainError::Validation(ValidationKind::StrikerNotSet, _))
    ));
}

#[test]
fn unresolved_bowler_rejected() {
    let mut state = in_progress_state(1);
    state.current_bowler_id = Some(String::new());
    assert!(matches!(
        validate(&state, &input()),
        Err(DomainError::Validation(ValidationKind::BowlerNotSet, _))
    ));
}

#[test]
fn negative_runs_rejected() {
    let state = in_progress_state(1);
    let bad = DeliveryInput {
        runs: -1,
        ..input()
    };
    assert!(matches!(
        validate(&state, &bad),
        Err(DomainError::Validation(ValidationKind::NegativeRuns, _))
    ));

    let bad = DeliveryInput {
        running_runs: -2,
        ..input()
    };
    assert!(matches!(
        validate(&state, &bad),
        Err(DomainError::Validation(ValidationKind::NegativeRuns, _))
    ));
}

#[test]
fn negative_extra_runs_rejected() {
    let state = in_progress_state(1);
    let bad = DeliveryInput {
        extra_runs: -1,
        ..input()
    };
    assert!(matches!(
        validate(&state, &bad),
        Err(DomainError::Validation(ValidationKind::NegativeExtraRuns, _))
    ));
}

#[test]
fn wicket_without_dismissal_rejected() {
    let state = in_progress_state(1);
    let bad = DeliveryInput {
        wicket: true,
        ..input()
    };
    assert!(matches!(
        validate(&state, &bad),
        Err(DomainError::Validation(ValidationKind::MissingDismissal, _))
    ));
}

#[test]
fn new_batter_without_wicket_rejected() {
    let state = in_progress_state(1);
    let bad = DeliveryInput {
        new_batter_id: Some("a3".into()),
        ..input()
    };
    assert!(matches!(
        validate(&state, &bad),
        Err(DomainError::Validation(
            ValidationKind::NewBatterWithoutWicket,
            _
        ))
    ));
}

#[test]
fn boundary_must_be_four_or_six() {
    let state = in_progress_state(1);
    for runs in [1, 3, 5, 7] {
        let bad = DeliveryInput {
            boundary: true,
            boundary_runs: runs,
            ..input()
        };
        assert!(matches!(
            validate(&state, &bad),
            Err(DomainError::Validation(
                ValidationKind::InvalidBoundaryRuns,
                _
            ))
        ));
    }

    for runs in [4, 6] {
        let ok = DeliveryInput {
            boundary: true,
            boundary_runs: runs,
            ..input()
        };
        assert!(validate(&state, &ok).is_ok());
    }
}

#[test]
fn boundary_runs_without_flag_rejected() {
    let state = in_progress_state(1);
    let bad = DeliveryInput {
        boundary: false,
        boundary_runs: 4,
        ..input()
    };
    assert!(matches!(
        validate(&state, &bad),
        Err(DomainError::Validation(
            ValidationKind::BoundaryRunsWithoutBoundary,
            _
        ))
    ));
}

#[test]
fn six_cannot_be_an_overthrow() {
    let state = in_progress_state(1);
    let bad = DeliveryInput {
        boundary: true,
        boundary_runs: 6,
        overthrow: true,
        ..input()
    };
    assert!(matches!(
        validate(&state, &bad),
        Err(DomainError::Validation(ValidationKind::OverthrowSix, _))
    ));

    // A four off an overthrow is fine.
    let ok = DeliveryInput {
        boundary: true,
        boundary_runs: 4,
        overthrow: true,
        ..input()
    };
    assert!(validate(&state, &ok).is_ok());
}

#[test]
fn wicket_delivery_with_dismissal_passes() {
    let state = in_progress_state(1);
    let ok = DeliveryInput {
        wicket: true,
        dismissal: Some(DismissalKind::Bowled),
        new_batter_id: Some("a3".into()),
        ..input()
    };
    assert!(validate(&state, &ok).is_ok());
}
