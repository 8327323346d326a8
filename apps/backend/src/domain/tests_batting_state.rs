use crate::domain::batting_state::apply;
use crate::domain::delivery::{DismissalKind, RunOutEnd};
use crate::domain::test_state_helpers::in_progress_state;
use crate::errors::domain::{DomainError, EligibilityKind};

#[test]
fn bowled_striker_replaced_at_strikers_end() {
    let mut state = in_progress_state(1);

    apply(&mut state, DismissalKind::Bowled, "a1", Some("a3"), None).unwrap();

    assert_eq!(state.striker_id.as_deref(), Some("a3"));
    assert_eq!(state.non_striker_id.as_deref(), Some("a2"));
    assert!(state.team_a.out_batters.contains(&"a1".to_string()));
    assert!(!state.team_a.yet_to_bat.contains(&"a3".to_string()));
}

#[test]
fn run_out_vacates_the_named_end_only() {
    let mut state = in_progress_state(1);

    // Non-striker a2 run out; a3 comes in at the non-striker end and
    // the striker keeps their end.
    apply(
        &mut state,
        DismissalKind::RunOut,
        "a2",
        Some("a3"),
        Some(RunOutEnd::NonStriker),
    )
    .unwrap();

    assert_eq!(state.striker_id.as_deref(), Some("a1"));
    assert_eq!(state.non_striker_id.as_deref(), Some("a3"));
    assert!(state.team_a.out_batters.contains(&"a2".to_string()));
}

#[test]
fn run_out_at_strikers_end_keeps_the_survivor_across() {
    let mut state = in_progress_state(1);

    // Striker a1 run out going for a second; a3 takes the striker end.
    apply(
        &mut state,
        DismissalKind::RunOut,
        "a1",
        Some("a3"),
        Some(RunOutEnd::Striker),
    )
    .unwrap();

    assert_eq!(state.striker_id.as_deref(), Some("a3"));
    assert_eq!(state.non_striker_id.as_deref(), Some("a2"));
}

#[test]
fn run_out_without_an_end_is_rejected() {
    let mut state = in_progress_state(1);
    let err = apply(&mut state, DismissalKind::RunOut, "a1", Some("a3"), None).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Eligibility(EligibilityKind::RunOutDetailsMissing, _)
    ));
}

#[test]
fn retired_hurt_moves_nobody() {
    let mut state = in_progress_state(1);
    let before = state.clone();

    apply(
        &mut state,
        DismissalKind::RetiredHurt,
        "a1",
        Some("a3"),
        None,
    )
    .unwrap();

    assert_eq!(state, before);
}

#[test]
fn innings_ending_wicket_leaves_the_end_empty() {
    let mut state = in_progress_state(1);
    state.team_a.yet_to_bat.clear();

    apply(&mut state, DismissalKind::Caught, "a1", None, None).unwrap();

    assert_eq!(state.striker_id, None);
    assert_eq!(state.non_striker_id.as_deref(), Some("a2"));
    assert!(state.team_a.out_batters.contains(&"a1".to_string()));
}

#[test]
fn out_set_push_is_idempotent() {
    let mut state = in_progress_state(1);
    state.team_a.out_batters.push("a1".into());

    apply(&mut state, DismissalKind::Bowled, "a1", Some("a3"), None).unwrap();

    let count = state.team_a.out_batters.iter().filter(|p| *p == "a1").count();
    assert_eq!(count, 1);
}
