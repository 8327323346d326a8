use crate::domain::overs::{complete_over_if_needed, increment_overs, overs_from_balls};
use crate::domain::test_state_helpers::in_progress_state;

fn assert_overs(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn balls_to_overs_uses_the_tenths_digit() {
    assert_overs(overs_from_balls(0), 0.0);
    assert_overs(overs_from_balls(5), 0.5);
    assert_overs(overs_from_balls(6), 1.0);
    assert_overs(overs_from_balls(23), 3.5);
    assert_overs(overs_from_balls(120), 20.0);
}

#[test]
fn increment_rolls_over_after_the_fifth_ball() {
    assert_overs(increment_overs(0.0), 0.1);
    assert_overs(increment_overs(0.5), 1.0);
    assert_overs(increment_overs(18.5), 19.0);
    assert_overs(increment_overs(19.3), 19.4);
}

#[test]
fn sixth_legal_ball_completes_the_over() {
    let mut state = in_progress_state(1);

    assert!(!complete_over_if_needed(&mut state, true, 5));
    assert_eq!(state.current_bowler_id.as_deref(), Some("b1"));

    assert!(complete_over_if_needed(&mut state, true, 6));
    assert_eq!(state.current_bowler_id, None);
    assert_eq!(state.last_over_bowler_id.as_deref(), Some("b1"));
}

#[test]
fn illegal_sixth_slot_does_not_complete() {
    let mut state = in_progress_state(1);
    assert!(!complete_over_if_needed(&mut state, false, 6));
    assert_eq!(state.current_bowler_id.as_deref(), Some("b1"));
}
