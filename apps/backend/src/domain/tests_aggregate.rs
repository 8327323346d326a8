use crate::domain::aggregate::apply;
use crate::domain::delivery::{DismissalKind, ExtraType};
use crate::domain::state::{MatchState, MatchStatus};
use crate::domain::test_state_helpers::{delivery_fixture, in_progress_state};

/// Second-innings state: team B chasing `target` set by team A.
fn chasing_state(target: i32) -> MatchState {
    let mut state = in_progress_state(1);
    state.team_a.runs = target;
    state.team_a.wickets = 10;
    state.team_a.overs = 20.0;
    state.first_innings_completed = true;
    state.innings = 2;
    state.batting_team_id = "team-b".to_string();
    state.striker_id = Some("b1".to_string());
    state.non_striker_id = Some("b2".to_string());
    state.current_bowler_id = Some("a1".to_string());
    state.team_b.yet_to_bat.retain(|p| p != "b1" && p != "b2");
    state
}

#[test]
fn runs_and_extras_accumulate_on_the_batting_side() {
    let mut state = in_progress_state(1);
    let mut d = delivery_fixture(1, 1, 1, 1);
    d.runs = 2;
    d.extra_type = Some(ExtraType::NoBall);
    d.extra_runs = 1;
    d.legal = false;

    apply(&mut state, &d);

    assert_eq!(state.team_a.runs, 3);
    assert_eq!(state.team_a.extras, 1);
    assert_eq!(state.team_b.runs, 0);
    // Illegal delivery: overs untouched.
    assert_eq!(state.team_a.overs, 0.0);
}

#[test]
fn boundary_credits_boundary_runs() {
    let mut state = in_progress_state(1);
    let mut d = delivery_fixture(1, 1, 1, 1);
    d.boundary = true;
    d.boundary_runs = 4;
    d.overthrow = true;
    d.running_runs = 2;

    apply(&mut state, &d);

    assert_eq!(state.team_a.runs, 6);
}

#[test]
fn legal_delivery_advances_overs() {
    let mut state = in_progress_state(1);
    let d = delivery_fixture(1, 1, 1, 1);

    apply(&mut state, &d);

    assert!((state.team_a.overs - 0.1).abs() < 1e-9);
}

#[test]
fn wicket_increments_unless_retired_hurt() {
    let mut state = in_progress_state(1);
    let mut d = delivery_fixture(1, 1, 1, 1);
    d.wicket = true;
    d.dismissal = Some(DismissalKind::Caught);
    apply(&mut state, &d);
    assert_eq!(state.team_a.wickets, 1);

    let mut d = delivery_fixture(1, 1, 2, 2);
    d.wicket = true;
    d.dismissal = Some(DismissalKind::RetiredHurt);
    apply(&mut state, &d);
    assert_eq!(state.team_a.wickets, 1);
}

#[test]
fn first_innings_closes_at_ten_wickets() {
    let mut state = in_progress_state(1);
    state.team_a.wickets = 9;

    let mut d = delivery_fixture(1, 10, 3, 60);
    d.wicket = true;
    d.dismissal = Some(DismissalKind::Bowled);
    apply(&mut state, &d);

    assert!(state.first_innings_completed);
    assert!(!state.second_innings_completed);
    assert_eq!(state.status, MatchStatus::InProgress);
}

#[test]
fn first_innings_closes_at_the_overs_limit() {
    let mut state = in_progress_state(1);
    state.team_a.overs = 19.5;

    let d = delivery_fixture(1, 20, 6, 120);
    apply(&mut state, &d);

    assert!(state.first_innings_completed);
    assert!((state.team_a.overs - 20.0).abs() < 1e-9);
}

#[test]
fn defended_total_wins_by_runs() {
    let mut state = chasing_state(150);
    state.team_b.runs = 118;
    state.team_b.wickets = 9;

    let mut d = delivery_fixture(1, 19, 4, 112);
    d.innings = 2;
    d.batting_team_id = "team-b".to_string();
    d.runs = 2;
    d.wicket = true;
    d.dismissal = Some(DismissalKind::RunOut);
    apply(&mut state, &d);

    assert!(state.second_innings_completed);
    assert_eq!(state.status, MatchStatus::Completed);
    assert_eq!(state.winner.as_deref(), Some("team-a"));
    assert_eq!(state.result.as_deref(), Some("team-a won by 30 runs"));
}

#[test]
fn successful_chase_wins_by_wickets_in_hand() {
    let mut state = chasing_state(150);
    state.team_b.runs = 149;
    state.team_b.wickets = 4;

    let mut d = delivery_fixture(1, 18, 2, 105);
    d.innings = 2;
    d.batting_team_id = "team-b".to_string();
    d.runs = 2;
    apply(&mut state, &d);

    assert!(state.second_innings_completed);
    assert_eq!(state.winner.as_deref(), Some("team-b"));
    assert_eq!(state.result.as_deref(), Some("team-b won by 6 wickets"));
}

#[test]
fn level_scores_at_the_close_tie_the_match() {
    let mut state = chasing_state(150);
    state.team_b.runs = 149;
    state.team_b.wickets = 9;

    let mut d = delivery_fixture(1, 20, 1, 115);
    d.innings = 2;
    d.batting_team_id = "team-b".to_string();
    d.runs = 1;
    d.wicket = true;
    d.dismissal = Some(DismissalKind::RunOut);
    apply(&mut state, &d);

    assert!(state.second_innings_completed);
    assert_eq!(state.winner, None);
    assert_eq!(state.result.as_deref(), Some("Match tied"));
}

#[test]
fn reaching_the_target_exactly_does_not_close_the_chase() {
    // Equal runs is not a win; the chase continues.
    let mut state = chasing_state(150);
    state.team_b.runs = 148;

    let mut d = delivery_fixture(1, 15, 3, 90);
    d.innings = 2;
    d.batting_team_id = "team-b".to_string();
    d.runs = 2;
    apply(&mut state, &d);

    assert!(!state.second_innings_completed);
    assert_eq!(state.status, MatchStatus::InProgress);
}
