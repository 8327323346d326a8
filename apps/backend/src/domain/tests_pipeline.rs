//! End-to-end pipeline runs over in-memory state, including the two
//! full-match scenarios (a defended total and a completed chase).

use time::OffsetDateTime;

use crate::domain::delivery::{Delivery, DeliveryInput, DismissalKind, ExtraType};
use crate::domain::pipeline::apply_delivery;
use crate::domain::state::{MatchState, MatchStatus};
use crate::domain::test_state_helpers::in_progress_state;
use crate::errors::domain::DomainError;

/// Submit one delivery, nominating the other of `bowlers` whenever an
/// over just ended.
fn submit(
    state: &mut MatchState,
    last: &mut Option<Delivery>,
    mut input: DeliveryInput,
    bowlers: (&str, &str),
) -> Delivery {
    if state.current_bowler_id.is_none() {
        let next = if state.last_over_bowler_id.as_deref() == Some(bowlers.0) {
            bowlers.1
        } else {
            bowlers.0
        };
        input.new_bowler_id = Some(next.to_string());
    }
    let (delivery, _) = apply_delivery(state, last.as_ref(), &input, OffsetDateTime::UNIX_EPOCH)
        .expect("delivery accepted");
    *last = Some(delivery.clone());
    delivery
}

fn bat(innings: i16, runs: i32) -> DeliveryInput {
    DeliveryInput {
        innings,
        runs,
        ..Default::default()
    }
}

fn boundary(innings: i16, boundary_runs: i32) -> DeliveryInput {
    DeliveryInput {
        innings,
        boundary: true,
        boundary_runs,
        ..Default::default()
    }
}

/// A bowled wicket taking the next yet-to-bat batter, or nobody on the
/// innings-ending wicket.
fn bowled(state: &MatchState, innings: i16) -> DeliveryInput {
    DeliveryInput {
        innings,
        wicket: true,
        dismissal: Some(DismissalKind::Bowled),
        new_batter_id: state.batting_side().yet_to_bat.first().cloned(),
        ..Default::default()
    }
}

/// External second-innings setup: the engine only scores deliveries;
/// openers and batting side for the chase come from outside.
fn start_second_innings(state: &mut MatchState) {
    state.innings = 2;
    state.batting_team_id = "team-b".to_string();
    state.striker_id = Some("b1".to_string());
    state.non_striker_id = Some("b2".to_string());
    state.current_bowler_id = Some("a1".to_string());
    state.last_over_bowler_id = None;
    state.team_b.yet_to_bat.retain(|p| p != "b1" && p != "b2");
}

#[test]
fn sequence_and_slots_across_a_wide() {
    let mut state = in_progress_state(1);
    let mut last = None;

    let d1 = submit(&mut state, &mut last, bat(1, 0), ("b1", "b2"));
    assert_eq!((d1.over, d1.ball, d1.sequence), (1, 1, 1));

    let wide = DeliveryInput {
        innings: 1,
        extra_type: Some(ExtraType::Wide),
        ..Default::default()
    };
    let d2 = submit(&mut state, &mut last, wide, ("b1", "b2"));
    assert!(!d2.legal);
    assert_eq!(d2.extra_runs, 1);
    // The wide burns sequence 2 but not the ball slot.
    assert_eq!((d2.over, d2.ball, d2.sequence), (1, 2, 2));

    let d3 = submit(&mut state, &mut last, bat(1, 0), ("b1", "b2"));
    assert_eq!((d3.over, d3.ball, d3.sequence), (1, 2, 3));
}

#[test]
fn no_ball_arms_a_free_hit() {
    let mut state = in_progress_state(1);
    let mut last = None;

    let no_ball = DeliveryInput {
        innings: 1,
        extra_type: Some(ExtraType::NoBall),
        runs: 2,
        ..Default::default()
    };
    let d = submit(&mut state, &mut last, no_ball, ("b1", "b2"));
    assert!(d.free_hit);
    assert!(!d.legal);
    assert_eq!(d.team_runs_at_ball, 3);
}

#[test]
fn players_are_frozen_from_state_not_the_caller() {
    let mut state = in_progress_state(1);
    let mut last = None;

    let d = submit(&mut state, &mut last, bat(1, 1), ("b1", "b2"));
    assert_eq!(d.striker_id, "a1");
    assert_eq!(d.non_striker_id, "a2");
    assert_eq!(d.bowler_id, "b1");
    assert_eq!(d.batting_team_id, "team-a");

    // The single rotated strike; the next delivery freezes a2.
    let d = submit(&mut state, &mut last, bat(1, 0), ("b1", "b2"));
    assert_eq!(d.striker_id, "a2");
}

#[test]
fn snapshot_matches_the_side_totals() {
    let mut state = in_progress_state(1);
    let mut last = None;

    submit(&mut state, &mut last, boundary(1, 4), ("b1", "b2"));
    let d = submit(&mut state, &mut last, bat(1, 3), ("b1", "b2"));

    assert_eq!(d.team_runs_at_ball, 7);
    assert_eq!(d.team_wickets_at_ball, 0);
    assert!((d.overs_at_ball - 0.2).abs() < 1e-9);
    assert_eq!(state.team_a.runs, 7);
}

#[test]
fn retired_hurt_is_recorded_but_not_out() {
    let mut state = in_progress_state(1);
    let mut last = None;

    let input = DeliveryInput {
        innings: 1,
        wicket: true,
        dismissal: Some(DismissalKind::RetiredHurt),
        ..Default::default()
    };
    let (delivery, effects) =
        apply_delivery(&mut state, None, &input, OffsetDateTime::UNIX_EPOCH).unwrap();
    last = Some(delivery.clone());

    assert!(delivery.wicket);
    assert!(!delivery.is_out_wicket());
    assert_eq!(effects.batter_out, None);
    assert_eq!(state.team_a.wickets, 0);
    assert_eq!(state.striker_id.as_deref(), Some("a1"));
    assert!(state.team_a.out_batters.is_empty());

    // Play continues normally.
    submit(&mut state, &mut last, bat(1, 1), ("b1", "b2"));
}

#[test]
fn completed_match_rejects_further_deliveries() {
    let mut state = in_progress_state(1);
    state.status = MatchStatus::Completed;

    let err = apply_delivery(&mut state, None, &bat(1, 0), OffsetDateTime::UNIX_EPOCH).unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition(_)));
}

#[test]
fn closed_innings_rejects_further_deliveries() {
    let mut state = in_progress_state(1);
    state.first_innings_completed = true;

    let err = apply_delivery(&mut state, None, &bat(1, 0), OffsetDateTime::UNIX_EPOCH).unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition(_)));

    // And the second innings cannot start before the first closes.
    state.first_innings_completed = false;
    let err = apply_delivery(&mut state, None, &bat(2, 0), OffsetDateTime::UNIX_EPOCH).unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition(_)));
}

#[test]
fn defended_total_full_match() {
    let mut state = in_progress_state(42);
    state.current_bowler_id = Some("k1".to_string());
    let mut last = None;
    let bowlers = ("k1", "k2");

    // Team A: six overs of fours, a six, then all out for 150.
    for _ in 0..36 {
        submit(&mut state, &mut last, boundary(1, 4), bowlers);
    }
    assert_eq!(state.team_a.runs, 144);

    submit(&mut state, &mut last, boundary(1, 6), bowlers);
    assert_eq!(state.team_a.runs, 150);

    for _ in 0..10 {
        let input = bowled(&state, 1);
        submit(&mut state, &mut last, input, bowlers);
    }

    assert!(state.first_innings_completed);
    assert_eq!(state.team_a.wickets, 10);
    assert_eq!(state.team_a.runs, 150);
    assert_eq!(state.team_a.out_batters.len(), 10);
    assert!(state.team_a.yet_to_bat.is_empty());
    assert_eq!(state.status, MatchStatus::InProgress);

    // Team B: five overs of fours, then all out for 120.
    start_second_innings(&mut state);
    let mut last = None;
    let bowlers = ("a1", "a2");

    for _ in 0..30 {
        submit(&mut state, &mut last, boundary(2, 4), bowlers);
    }
    assert_eq!(state.team_b.runs, 120);

    let mut final_delivery = None;
    for _ in 0..10 {
        let input = bowled(&state, 2);
        final_delivery = Some(submit(&mut state, &mut last, input, bowlers));
    }

    assert!(state.second_innings_completed);
    assert_eq!(state.status, MatchStatus::Completed);
    assert_eq!(state.winner.as_deref(), Some("team-a"));
    assert_eq!(state.result.as_deref(), Some("team-a won by 30 runs"));

    let final_delivery = final_delivery.unwrap();
    assert_eq!(final_delivery.team_runs_at_ball, 120);
    assert_eq!(final_delivery.team_wickets_at_ball, 10);
    assert!((final_delivery.overs_at_ball - 6.4).abs() < 1e-9);
    assert_eq!(final_delivery.sequence, 40);
}

#[test]
fn chase_completes_the_moment_the_target_is_passed() {
    let mut state = in_progress_state(43);
    state.team_a.runs = 150;
    state.team_a.wickets = 10;
    state.team_a.overs = 20.0;
    state.first_innings_completed = true;
    start_second_innings(&mut state);
    let mut last = None;
    let bowlers = ("a1", "a2");

    // 144 off the first six overs.
    for _ in 0..36 {
        submit(&mut state, &mut last, boundary(2, 4), bowlers);
    }

    // Four wickets in a row, then 148, then 150: level, still alive.
    for _ in 0..4 {
        let input = bowled(&state, 2);
        submit(&mut state, &mut last, input, bowlers);
    }
    submit(&mut state, &mut last, boundary(2, 4), bowlers);
    submit(&mut state, &mut last, bat(2, 2), bowlers);
    assert_eq!(state.team_b.runs, 150);
    assert!(!state.second_innings_completed);

    // The winning single.
    let d = submit(&mut state, &mut last, bat(2, 1), bowlers);

    assert!(state.second_innings_completed);
    assert_eq!(state.status, MatchStatus::Completed);
    assert_eq!(state.winner.as_deref(), Some("team-b"));
    assert_eq!(state.result.as_deref(), Some("team-b won by 6 wickets"));
    assert_eq!(d.team_runs_at_ball, 151);
    assert_eq!(d.team_wickets_at_ball, 4);
    assert!((d.overs_at_ball - 7.1).abs() < 1e-9);
}
