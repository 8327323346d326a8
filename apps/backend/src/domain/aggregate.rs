//! Innings aggregation: team totals, innings closure, match completion
//! and the winner.

use crate::domain::delivery::Delivery;
use crate::domain::overs;
use crate::domain::state::{MatchState, MatchStatus};

/// Fold an accepted delivery into the batting team's tally, then check
/// whether it closed the innings or the match.
pub fn apply(state: &mut MatchState, delivery: &Delivery) {
    let total_runs = delivery.total_runs();
    let is_out = delivery.is_out_wicket();

    let side = state.batting_side_mut();
    side.runs += total_runs;
    side.extras += delivery.extra_runs;
    if is_out {
        side.wickets += 1;
    }
    if delivery.legal {
        side.overs = overs::increment_overs(side.overs);
    }

    check_innings_completion(state);
}

fn check_innings_completion(state: &mut MatchState) {
    let overs_limit = f64::from(state.total_overs);

    if !state.first_innings_completed {
        let side = state.batting_side();
        if side.wickets >= 10 || side.overs >= overs_limit {
            state.first_innings_completed = true;
        }
        return;
    }

    if state.second_innings_completed {
        return;
    }

    let chasing = state.batting_side();
    let target_runs = state.bowling_side().runs;
    if chasing.wickets >= 10 || chasing.overs >= overs_limit || chasing.runs > target_runs {
        state.second_innings_completed = true;
        state.status = MatchStatus::Completed;
        compute_winner(state);
    }
}

/// Decide the winner once both innings are closed.
///
/// Batting first and defending the total wins by the run margin; a
/// successful chase wins by wickets in hand (10 minus wickets lost);
/// equal totals tie.
fn compute_winner(state: &mut MatchState) {
    let first_bat = state.first_batting_team_id().to_string();
    let second_bat = if first_bat == state.team_a.team_id {
        state.team_b.team_id.clone()
    } else {
        state.team_a.team_id.clone()
    };

    let side_of = |state: &MatchState, id: &str| {
        if id == state.team_a.team_id {
            state.team_a.clone()
        } else {
            state.team_b.clone()
        }
    };

    let first = side_of(state, &first_bat);
    let second = side_of(state, &second_bat);

    if first.runs > second.runs {
        let margin = first.runs - second.runs;
        state.winner = Some(first_bat.clone());
        state.result = Some(format!("{first_bat} won by {margin} runs"));
    } else if second.runs > first.runs {
        let wickets_left = 10 - second.wickets;
        state.winner = Some(second_bat.clone());
        state.result = Some(format!("{second_bat} won by {wickets_left} wickets"));
    } else {
        state.winner = None;
        state.result = Some("Match tied".to_string());
    }
}
