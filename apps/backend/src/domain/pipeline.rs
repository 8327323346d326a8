//! The delivery pipeline: one explicit state transition
//! `(MatchState, last delivery, input) -> (MatchState', Delivery, effects)`.
//!
//! Every stage is a pure function over explicit arguments; the service
//! layer owns loading, locking and persistence around this.

use time::OffsetDateTime;

use crate::domain::delivery::{Delivery, DeliveryInput};
use crate::domain::wicket::BatterOut;
use crate::domain::{batting_state, eligibility, extras, overs, sequence, strike, validate, wicket};
use crate::domain::state::MatchState;
use crate::errors::domain::DomainError;

/// Side effects the persistence layer applies alongside the delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsEffects {
    pub batter_out: Option<BatterOut>,
}

/// Run the full scoring pipeline for one delivery.
///
/// On success `state` has been advanced and the returned delivery is
/// ready to persist. On error `state` must be discarded by the caller;
/// nothing may be persisted.
pub fn apply_delivery(
    state: &mut MatchState,
    last: Option<&Delivery>,
    input: &DeliveryInput,
    now: OffsetDateTime,
) -> Result<(Delivery, StatsEffects), DomainError> {
    // Match/innings gate before anything is resolved.
    state.ensure_accepting(input.innings)?;

    // An over just ended: the incoming delivery must nominate the bowler.
    eligibility::resolve_new_bowler(state, input.new_bowler_id.as_deref())?;

    // Freeze the on-field players from MatchState; the caller's values
    // are never trusted.
    let striker_id = state.striker_id.clone().unwrap_or_default();
    let non_striker_id = state.non_striker_id.clone().unwrap_or_default();
    let bowler_id = state.current_bowler_id.clone().unwrap_or_default();
    let batting_team_id = state.batting_team_id.clone();

    validate::validate(state, input)?;

    let extras = extras::classify(input.extra_type, input.extra_runs);
    let number = sequence::next_ball(last);

    eligibility::check_bowler_continuity(last, number.over, &bowler_id)?;
    eligibility::check_current_batters(state, input.wicket)?;
    eligibility::check_new_batter(state, input)?;

    let wicket_outcome = wicket::resolve(state, input, &bowler_id)?;

    if let (Some(out_batter), Some(dismissal)) =
        (wicket_outcome.out_batter_id.as_deref(), input.dismissal)
    {
        let new_batter = input
            .new_batter_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        batting_state::apply(state, dismissal, out_batter, new_batter, input.run_out_end)?;
    }

    let over_completed = overs::complete_over_if_needed(state, extras.legal, number.ball);

    let mut delivery = Delivery {
        id: None,
        match_id: state.match_id,
        innings: input.innings,
        over: number.over,
        ball: number.ball,
        sequence: number.sequence,
        batting_team_id,
        striker_id,
        non_striker_id,
        bowler_id,
        runs: input.runs,
        running_runs: input.running_runs,
        extra_type: input.extra_type,
        extra_runs: extras.extra_runs,
        legal: extras.legal,
        free_hit: extras.free_hit,
        over_completed,
        wicket: input.wicket,
        dismissal: input.dismissal,
        out_batter_id: wicket_outcome.out_batter_id.clone(),
        new_batter_id: input.new_batter_id.clone(),
        run_out_end: input.run_out_end,
        fielder_id: input.fielder_id.clone(),
        boundary: input.boundary,
        boundary_runs: input.boundary_runs,
        overthrow: input.overthrow,
        team_runs_at_ball: 0,
        team_wickets_at_ball: 0,
        overs_at_ball: 0.0,
        created_at: now,
    };

    strike::rotate(state, &delivery);

    crate::domain::aggregate::apply(state, &delivery);

    // Snapshot the batting side as of this delivery.
    let side = state.batting_side();
    delivery.team_runs_at_ball = side.runs;
    delivery.team_wickets_at_ball = side.wickets;
    delivery.overs_at_ball = side.overs;

    Ok((
        delivery,
        StatsEffects {
            batter_out: wicket_outcome.effect,
        },
    ))
}
