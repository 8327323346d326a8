//! Player eligibility rules: who may bowl and bat on this delivery.
//!
//! Four independent checks, composed by the orchestrator at the pipeline
//! points where their inputs are known.

use crate::domain::delivery::{Delivery, DeliveryInput, DismissalKind};
use crate::domain::state::MatchState;
use crate::errors::domain::{DomainError, EligibilityKind};

/// New-bowler-for-new-over check. Invoked before players are frozen:
/// when `current_bowler_id` is cleared (an over just ended), the incoming
/// delivery must name a bowler who did not bowl the previous over. On
/// success that bowler becomes the frozen bowler for this delivery.
pub fn resolve_new_bowler(
    state: &mut MatchState,
    new_bowler_id: Option<&str>,
) -> Result<(), DomainError> {
    // Mid-over: the bowler carries over, nothing to resolve.
    if state.current_bowler_id.is_some() {
        return Ok(());
    }

    let new_bowler = new_bowler_id
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            DomainError::eligibility(
                EligibilityKind::NewBowlerRequired,
                "New bowler must be provided at the start of a new over",
            )
        })?;

    if state.last_over_bowler_id.as_deref() == Some(new_bowler) {
        return Err(DomainError::eligibility(
            EligibilityKind::ConsecutiveOverBowler,
            "Bowler cannot bowl consecutive overs",
        ));
    }

    state.current_bowler_id = Some(new_bowler.to_string());
    Ok(())
}

/// Bowler continuity: within an over, every delivery must come from the
/// bowler who started it. The first delivery of an innings only needs a
/// bowler to be set at all.
pub fn check_bowler_continuity(
    last: Option<&Delivery>,
    over: i32,
    bowler_id: &str,
) -> Result<(), DomainError> {
    let Some(last) = last else {
        return Ok(());
    };

    if over == last.over && bowler_id != last.bowler_id {
        return Err(DomainError::eligibility(
            EligibilityKind::WrongBowlerMidOver,
            "Same bowler must complete the over",
        ));
    }

    Ok(())
}

/// Current batters: striker and non-striker must be distinct members of
/// the batting XI and, on a non-wicket delivery, not already out.
pub fn check_current_batters(state: &MatchState, is_wicket: bool) -> Result<(), DomainError> {
    let striker = state.striker_id.as_deref().unwrap_or("");
    let non_striker = state.non_striker_id.as_deref().unwrap_or("");

    if striker.is_empty() || non_striker.is_empty() {
        return Err(DomainError::eligibility(
            EligibilityKind::Other("BATTERS_NOT_SET".into()),
            "Striker / non-striker not set",
        ));
    }

    if striker == non_striker {
        return Err(DomainError::eligibility(
            EligibilityKind::SameBatterBothEnds,
            "Striker and non-striker cannot be the same batter",
        ));
    }

    let side = state.batting_side();

    for batter in [striker, non_striker] {
        if !side.playing_xi.iter().any(|p| p == batter) {
            return Err(DomainError::eligibility(
                EligibilityKind::BatterNotInXi,
                format!("Batter {batter} is not in the playing XI"),
            ));
        }
    }

    if !is_wicket {
        for batter in [striker, non_striker] {
            if side.out_batters.iter().any(|p| p == batter) {
                return Err(DomainError::eligibility(
                    EligibilityKind::BatterAlreadyOut,
                    format!("Batter {batter} is already out"),
                ));
            }
        }
    }

    Ok(())
}

/// New batter on wicket: required exactly when a wicket is recorded and
/// the dismissal is an out (retired hurt needs no replacement here).
pub fn check_new_batter(state: &MatchState, input: &DeliveryInput) -> Result<(), DomainError> {
    if !input.wicket {
        return Ok(());
    }

    let Some(dismissal) = input.dismissal else {
        return Ok(());
    };
    if !dismissal.is_out() {
        return Ok(());
    }

    let side = state.batting_side();

    let new_batter = input
        .new_batter_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let Some(new_batter) = new_batter else {
        // The innings-ending wicket has nobody left to come in.
        if side.yet_to_bat.is_empty() {
            return Ok(());
        }
        return Err(DomainError::eligibility(
            EligibilityKind::NewBatterRequired,
            "New batter is mandatory after a wicket",
        ));
    };

    if !side.playing_xi.iter().any(|p| p == new_batter) {
        return Err(DomainError::eligibility(
            EligibilityKind::NewBatterNotInXi,
            "New batter must be from the playing XI",
        ));
    }

    if !side.yet_to_bat.iter().any(|p| p == new_batter) {
        return Err(DomainError::eligibility(
            EligibilityKind::NewBatterNotYetToBat,
            "New batter must be from the yet-to-bat list",
        ));
    }

    if side.out_batters.iter().any(|p| p == new_batter) {
        return Err(DomainError::eligibility(
            EligibilityKind::NewBatterAlreadyOut,
            "New batter is already out",
        ));
    }

    if dismissal == DismissalKind::RunOut {
        let out_batter = input.out_batter_id.as_deref().filter(|s| !s.is_empty());
        let (Some(out_batter), Some(_run_out_end)) = (out_batter, input.run_out_end) else {
            return Err(DomainError::eligibility(
                EligibilityKind::RunOutDetailsMissing,
                "Run out requires outBatterId and runOutEnd",
            ));
        };

        if Some(out_batter) != state.striker_id.as_deref()
            && Some(out_batter) != state.non_striker_id.as_deref()
        {
            return Err(DomainError::eligibility(
                EligibilityKind::RunOutBatterNotOnCrease,
                "Out batter must be the striker or non-striker",
            ));
        }

        if new_batter == out_batter {
            return Err(DomainError::eligibility(
                EligibilityKind::NewBatterIsOutBatter,
                "New batter cannot be the out batter",
            ));
        }

        return Ok(());
    }

    // Any other out dismissal takes the striker; the replacement must not
    // be the striker being replaced.
    if Some(new_batter) == state.striker_id.as_deref() {
        return Err(DomainError::eligibility(
            EligibilityKind::NewBatterIsOutBatter,
            "New batter cannot be the out batter",
        ));
    }

    Ok(())
}
