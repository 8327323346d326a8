//! Batting-state bookkeeping after an accepted wicket: out set,
//! yet-to-bat set, and where the incoming batter takes guard.
//!
//! End-of-over strike swapping is not done here; `strike` is the sole
//! authority for swaps.

use crate::domain::delivery::{DismissalKind, RunOutEnd};
use crate::domain::state::MatchState;
use crate::errors::domain::{DomainError, EligibilityKind};

/// Apply the batting-state consequences of an out dismissal: the out
/// batter joins the out set (idempotently), the new batter leaves
/// yet-to-bat and takes the vacated end.
///
/// Placement: a run out vacates exactly the end named by `run_out_end`
/// and the surviving batter keeps their end; every other dismissal
/// vacates the striker's end. `new_batter_id` is `None` only for the
/// innings-ending wicket, which leaves the vacated end empty.
pub fn apply(
    state: &mut MatchState,
    dismissal: DismissalKind,
    out_batter_id: &str,
    new_batter_id: Option<&str>,
    run_out_end: Option<RunOutEnd>,
) -> Result<(), DomainError> {
    if !dismissal.is_out() {
        return Ok(());
    }

    let side = state.batting_side_mut();

    if !side.out_batters.iter().any(|p| p == out_batter_id) {
        side.out_batters.push(out_batter_id.to_string());
    }
    if let Some(new_batter) = new_batter_id {
        side.yet_to_bat.retain(|p| p != new_batter);
    }

    if dismissal == DismissalKind::RunOut {
        let striker = state.striker_id.clone().unwrap_or_default();
        let non_striker = state.non_striker_id.clone().unwrap_or_default();

        let surviving = if out_batter_id == striker {
            non_striker
        } else if out_batter_id == non_striker {
            striker
        } else {
            return Err(DomainError::eligibility(
                EligibilityKind::RunOutBatterNotOnCrease,
                "Out batter is not on the crease",
            ));
        };

        let incoming = new_batter_id.map(str::to_string);
        match run_out_end {
            Some(RunOutEnd::Striker) => {
                state.striker_id = incoming;
                state.non_striker_id = Some(surviving);
            }
            Some(RunOutEnd::NonStriker) => {
                state.non_striker_id = incoming;
                state.striker_id = Some(surviving);
            }
            None => {
                return Err(DomainError::eligibility(
                    EligibilityKind::RunOutDetailsMissing,
                    "runOutEnd is mandatory for a run out",
                ));
            }
        }

        return Ok(());
    }

    // Striker is always the one dismissed on a non-run-out wicket.
    state.striker_id = new_batter_id.map(str::to_string);
    Ok(())
}
