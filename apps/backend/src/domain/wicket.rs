//! Wicket resolution: which batter is dismissed, and what the
//! per-player statistics collaborator must be told.

use crate::domain::delivery::{DeliveryInput, DismissalKind};
use crate::domain::state::MatchState;
use crate::errors::domain::{DomainError, EligibilityKind};

/// Dismissal fact handed to the match-player-statistics updater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatterOut {
    pub batter_id: String,
    pub dismissal: DismissalKind,
    /// Set only when the dismissal kind credits the bowler.
    pub bowler_id: Option<String>,
    pub fielder_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WicketOutcome {
    /// Batter leaving the crease; `None` for non-wicket deliveries and
    /// for retired hurt.
    pub out_batter_id: Option<String>,
    pub effect: Option<BatterOut>,
}

/// Resolve the dismissed batter. Run-outs take the supplied out batter
/// (which eligibility has pinned to the striker or non-striker); every
/// other out dismissal takes the current striker.
pub fn resolve(
    state: &MatchState,
    input: &DeliveryInput,
    bowler_id: &str,
) -> Result<WicketOutcome, DomainError> {
    if !input.wicket {
        return Ok(WicketOutcome::default());
    }

    let Some(dismissal) = input.dismissal else {
        return Ok(WicketOutcome::default());
    };

    if !dismissal.is_out() {
        // Retired hurt: recorded on the delivery, but nobody is out.
        return Ok(WicketOutcome::default());
    }

    let out_batter_id = if dismissal == DismissalKind::RunOut {
        let out = input
            .out_batter_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                DomainError::eligibility(
                    EligibilityKind::RunOutDetailsMissing,
                    "outBatterId is mandatory for a run out",
                )
            })?;
        if Some(out) != state.striker_id.as_deref() && Some(out) != state.non_striker_id.as_deref()
        {
            return Err(DomainError::eligibility(
                EligibilityKind::RunOutBatterNotOnCrease,
                "Out batter must be the striker or non-striker",
            ));
        }
        out.to_string()
    } else {
        state.striker_id.clone().unwrap_or_default()
    };

    let effect = BatterOut {
        batter_id: out_batter_id.clone(),
        dismissal,
        bowler_id: dismissal.credits_bowler().then(|| bowler_id.to_string()),
        fielder_id: input.fielder_id.clone(),
    };

    Ok(WicketOutcome {
        out_batter_id: Some(out_batter_id),
        effect: Some(effect),
    })
}
