//! Structural delivery validation: rejects deliveries that are malformed
//! before any state is touched.

use crate::domain::delivery::DeliveryInput;
use crate::domain::state::MatchState;
use crate::errors::domain::{DomainError, ValidationKind};

/// Structural and semantic checks on an incoming delivery. Runs after the
/// striker/non-striker/bowler have been frozen from MatchState. No side
/// effects beyond the check.
pub fn validate(state: &MatchState, input: &DeliveryInput) -> Result<(), DomainError> {
    if input.innings <= 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidInnings,
            format!("Invalid innings {}", input.innings),
        ));
    }

    if state.striker_id.as_deref().unwrap_or("").is_empty() {
        return Err(DomainError::validation(
            ValidationKind::StrikerNotSet,
            "Batter not set",
        ));
    }

    if state.current_bowler_id.as_deref().unwrap_or("").is_empty() {
        return Err(DomainError::validation(
            ValidationKind::BowlerNotSet,
            "Bowler not set",
        ));
    }

    if input.runs < 0 || input.running_runs < 0 {
        return Err(DomainError::validation(
            ValidationKind::NegativeRuns,
            "Runs cannot be negative",
        ));
    }

    if input.extra_runs < 0 {
        return Err(DomainError::validation(
            ValidationKind::NegativeExtraRuns,
            "Extra runs cannot be negative",
        ));
    }

    if input.wicket && input.dismissal.is_none() {
        return Err(DomainError::validation(
            ValidationKind::MissingDismissal,
            "Wicket delivery must carry a dismissal kind",
        ));
    }

    if !input.wicket && input.new_batter_id.is_some() {
        return Err(DomainError::validation(
            ValidationKind::NewBatterWithoutWicket,
            "New batter allowed only when a wicket falls",
        ));
    }

    validate_boundary(input)
}

fn validate_boundary(input: &DeliveryInput) -> Result<(), DomainError> {
    // boundaryRuns cannot exist without the boundary flag
    if !input.boundary {
        if input.boundary_runs > 0 {
            return Err(DomainError::validation(
                ValidationKind::BoundaryRunsWithoutBoundary,
                "boundaryRuns set while boundary is false",
            ));
        }
        return Ok(());
    }

    if input.boundary_runs != 4 && input.boundary_runs != 6 {
        return Err(DomainError::validation(
            ValidationKind::InvalidBoundaryRuns,
            format!("Boundary runs must be 4 or 6, got {}", input.boundary_runs),
        ));
    }

    if input.boundary_runs == 6 && input.overthrow {
        return Err(DomainError::validation(
            ValidationKind::OverthrowSix,
            "Overthrow cannot occur on a six",
        ));
    }

    Ok(())
}
