//! Extras classification: decides delivery legality and the free-hit
//! flag before sequencing runs.

use crate::domain::delivery::ExtraType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtrasOutcome {
    pub legal: bool,
    pub free_hit: bool,
    pub extra_runs: i32,
}

/// Pure classification of the delivery's extras.
///
/// Wides and no-balls are illegal and carry a one-run penalty on top of
/// whatever the scorer supplied; a no-ball additionally arms a free hit.
/// Byes and leg-byes are legal deliveries with no adjustment.
pub fn classify(extra_type: Option<ExtraType>, extra_runs: i32) -> ExtrasOutcome {
    match extra_type {
        Some(ExtraType::Wide) => ExtrasOutcome {
            legal: false,
            free_hit: false,
            extra_runs: extra_runs + 1,
        },
        Some(ExtraType::NoBall) => ExtrasOutcome {
            legal: false,
            free_hit: true,
            extra_runs: extra_runs + 1,
        },
        Some(ExtraType::Bye) | Some(ExtraType::LegBye) | None => ExtrasOutcome {
            legal: true,
            free_hit: false,
            extra_runs,
        },
    }
}
