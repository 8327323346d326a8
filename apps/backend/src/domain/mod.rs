//! Domain layer: pure scoring logic, no persistence.

pub mod aggregate;
pub mod batting_state;
pub mod delivery;
pub mod eligibility;
pub mod extras;
pub mod overs;
pub mod pipeline;
pub mod sequence;
pub mod state;
pub mod strike;
pub mod validate;
pub mod wicket;

#[cfg(test)]
mod test_state_helpers;

#[cfg(test)]
mod tests_aggregate;
#[cfg(test)]
mod tests_batting_state;
#[cfg(test)]
mod tests_overs;
#[cfg(test)]
mod tests_pipeline;
#[cfg(test)]
mod tests_sequence;
#[cfg(test)]
mod tests_validate;

// Re-exports for ergonomics
pub use delivery::{Delivery, DeliveryInput, DismissalKind, ExtraType, RunOutEnd};
pub use pipeline::{apply_delivery, StatsEffects};
pub use state::{MatchState, MatchStatus, TeamSide, TossDecision};
pub use wicket::BatterOut;
