//! Mutable per-match state: the single record the engine reads and
//! advances on every accepted delivery.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, EligibilityKind, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// One team's innings tally plus its batting-order bookkeeping.
/// A playing-XI member is always in exactly one of: yet-to-bat,
/// currently batting (striker/non-striker on MatchState), or out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSide {
    pub team_id: String,
    pub runs: i32,
    pub wickets: i32,
    pub overs: f64,
    pub extras: i32,
    pub playing_xi: Vec<String>,
    pub yet_to_bat: Vec<String>,
    pub out_batters: Vec<String>,
}

impl TeamSide {
    pub fn new(team_id: impl Into<String>, playing_xi: Vec<String>) -> Self {
        Self {
            team_id: team_id.into(),
            runs: 0,
            wickets: 0,
            overs: 0.0,
            extras: 0,
            yet_to_bat: playing_xi.clone(),
            playing_xi,
            out_batters: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub match_id: i64,
    pub team_a: TeamSide,
    pub team_b: TeamSide,
    pub toss_winner: String,
    pub toss_decision: TossDecision,
    pub status: MatchStatus,
    pub innings: i16,
    pub batting_team_id: String,
    pub striker_id: Option<String>,
    pub non_striker_id: Option<String>,
    pub current_bowler_id: Option<String>,
    pub last_over_bowler_id: Option<String>,
    pub total_overs: i32,
    pub first_innings_completed: bool,
    pub second_innings_completed: bool,
    pub winner: Option<String>,
    pub result: Option<String>,
}

impl MatchState {
    pub fn batting_side(&self) -> &TeamSide {
        if self.batting_team_id == self.team_a.team_id {
            &self.team_a
        } else {
            &self.team_b
        }
    }

    pub fn batting_side_mut(&mut self) -> &mut TeamSide {
        if self.batting_team_id == self.team_a.team_id {
            &mut self.team_a
        } else {
            &mut self.team_b
        }
    }

    pub fn bowling_side(&self) -> &TeamSide {
        if self.batting_team_id == self.team_a.team_id {
            &self.team_b
        } else {
            &self.team_a
        }
    }

    /// Team id of the side that batted first, derived from the toss.
    pub fn first_batting_team_id(&self) -> &str {
        let toss_won_a = self.toss_winner == self.team_a.team_id;
        let winner_bats = self.toss_decision == TossDecision::Bat;
        if toss_won_a == winner_bats {
            &self.team_a.team_id
        } else {
            &self.team_b.team_id
        }
    }

    pub fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker_id, &mut self.non_striker_id);
    }

    /// Pre-delivery gate: the match must be live, the innings open, and
    /// both batters resolved before anything else runs.
    pub fn ensure_accepting(&self, innings: i16) -> Result<(), DomainError> {
        if self.status != MatchStatus::InProgress {
            return Err(DomainError::invalid_transition(format!(
                "match {} is not in progress",
                self.match_id
            )));
        }

        if innings == 1 && self.first_innings_completed {
            return Err(DomainError::invalid_transition(
                "first innings already completed",
            ));
        }

        if innings == 2 {
            if !self.first_innings_completed {
                return Err(DomainError::invalid_transition(
                    "first innings not completed yet",
                ));
            }
            if self.second_innings_completed {
                return Err(DomainError::invalid_transition(
                    "second innings already completed",
                ));
            }
        }

        let striker = self
            .striker_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::StrikerNotSet, "Striker not set")
            })?;
        let non_striker = self
            .non_striker_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                DomainError::validation(ValidationKind::NonStrikerNotSet, "Non-striker not set")
            })?;

        if striker == non_striker {
            return Err(DomainError::eligibility(
                EligibilityKind::SameBatterBothEnds,
                "Striker and non-striker cannot be the same batter",
            ));
        }

        Ok(())
    }
}
