//! Delivery types: the atomic unit of match progress.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Extras classification. Wides and no-balls are illegal deliveries and
/// do not consume a ball slot in the over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtraType {
    Wide,
    NoBall,
    Bye,
    LegBye,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    Stumped,
    RunOut,
    HitWicket,
    HitTheBallTwice,
    RetiredHurt,
}

impl DismissalKind {
    /// Retired hurt is recorded as an event but is not an out: the batter
    /// never moves to the out set and the innings wicket count is untouched.
    pub fn is_out(self) -> bool {
        !matches!(self, DismissalKind::RetiredHurt)
    }

    /// Whether the bowler is credited with this dismissal.
    pub fn credits_bowler(self) -> bool {
        matches!(
            self,
            DismissalKind::Bowled
                | DismissalKind::Caught
                | DismissalKind::Lbw
                | DismissalKind::Stumped
                | DismissalKind::HitWicket
                | DismissalKind::HitTheBallTwice
        )
    }
}

/// Which end the run-out happened at; decides where the new batter goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunOutEnd {
    Striker,
    NonStriker,
}

/// A delivery as submitted by the scorer. Striker, non-striker and bowler
/// are never trusted from the caller; they are frozen from MatchState.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryInput {
    pub innings: i16,
    /// Runs off the bat (ignored for boundary deliveries).
    pub runs: i32,
    /// Runs physically completed by the batters.
    pub running_runs: i32,
    pub extra_type: Option<ExtraType>,
    pub extra_runs: i32,
    pub wicket: bool,
    pub dismissal: Option<DismissalKind>,
    pub out_batter_id: Option<String>,
    pub new_batter_id: Option<String>,
    pub run_out_end: Option<RunOutEnd>,
    pub fielder_id: Option<String>,
    pub boundary: bool,
    pub boundary_runs: i32,
    pub overthrow: bool,
    /// Only meaningful on the first delivery of a new over.
    pub new_bowler_id: Option<String>,
}

/// A fully resolved delivery: sequencing assigned, players frozen,
/// legality and snapshot computed. Immutable once persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub match_id: i64,
    pub innings: i16,
    pub over: i32,
    pub ball: i16,
    pub sequence: i64,
    pub batting_team_id: String,
    pub striker_id: String,
    pub non_striker_id: String,
    pub bowler_id: String,
    pub runs: i32,
    pub running_runs: i32,
    pub extra_type: Option<ExtraType>,
    pub extra_runs: i32,
    pub legal: bool,
    pub free_hit: bool,
    pub over_completed: bool,
    pub wicket: bool,
    pub dismissal: Option<DismissalKind>,
    pub out_batter_id: Option<String>,
    pub new_batter_id: Option<String>,
    pub run_out_end: Option<RunOutEnd>,
    pub fielder_id: Option<String>,
    pub boundary: bool,
    pub boundary_runs: i32,
    pub overthrow: bool,
    pub team_runs_at_ball: i32,
    pub team_wickets_at_ball: i32,
    pub overs_at_ball: f64,
    pub created_at: OffsetDateTime,
}

impl Delivery {
    /// Runs credited to the striker's bat: boundary runs for a boundary,
    /// otherwise the bat runs (never off a wide).
    pub fn bat_runs_credited(&self) -> i32 {
        if self.extra_type == Some(ExtraType::Wide) {
            return 0;
        }
        if self.boundary {
            self.boundary_runs
        } else {
            self.runs
        }
    }

    /// Total runs this delivery adds to the batting team: extras
    /// (including the wide/no-ball penalty), completed running runs, and
    /// the bat component.
    pub fn total_runs(&self) -> i32 {
        self.extra_runs + self.running_runs + self.bat_runs_credited()
    }

    /// Runs that count toward strike rotation: bat runs (a wide has
    /// none), running runs and bye/leg-bye runs. Wide runs never rotate.
    pub fn rotation_runs(&self) -> i32 {
        let byes = match self.extra_type {
            Some(ExtraType::Bye) | Some(ExtraType::LegBye) => self.extra_runs,
            _ => 0,
        };
        let bat = if self.extra_type == Some(ExtraType::Wide) {
            0
        } else {
            self.runs
        };
        bat + self.running_runs + byes
    }

    pub fn is_out_wicket(&self) -> bool {
        self.wicket && self.dismissal.map(DismissalKind::is_out).unwrap_or(false)
    }
}
