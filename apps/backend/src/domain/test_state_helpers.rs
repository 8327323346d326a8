//! Test-only match state helpers for domain unit tests.

#[cfg(test)]
pub use state_helpers::{delivery_fixture, in_progress_state, xi};

#[cfg(test)]
mod state_helpers {
    use time::OffsetDateTime;

    use crate::domain::delivery::Delivery;
    use crate::domain::state::{MatchState, MatchStatus, TeamSide, TossDecision};

    /// Eleven player ids with the given prefix: "a1".."a11".
    pub fn xi(prefix: &str) -> Vec<String> {
        (1..=11).map(|n| format!("{prefix}{n}")).collect()
    }

    /// A first-innings state mid-play: team A won the toss and bats,
    /// a1/a2 at the crease, b1 bowling, 20-over match.
    pub fn in_progress_state(match_id: i64) -> MatchState {
        let mut team_a = TeamSide::new("team-a", xi("a"));
        team_a.yet_to_bat.retain(|p| p != "a1" && p != "a2");

        MatchState {
            match_id,
            team_a,
            team_b: TeamSide::new("team-b", xi("b")),
            toss_winner: "team-a".to_string(),
            toss_decision: TossDecision::Bat,
            status: MatchStatus::InProgress,
            innings: 1,
            batting_team_id: "team-a".to_string(),
            striker_id: Some("a1".to_string()),
            non_striker_id: Some("a2".to_string()),
            current_bowler_id: Some("b1".to_string()),
            last_over_bowler_id: None,
            total_overs: 20,
            first_innings_completed: false,
            second_innings_completed: false,
            winner: None,
            result: None,
        }
    }

    /// A resolved delivery with every optional piece empty; tests tweak
    /// the fields they care about.
    pub fn delivery_fixture(match_id: i64, over: i32, ball: i16, sequence: i64) -> Delivery {
        Delivery {
            id: None,
            match_id,
            innings: 1,
            over,
            ball,
            sequence,
            batting_team_id: "team-a".to_string(),
            striker_id: "a1".to_string(),
            non_striker_id: "a2".to_string(),
            bowler_id: "b1".to_string(),
            runs: 0,
            running_runs: 0,
            extra_type: None,
            extra_runs: 0,
            legal: true,
            free_hit: false,
            over_completed: false,
            wicket: false,
            dismissal: None,
            out_batter_id: None,
            new_batter_id: None,
            run_out_end: None,
            fielder_id: None,
            boundary: false,
            boundary_runs: 0,
            overthrow: false,
            team_runs_at_ball: 0,
            team_wickets_at_ball: 0,
            overs_at_ball: 0.0,
            created_at: OffsetDateTime::UNIX_EPOCH,
        }
    }
}
