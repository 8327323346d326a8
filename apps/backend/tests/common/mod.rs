//! Shared helpers for integration tests: an in-memory database with the
//! schema applied, plus match-state and delivery-input builders.

// Each test binary compiles this module; not every binary uses every helper.
#![allow(dead_code)]

use backend::domain::delivery::DeliveryInput;
use backend::domain::state::{MatchState, MatchStatus, TeamSide, TossDecision};
use backend::repos::match_states;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use time::OffsetDateTime;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh in-memory SQLite database with all migrations applied.
pub async fn test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

/// Eleven player ids "a1".."a11" (or any prefix).
pub fn xi(prefix: &str) -> Vec<String> {
    (1..=11).map(|n| format!("{prefix}{n}")).collect()
}

/// An in-progress 20-over match: team-a won the toss and bats, openers
/// a1/a2 at the crease, b1 marked as the current bowler.
pub fn in_progress_state(match_id: i64) -> MatchState {
    let mut team_a = TeamSide::new("team-a", xi("a"));
    let team_b = TeamSide::new("team-b", xi("b"));
    team_a.yet_to_bat.retain(|p| p != "a1" && p != "a2");

    MatchState {
        match_id,
        team_a,
        team_b,
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

/// Insert the standard in-progress state row for `match_id`.
pub async fn seed_match(db: &DatabaseConnection, match_id: i64) -> MatchState {
    let state = in_progress_state(match_id);
    match_states::create(db, &state, OffsetDateTime::now_utc())
        .await
        .expect("seed match state");
    state
}

/// A legal first-innings delivery with `runs` off the bat.
pub fn legal(runs: i32) -> DeliveryInput {
    DeliveryInput {
        innings: 1,
        runs,
        ..Default::default()
    }
}
