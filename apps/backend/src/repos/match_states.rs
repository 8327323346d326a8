//! MatchState repository: load and store the single mutable row per
//! match.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use time::OffsetDateTime;

use crate::domain::state::{MatchState, MatchStatus, TeamSide, TossDecision};
use crate::entities::match_states;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors;

fn players_from_json(value: &serde_json::Value) -> Result<Vec<String>, DomainError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("malformed player list: {e}"),
        )
    })
}

fn players_to_json(players: &[String]) -> serde_json::Value {
    serde_json::json!(players)
}

impl From<match_states::TossDecision> for TossDecision {
    fn from(value: match_states::TossDecision) -> Self {
        match value {
            match_states::TossDecision::Bat => TossDecision::Bat,
            match_states::TossDecision::Bowl => TossDecision::Bowl,
        }
    }
}

impl From<TossDecision> for match_states::TossDecision {
    fn from(value: TossDecision) -> Self {
        match value {
            TossDecision::Bat => match_states::TossDecision::Bat,
            TossDecision::Bowl => match_states::TossDecision::Bowl,
        }
    }
}

impl From<match_states::MatchStatus> for MatchStatus {
    fn from(value: match_states::MatchStatus) -> Self {
        match value {
            match_states::MatchStatus::NotStarted => MatchStatus::NotStarted,
            match_states::MatchStatus::InProgress => MatchStatus::InProgress,
            match_states::MatchStatus::Completed => MatchStatus::Completed,
        }
    }
}

impl From<MatchStatus> for match_states::MatchStatus {
    fn from(value: MatchStatus) -> Self {
        match value {
            MatchStatus::NotStarted => match_states::MatchStatus::NotStarted,
            MatchStatus::InProgress => match_states::MatchStatus::InProgress,
            MatchStatus::Completed => match_states::MatchStatus::Completed,
        }
    }
}

fn to_domain(row: &match_states::Model) -> Result<MatchState, DomainError> {
    Ok(MatchState {
        match_id: row.match_id,
        team_a: TeamSide {
            team_id: row.team_a_id.clone(),
            runs: row.team_a_runs,
            wickets: row.team_a_wickets,
            overs: row.team_a_overs,
            extras: row.team_a_extras,
            playing_xi: players_from_json(&row.team_a_playing_xi)?,
            yet_to_bat: players_from_json(&row.team_a_yet_to_bat)?,
            out_batters: players_from_json(&row.team_a_out_batters)?,
        },
        team_b: TeamSide {
            team_id: row.team_b_id.clone(),
            runs: row.team_b_runs,
            wickets: row.team_b_wickets,
            overs: row.team_b_overs,
            extras: row.team_b_extras,
            playing_xi: players_from_json(&row.team_b_playing_xi)?,
            yet_to_bat: players_from_json(&row.team_b_yet_to_bat)?,
            out_batters: players_from_json(&row.team_b_out_batters)?,
        },
        toss_winner: row.toss_winner.clone(),
        toss_decision: row.toss_decision.clone().into(),
        status: row.status.clone().into(),
        innings: row.innings,
        batting_team_id: row.batting_team_id.clone(),
        striker_id: row.striker_id.clone(),
        non_striker_id: row.non_striker_id.clone(),
        current_bowler_id: row.current_bowler_id.clone(),
        last_over_bowler_id: row.last_over_bowler_id.clone(),
        total_overs: row.total_overs,
        first_innings_completed: row.first_innings_completed,
        second_innings_completed: row.second_innings_completed,
        winner: row.winner.clone(),
        result: row.result.clone(),
    })
}

pub async fn find_by_match_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<MatchState>, DomainError> {
    let row = match_states::Entity::find()
        .filter(match_states::Column::MatchId.eq(match_id))
        .one(conn)
        .await
        .map_err(db_errors::map_db_err)?;

    row.as_ref().map(to_domain).transpose()
}

/// Load the match state or fail with `StateNotFound`.
pub async fn require_by_match_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<MatchState, DomainError> {
    find_by_match_id(conn, match_id)
        .await?
        .ok_or(DomainError::StateNotFound(match_id))
}

/// Insert a fresh match-state row. Used by seeding and tests; the
/// scoring pipeline itself only ever updates.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    state: &MatchState,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    let active = match_states::ActiveModel {
        match_id: Set(state.match_id),
        team_a_id: Set(state.team_a.team_id.clone()),
        team_a_runs: Set(state.team_a.runs),
        team_a_wickets: Set(state.team_a.wickets),
        team_a_overs: Set(state.team_a.overs),
        team_a_extras: Set(state.team_a.extras),
        team_a_playing_xi: Set(players_to_json(&state.team_a.playing_xi)),
        team_a_yet_to_bat: Set(players_to_json(&state.team_a.yet_to_bat)),
        team_a_out_batters: Set(players_to_json(&state.team_a.out_batters)),
        team_b_id: Set(state.team_b.team_id.clone()),
        team_b_runs: Set(state.team_b.runs),
        team_b_wickets: Set(state.team_b.wickets),
        team_b_overs: Set(state.team_b.overs),
        team_b_extras: Set(state.team_b.extras),
        team_b_playing_xi: Set(players_to_json(&state.team_b.playing_xi)),
        team_b_yet_to_bat: Set(players_to_json(&state.team_b.yet_to_bat)),
        team_b_out_batters: Set(players_to_json(&state.team_b.out_batters)),
        toss_winner: Set(state.toss_winner.clone()),
        toss_decision: Set(state.toss_decision.into()),
        status: Set(state.status.into()),
        innings: Set(state.innings),
        batting_team_id: Set(state.batting_team_id.clone()),
        striker_id: Set(state.striker_id.clone()),
        non_striker_id: Set(state.non_striker_id.clone()),
        current_bowler_id: Set(state.current_bowler_id.clone()),
        last_over_bowler_id: Set(state.last_over_bowler_id.clone()),
        total_overs: Set(state.total_overs),
        first_innings_completed: Set(state.first_innings_completed),
        second_innings_completed: Set(state.second_innings_completed),
        winner: Set(state.winner.clone()),
        result: Set(state.result.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    active.insert(conn).await.map_err(db_errors::map_db_err)?;
    Ok(())
}

/// Persist the advanced state over the existing row.
pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    state: &MatchState,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    let row = match_states::Entity::find()
        .filter(match_states::Column::MatchId.eq(state.match_id))
        .one(conn)
        .await
        .map_err(db_errors::map_db_err)?
        .ok_or(DomainError::StateNotFound(state.match_id))?;

    let mut active: match_states::ActiveModel = row.into();
    active.team_a_runs = Set(state.team_a.runs);
    active.team_a_wickets = Set(state.team_a.wickets);
    active.team_a_overs = Set(state.team_a.overs);
    active.team_a_extras = Set(state.team_a.extras);
    active.team_a_yet_to_bat = Set(players_to_json(&state.team_a.yet_to_bat));
    active.team_a_out_batters = Set(players_to_json(&state.team_a.out_batters));
    active.team_b_runs = Set(state.team_b.runs);
    active.team_b_wickets = Set(state.team_b.wickets);
    active.team_b_overs = Set(state.team_b.overs);
    active.team_b_extras = Set(state.team_b.extras);
    active.team_b_yet_to_bat = Set(players_to_json(&state.team_b.yet_to_bat));
    active.team_b_out_batters = Set(players_to_json(&state.team_b.out_batters));
    active.status = Set(state.status.into());
    active.innings = Set(state.innings);
    active.batting_team_id = Set(state.batting_team_id.clone());
    active.striker_id = Set(state.striker_id.clone());
    active.non_striker_id = Set(state.non_striker_id.clone());
    active.current_bowler_id = Set(state.current_bowler_id.clone());
    active.last_over_bowler_id = Set(state.last_over_bowler_id.clone());
    active.first_innings_completed = Set(state.first_innings_completed);
    active.second_innings_completed = Set(state.second_innings_completed);
    active.winner = Set(state.winner.clone());
    active.result = Set(state.result.clone());
    active.updated_at = Set(now);

    active.update(conn).await.map_err(db_errors::map_db_err)?;
    Ok(())
}

/// Administrative purge of the state row itself.
pub async fn delete_by_match_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, DomainError> {
    let res = match_states::Entity::delete_many()
        .filter(match_states::Column::MatchId.eq(match_id))
        .exec(conn)
        .await
        .map_err(db_errors::map_db_err)?;
    Ok(res.rows_affected)
}
