//! Per-player match statistics repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::domain::delivery::DismissalKind;
use crate::entities::match_player_stats;
use crate::errors::domain::DomainError;
use crate::infra::db_errors;

/// Batting and bowling figures for one player in one match.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerStats {
    pub match_id: i64,
    pub player_id: String,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub strike_rate: f64,
    pub out: bool,
    pub dismissal: Option<DismissalKind>,
    pub dismissed_by: Option<String>,
    pub fielder_id: Option<String>,
    pub balls_bowled: i32,
    pub overs: f64,
    pub runs_conceded: i32,
    pub wickets: i32,
    pub wides: i32,
    pub no_balls: i32,
    pub economy: f64,
}

impl PlayerStats {
    pub fn new(match_id: i64, player_id: impl Into<String>) -> Self {
        Self {
            match_id,
            player_id: player_id.into(),
            ..Default::default()
        }
    }
}

fn to_domain(row: match_player_stats::Model) -> PlayerStats {
    PlayerStats {
        match_id: row.match_id,
        player_id: row.player_id,
        runs: row.runs,
        balls: row.balls,
        fours: row.fours,
        sixes: row.sixes,
        strike_rate: row.strike_rate,
        out: row.out,
        dismissal: row.dismissal.map(Into::into),
        dismissed_by: row.dismissed_by,
        fielder_id: row.fielder_id,
        balls_bowled: row.balls_bowled,
        overs: row.overs,
        runs_conceded: row.runs_conceded,
        wickets: row.wickets,
        wides: row.wides,
        no_balls: row.no_balls,
        economy: row.economy,
    }
}

pub async fn find_by_match_and_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    player_id: &str,
) -> Result<Option<PlayerStats>, DomainError> {
    let row = match_player_stats::Entity::find()
        .filter(match_player_stats::Column::MatchId.eq(match_id))
        .filter(match_player_stats::Column::PlayerId.eq(player_id))
        .one(conn)
        .await
        .map_err(db_errors::map_db_err)?;

    Ok(row.map(to_domain))
}

/// Existing figures for (match, player), or a zeroed record.
pub async fn find_or_default<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    player_id: &str,
) -> Result<PlayerStats, DomainError> {
    Ok(find_by_match_and_player(conn, match_id, player_id)
        .await?
        .unwrap_or_else(|| PlayerStats::new(match_id, player_id)))
}

/// Upsert the figures keyed by (match, player).
pub async fn save<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    stats: &PlayerStats,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    let existing = match_player_stats::Entity::find()
        .filter(match_player_stats::Column::MatchId.eq(stats.match_id))
        .filter(match_player_stats::Column::PlayerId.eq(stats.player_id.as_str()))
        .one(conn)
        .await
        .map_err(db_errors::map_db_err)?;

    match existing {
        Some(row) => {
            let mut active: match_player_stats::ActiveModel = row.into();
            active.runs = Set(stats.runs);
            active.balls = Set(stats.balls);
            active.fours = Set(stats.fours);
            active.sixes = Set(stats.sixes);
            active.strike_rate = Set(stats.strike_rate);
            active.out = Set(stats.out);
            active.dismissal = Set(stats.dismissal.map(Into::into));
            active.dismissed_by = Set(stats.dismissed_by.clone());
            active.fielder_id = Set(stats.fielder_id.clone());
            active.balls_bowled = Set(stats.balls_bowled);
            active.overs = Set(stats.overs);
            active.runs_conceded = Set(stats.runs_conceded);
            active.wickets = Set(stats.wickets);
            active.wides = Set(stats.wides);
            active.no_balls = Set(stats.no_balls);
            active.economy = Set(stats.economy);
            active.updated_at = Set(now);
            active.update(conn).await.map_err(db_errors::map_db_err)?;
        }
        None => {
            let active = match_player_stats::ActiveModel {
                match_id: Set(stats.match_id),
                player_id: Set(stats.player_id.clone()),
                runs: Set(stats.runs),
                balls: Set(stats.balls),
                fours: Set(stats.fours),
                sixes: Set(stats.sixes),
                strike_rate: Set(stats.strike_rate),
                out: Set(stats.out),
                dismissal: Set(stats.dismissal.map(Into::into)),
                dismissed_by: Set(stats.dismissed_by.clone()),
                fielder_id: Set(stats.fielder_id.clone()),
                balls_bowled: Set(stats.balls_bowled),
                overs: Set(stats.overs),
                runs_conceded: Set(stats.runs_conceded),
                wickets: Set(stats.wickets),
                wides: Set(stats.wides),
                no_balls: Set(stats.no_balls),
                economy: Set(stats.economy),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            active.insert(conn).await.map_err(db_errors::map_db_err)?;
        }
    }

    Ok(())
}

pub async fn list_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<PlayerStats>, DomainError> {
    let rows = match_player_stats::Entity::find()
        .filter(match_player_stats::Column::MatchId.eq(match_id))
        .order_by_asc(match_player_stats::Column::PlayerId)
        .all(conn)
        .await
        .map_err(db_errors::map_db_err)?;

    Ok(rows.into_iter().map(to_domain).collect())
}

/// Administrative purge of every stats row for a match.
pub async fn delete_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, DomainError> {
    let res = match_player_stats::Entity::delete_many()
        .filter(match_player_stats::Column::MatchId.eq(match_id))
        .exec(conn)
        .await
        .map_err(db_errors::map_db_err)?;
    Ok(res.rows_affected)
}
