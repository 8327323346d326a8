//! Delivery repository: append-only ball records plus match queries.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::delivery::{Delivery, DismissalKind, ExtraType, RunOutEnd};
use crate::entities::deliveries;
use crate::errors::domain::DomainError;
use crate::infra::db_errors;

impl From<deliveries::ExtraType> for ExtraType {
    fn from(value: deliveries::ExtraType) -> Self {
        match value {
            deliveries::ExtraType::Wide => ExtraType::Wide,
            deliveries::ExtraType::NoBall => ExtraType::NoBall,
            deliveries::ExtraType::Bye => ExtraType::Bye,
            deliveries::ExtraType::LegBye => ExtraType::LegBye,
        }
    }
}

impl From<ExtraType> for deliveries::ExtraType {
    fn from(value: ExtraType) -> Self {
        match value {
            ExtraType::Wide => deliveries::ExtraType::Wide,
            ExtraType::NoBall => deliveries::ExtraType::NoBall,
            ExtraType::Bye => deliveries::ExtraType::Bye,
            ExtraType::LegBye => deliveries::ExtraType::LegBye,
        }
    }
}

impl From<deliveries::Dismissal> for DismissalKind {
    fn from(value: deliveries::Dismissal) -> Self {
        match value {
            deliveries::Dismissal::Bowled => DismissalKind::Bowled,
            deliveries::Dismissal::Caught => DismissalKind::Caught,
            deliveries::Dismissal::Lbw => DismissalKind::Lbw,
            deliveries::Dismissal::Stumped => DismissalKind::Stumped,
            deliveries::Dismissal::RunOut => DismissalKind::RunOut,
            deliveries::Dismissal::HitWicket => DismissalKind::HitWicket,
            deliveries::Dismissal::HitTheBallTwice => DismissalKind::HitTheBallTwice,
            deliveries::Dismissal::RetiredHurt => DismissalKind::RetiredHurt,
        }
    }
}

impl From<DismissalKind> for deliveries::Dismissal {
    fn from(value: DismissalKind) -> Self {
        match value {
            DismissalKind::Bowled => deliveries::Dismissal::Bowled,
            DismissalKind::Caught => deliveries::Dismissal::Caught,
            DismissalKind::Lbw => deliveries::Dismissal::Lbw,
            DismissalKind::Stumped => deliveries::Dismissal::Stumped,
            DismissalKind::RunOut => deliveries::Dismissal::RunOut,
            DismissalKind::HitWicket => deliveries::Dismissal::HitWicket,
            DismissalKind::HitTheBallTwice => deliveries::Dismissal::HitTheBallTwice,
            DismissalKind::RetiredHurt => deliveries::Dismissal::RetiredHurt,
        }
    }
}

impl From<deliveries::RunOutEnd> for RunOutEnd {
    fn from(value: deliveries::RunOutEnd) -> Self {
        match value {
            deliveries::RunOutEnd::Striker => RunOutEnd::Striker,
            deliveries::RunOutEnd::NonStriker => RunOutEnd::NonStriker,
        }
    }
}

impl From<RunOutEnd> for deliveries::RunOutEnd {
    fn from(value: RunOutEnd) -> Self {
        match value {
            RunOutEnd::Striker => deliveries::RunOutEnd::Striker,
            RunOutEnd::NonStriker => deliveries::RunOutEnd::NonStriker,
        }
    }
}

fn to_domain(row: deliveries::Model) -> Delivery {
    Delivery {
        id: Some(row.id),
        match_id: row.match_id,
        innings: row.innings,
        over: row.over_no,
        ball: row.ball_no,
        sequence: row.sequence,
        batting_team_id: row.batting_team_id,
        striker_id: row.striker_id,
        non_striker_id: row.non_striker_id,
        bowler_id: row.bowler_id,
        runs: row.runs,
        running_runs: row.running_runs,
        extra_type: row.extra_type.map(Into::into),
        extra_runs: row.extra_runs,
        legal: row.legal,
        free_hit: row.free_hit,
        over_completed: row.over_completed,
        wicket: row.wicket,
        dismissal: row.dismissal.map(Into::into),
        out_batter_id: row.out_batter_id,
        new_batter_id: row.new_batter_id,
        run_out_end: row.run_out_end.map(Into::into),
        fielder_id: row.fielder_id,
        boundary: row.boundary,
        boundary_runs: row.boundary_runs,
        overthrow: row.overthrow,
        team_runs_at_ball: row.team_runs_at_ball,
        team_wickets_at_ball: row.team_wickets_at_ball,
        overs_at_ball: row.overs_at_ball,
        created_at: row.created_at,
    }
}

/// Insert a resolved delivery; returns it with the assigned row id.
pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    delivery: &Delivery,
) -> Result<Delivery, DomainError> {
    let active = deliveries::ActiveModel {
        match_id: Set(delivery.match_id),
        innings: Set(delivery.innings),
        over_no: Set(delivery.over),
        ball_no: Set(delivery.ball),
        sequence: Set(delivery.sequence),
        batting_team_id: Set(delivery.batting_team_id.clone()),
        striker_id: Set(delivery.striker_id.clone()),
        non_striker_id: Set(delivery.non_striker_id.clone()),
        bowler_id: Set(delivery.bowler_id.clone()),
        runs: Set(delivery.runs),
        running_runs: Set(delivery.running_runs),
        extra_type: Set(delivery.extra_type.map(Into::into)),
        extra_runs: Set(delivery.extra_runs),
        legal: Set(delivery.legal),
        free_hit: Set(delivery.free_hit),
        over_completed: Set(delivery.over_completed),
        wicket: Set(delivery.wicket),
        dismissal: Set(delivery.dismissal.map(Into::into)),
        out_batter_id: Set(delivery.out_batter_id.clone()),
        new_batter_id: Set(delivery.new_batter_id.clone()),
        run_out_end: Set(delivery.run_out_end.map(Into::into)),
        fielder_id: Set(delivery.fielder_id.clone()),
        boundary: Set(delivery.boundary),
        boundary_runs: Set(delivery.boundary_runs),
        overthrow: Set(delivery.overthrow),
        team_runs_at_ball: Set(delivery.team_runs_at_ball),
        team_wickets_at_ball: Set(delivery.team_wickets_at_ball),
        overs_at_ball: Set(delivery.overs_at_ball),
        created_at: Set(delivery.created_at),
        ..Default::default()
    };

    let row = active.insert(conn).await.map_err(db_errors::map_db_err)?;
    Ok(to_domain(row))
}

/// Most recent delivery of the (match, innings), by global sequence.
pub async fn find_last<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    innings: i16,
) -> Result<Option<Delivery>, DomainError> {
    let row = deliveries::Entity::find()
        .filter(deliveries::Column::MatchId.eq(match_id))
        .filter(deliveries::Column::Innings.eq(innings))
        .order_by_desc(deliveries::Column::Sequence)
        .one(conn)
        .await
        .map_err(db_errors::map_db_err)?;

    Ok(row.map(to_domain))
}

pub async fn list_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<Delivery>, DomainError> {
    let rows = deliveries::Entity::find()
        .filter(deliveries::Column::MatchId.eq(match_id))
        .order_by_asc(deliveries::Column::Innings)
        .order_by_asc(deliveries::Column::OverNo)
        .order_by_asc(deliveries::Column::BallNo)
        .order_by_asc(deliveries::Column::Sequence)
        .all(conn)
        .await
        .map_err(db_errors::map_db_err)?;

    Ok(rows.into_iter().map(to_domain).collect())
}

pub async fn list_by_match_and_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    innings: i16,
) -> Result<Vec<Delivery>, DomainError> {
    let rows = deliveries::Entity::find()
        .filter(deliveries::Column::MatchId.eq(match_id))
        .filter(deliveries::Column::Innings.eq(innings))
        .order_by_asc(deliveries::Column::OverNo)
        .order_by_asc(deliveries::Column::BallNo)
        .order_by_asc(deliveries::Column::Sequence)
        .all(conn)
        .await
        .map_err(db_errors::map_db_err)?;

    Ok(rows.into_iter().map(to_domain).collect())
}

/// Administrative purge of every delivery for a match.
pub async fn delete_by_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, DomainError> {
    let res = deliveries::Entity::delete_many()
        .filter(deliveries::Column::MatchId.eq(match_id))
        .exec(conn)
        .await
        .map_err(db_errors::map_db_err)?;
    Ok(res.rows_affected)
}
