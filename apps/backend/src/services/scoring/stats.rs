//! Per-player match statistics, maintained synchronously inside the
//! delivery transaction.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::domain::delivery::{Delivery, ExtraType};
use crate::domain::overs;
use crate::domain::wicket::BatterOut;
use crate::errors::domain::DomainError;
use crate::repos::match_player_stats;

/// Fold one accepted delivery into the striker's and bowler's figures.
pub async fn apply_delivery<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    delivery: &Delivery,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    let mut batter =
        match_player_stats::find_or_default(conn, delivery.match_id, &delivery.striker_id).await?;

    batter.runs += delivery.bat_runs_credited();

    // A ball faced only on a legal delivery.
    if delivery.legal
        && delivery.extra_type != Some(ExtraType::Wide)
        && delivery.extra_type != Some(ExtraType::NoBall)
    {
        batter.balls += 1;
    }

    if delivery.boundary {
        if delivery.boundary_runs == 4 {
            batter.fours += 1;
        }
        if delivery.boundary_runs == 6 {
            batter.sixes += 1;
        }
    }

    if batter.balls > 0 {
        batter.strike_rate = f64::from(batter.runs) * 100.0 / f64::from(batter.balls);
    }

    match_player_stats::save(conn, &batter, now).await?;

    let mut bowler =
        match_player_stats::find_or_default(conn, delivery.match_id, &delivery.bowler_id).await?;

    if delivery.legal {
        bowler.balls_bowled += 1;
        bowler.overs = overs::overs_from_balls(bowler.balls_bowled);
    }

    bowler.runs_conceded += delivery.total_runs();

    if delivery.extra_type == Some(ExtraType::Wide) {
        bowler.wides += delivery.extra_runs;
    }
    if delivery.extra_type == Some(ExtraType::NoBall) {
        bowler.no_balls += 1;
    }

    if delivery.wicket
        && delivery
            .dismissal
            .map(|d| d.credits_bowler())
            .unwrap_or(false)
    {
        bowler.wickets += 1;
    }

    if bowler.balls_bowled > 0 {
        bowler.economy = f64::from(bowler.runs_conceded) * 6.0 / f64::from(bowler.balls_bowled);
    }

    match_player_stats::save(conn, &bowler, now).await?;

    Ok(())
}

/// Record the dismissal on the out batter's figures.
pub async fn mark_batter_out<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    out: &BatterOut,
    now: OffsetDateTime,
) -> Result<(), DomainError> {
    let mut stats = match_player_stats::find_or_default(conn, match_id, &out.batter_id).await?;

    stats.out = true;
    stats.dismissal = Some(out.dismissal);
    // Bowler credited only for bowler wickets; resolution already nulled
    // the id otherwise.
    stats.dismissed_by = out.bowler_id.clone();
    stats.fielder_id = out.fielder_id.clone();

    match_player_stats::save(conn, &stats, now).await
}
