//! The delivery orchestrator: per-match lock, one transaction, the pure
//! pipeline, and the atomic persist of delivery + state + statistics.

use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::db::with_txn;
use crate::domain::delivery::{Delivery, DeliveryInput};
use crate::domain::pipeline;
use crate::domain::state::MatchState;
use crate::error::AppError;
use crate::repos::{deliveries, match_player_stats, match_states};
use crate::services::scoring::stats;
use crate::state::AppState;

/// Scoring domain service.
pub struct ScoringService;

impl ScoringService {
    pub fn new() -> Self {
        Self
    }

    /// Record one delivery for a match.
    ///
    /// Holds the match's write lock for the whole call and commits the
    /// delivery, the advanced MatchState and the player statistics in
    /// one transaction; any error rolls everything back.
    #[instrument(skip(self, app_state, input))]
    pub async fn record_delivery(
        &self,
        app_state: &AppState,
        match_id: i64,
        input: DeliveryInput,
    ) -> Result<Delivery, AppError> {
        let lock = app_state.match_locks.for_match(match_id);
        let _guard = lock.lock().await;

        let delivery = with_txn(&app_state.db, |txn| {
            Box::pin(async move {
                let now = OffsetDateTime::now_utc();

                let mut state = match_states::require_by_match_id(txn, match_id).await?;
                let last = deliveries::find_last(txn, match_id, input.innings).await?;

                let (delivery, effects) =
                    pipeline::apply_delivery(&mut state, last.as_ref(), &input, now)?;

                let persisted = deliveries::create(txn, &delivery).await?;
                match_states::update(txn, &state, now).await?;

                stats::apply_delivery(txn, &persisted, now).await?;
                if let Some(out) = &effects.batter_out {
                    stats::mark_batter_out(txn, match_id, out, now).await?;
                }

                Ok(persisted)
            })
        })
        .await?;

        info!(
            match_id,
            innings = delivery.innings,
            over = delivery.over,
            ball = delivery.ball,
            sequence = delivery.sequence,
            "delivery recorded"
        );

        Ok(delivery)
    }

    /// All deliveries for a match, ordered (innings, over, ball).
    pub async fn list_deliveries(
        &self,
        app_state: &AppState,
        match_id: i64,
    ) -> Result<Vec<Delivery>, AppError> {
        Ok(deliveries::list_by_match(&app_state.db, match_id).await?)
    }

    /// One innings' deliveries, ordered (over, ball).
    pub async fn list_deliveries_for_innings(
        &self,
        app_state: &AppState,
        match_id: i64,
        innings: i16,
    ) -> Result<Vec<Delivery>, AppError> {
        Ok(deliveries::list_by_match_and_innings(&app_state.db, match_id, innings).await?)
    }

    /// Current match state.
    pub async fn match_state(
        &self,
        app_state: &AppState,
        match_id: i64,
    ) -> Result<MatchState, AppError> {
        Ok(match_states::require_by_match_id(&app_state.db, match_id).await?)
    }

    /// Administrative purge: delete every delivery and stats row for the
    /// match in one transaction. The state row survives; standings
    /// recomputation stays with the caller.
    #[instrument(skip(self, app_state))]
    pub async fn purge_match(
        &self,
        app_state: &AppState,
        match_id: i64,
    ) -> Result<u64, AppError> {
        let lock = app_state.match_locks.for_match(match_id);
        let _guard = lock.lock().await;

        let removed = with_txn(&app_state.db, |txn| {
            Box::pin(async move {
                let removed = deliveries::delete_by_match(txn, match_id).await?;
                match_player_stats::delete_by_match(txn, match_id).await?;
                Ok(removed)
            })
        })
        .await?;

        // Release our handle first; forget only removes an unheld entry.
        drop(_guard);
        drop(lock);
        app_state.match_locks.forget(match_id);

        info!(match_id, removed, "match deliveries purged");
        Ok(removed)
    }
}

impl Default for ScoringService {
    fn default() -> Self {
        Self::new()
    }
}
