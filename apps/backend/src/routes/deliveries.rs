//! Delivery ingestion and query routes.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::delivery::DeliveryInput;
use crate::error::AppError;
use crate::extractors::MatchId;
use crate::services::scoring::ScoringService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize, Default)]
pub struct DeliveryListQuery {
    innings: Option<i16>,
}

/// POST /api/matches/{match_id}/deliveries
async fn record_delivery(
    app_state: web::Data<AppState>,
    match_id: MatchId,
    body: web::Json<DeliveryInput>,
) -> Result<HttpResponse, AppError> {
    let service = ScoringService::new();
    let delivery = service
        .record_delivery(&app_state, match_id.0, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(delivery))
}

/// GET /api/matches/{match_id}/deliveries[?innings=N]
async fn list_deliveries(
    app_state: web::Data<AppState>,
    match_id: MatchId,
    query: web::Query<DeliveryListQuery>,
) -> Result<HttpResponse, AppError> {
    let service = ScoringService::new();
    let deliveries = match query.innings {
        Some(innings) => {
            service
                .list_deliveries_for_innings(&app_state, match_id.0, innings)
                .await?
        }
        None => service.list_deliveries(&app_state, match_id.0).await?,
    };
    Ok(HttpResponse::Ok().json(deliveries))
}

/// DELETE /api/matches/{match_id}/deliveries
async fn purge_deliveries(
    app_state: web::Data<AppState>,
    match_id: MatchId,
) -> Result<HttpResponse, AppError> {
    let service = ScoringService::new();
    let removed = service.purge_match(&app_state, match_id.0).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "removed": removed })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{match_id}/deliveries")
            .route(web::post().to(record_delivery))
            .route(web::get().to(list_deliveries))
            .route(web::delete().to(purge_deliveries)),
    );
}
