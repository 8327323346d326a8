//! Match state read routes.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::MatchId;
use crate::services::scoring::ScoringService;
use crate::state::app_state::AppState;

/// GET /api/matches/{match_id}/state
async fn get_state(
    app_state: web::Data<AppState>,
    match_id: MatchId,
) -> Result<HttpResponse, AppError> {
    let service = ScoringService::new();
    let state = service.match_state(&app_state, match_id.0).await?;
    Ok(HttpResponse::Ok().json(state))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{match_id}/state").route(web::get().to(get_state)));
}
