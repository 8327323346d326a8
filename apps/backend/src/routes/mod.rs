use actix_web::web;

pub mod deliveries;
pub mod health;
pub mod match_states;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under the same scopes; tests
/// register the identical paths so that endpoint behavior can be
/// exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Match scoring routes: /api/matches/**
    cfg.service(
        web::scope("/api/matches")
            .configure(deliveries::configure_routes)
            .configure(match_states::configure_routes),
    );
}
