use sea_orm::DatabaseConnection;

use crate::services::match_locks::MatchLocks;

/// Application state containing shared resources.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection.
    pub db: DatabaseConnection,
    /// Per-match write serialization.
    pub match_locks: MatchLocks,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            match_locks: MatchLocks::new(),
        }
    }
}
