use sea_orm::{Database, DatabaseConnection};

use crate::error::AppError;

/// Connect to the database named by `DATABASE_URL`. Does not run
/// migrations.
pub async fn connect_db() -> Result<DatabaseConnection, AppError> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| AppError::config("DATABASE_URL is not set"))?;

    let conn = Database::connect(&database_url).await?;
    Ok(conn)
}
