use sqlx::PgPool;
use tracing::info;

use crate::domains::playoffs::errors::PlayoffsError;

/// Delete every playoff row for a season. Deleting a season that has no
/// bracket is a failure, not a silent no-op.
pub async fn delete_bracket(season: &str, pool: &PgPool) -> Result<u64, PlayoffsError> {
    let result = sqlx::query("DELETE FROM playoffs WHERE season = $1")
        .bind(season)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(PlayoffsError::NothingToDelete(season.to_string()));
    }

    info!(season, rows = result.rows_affected(), "playoff bracket deleted");
    Ok(result.rows_affected())
}
