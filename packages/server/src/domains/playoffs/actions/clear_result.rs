use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::domains::playoffs::errors::PlayoffsError;

/// Undo a recorded game result for `team_id` and, if the series is no longer
/// decided, retract the team's promotion from the next round.
///
/// The most recently won game of the slot loses its winner. The next-round
/// retraction checks the home and away sides independently and only touches
/// rows whose side currently carries the team, so it is a no-op when the
/// series had not been decided yet.
pub async fn clear_result(
    season: &str,
    round: i32,
    slot_label: &str,
    team_id: Uuid,
    pool: &PgPool,
) -> Result<(), PlayoffsError> {
    let mut tx = pool.begin().await?;

    let cleared = sqlx::query(
        r#"
        UPDATE playoffs
        SET winner = NULL
        WHERE playoffs_id = (
            SELECT playoffs_id FROM playoffs
            WHERE season = $1 AND round = $2 AND slot_label = $3 AND winner = $4
            ORDER BY game_index DESC
            LIMIT 1
        )
        "#,
    )
    .bind(season)
    .bind(round)
    .bind(slot_label)
    .bind(team_id)
    .execute(&mut *tx)
    .await?;
    if cleared.rows_affected() == 0 {
        return Err(PlayoffsError::NoSuchGame {
            season: season.to_string(),
            round,
            slot_label: slot_label.to_string(),
        });
    }

    let remaining: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM playoffs
         WHERE season = $1 AND round = $2 AND slot_label = $3 AND winner = $4",
    )
    .bind(season)
    .bind(round)
    .bind(slot_label)
    .bind(team_id)
    .fetch_one(&mut *tx)
    .await?;

    if remaining < 2 {
        sqlx::query(
            "UPDATE playoffs
             SET home_team_id = NULL, home_team_name = NULL, home_team_url = NULL, winner = NULL
             WHERE season = $1 AND round = $2 AND home_team_id = $3",
        )
        .bind(season)
        .bind(round + 1)
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE playoffs
             SET away_team_id = NULL, away_team_name = NULL, away_team_url = NULL, winner = NULL
             WHERE season = $1 AND round = $2 AND away_team_id = $3",
        )
        .bind(season)
        .bind(round + 1)
        .bind(team_id)
        .execute(&mut *tx)
        .await?;

        info!(season, round, slot_label, %team_id, "result cleared, promotion retracted");
    }

    tx.commit().await?;
    Ok(())
}
