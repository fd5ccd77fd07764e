use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use crate::domains::playoffs::actions::slot_labels;
use crate::domains::playoffs::errors::PlayoffsError;
use crate::domains::playoffs::models::game::{PlayoffGame, FINAL_LABEL};
use crate::domains::playoffs::seeding::{downstream_of, Side};

/// Record one game result and, when the series reaches two wins, promote the
/// winner into the downstream slot of the next round.
///
/// The win lands on the slot's first game without a winner; the reported
/// team must be a participant of the slot, so a placeholder occupant can
/// never accumulate wins. One transaction end to end: the winner flag is
/// never left set without its promotion, or the other way round.
pub async fn report_result(
    season: &str,
    round: i32,
    slot_label: &str,
    winner: Uuid,
    pool: &PgPool,
) -> Result<(), PlayoffsError> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query(
        r#"
        UPDATE playoffs
        SET winner = $1
        WHERE playoffs_id = (
            SELECT playoffs_id FROM playoffs
            WHERE season = $2 AND round = $3 AND slot_label = $4
              AND (home_team_id = $1 OR away_team_id = $1)
              AND winner IS NULL
            ORDER BY game_index ASC
            LIMIT 1
        )
        "#,
    )
    .bind(winner)
    .bind(season)
    .bind(round)
    .bind(slot_label)
    .execute(&mut *tx)
    .await?;
    if updated.rows_affected() == 0 {
        return Err(PlayoffsError::NoSuchGame {
            season: season.to_string(),
            round,
            slot_label: slot_label.to_string(),
        });
    }

    // Best-of-three: two wins take the slot, whichever physical games
    // carried them.
    let wins: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM playoffs
         WHERE season = $1 AND round = $2 AND slot_label = $3 AND winner = $4",
    )
    .bind(season)
    .bind(round)
    .bind(slot_label)
    .bind(winner)
    .fetch_one(&mut *tx)
    .await?;

    if wins >= 2 {
        promote_winner(&mut tx, season, round, slot_label, winner).await?;
        info!(season, round, slot_label, %winner, "series decided, winner promoted");
    }

    tx.commit().await?;
    Ok(())
}

/// Write the winning team's identity into the side of the next-round slot
/// this slot feeds. A two-slot round produces the finalists, so its winners
/// go straight into the FINAL slot; everywhere else consecutive slot pairs
/// map onto the next round's slots in sorted label order.
async fn promote_winner(
    tx: &mut Transaction<'_, Postgres>,
    season: &str,
    round: i32,
    slot_label: &str,
    winner: Uuid,
) -> Result<(), PlayoffsError> {
    let game = sqlx::query_as::<_, PlayoffGame>(
        "SELECT * FROM playoffs
         WHERE season = $1 AND round = $2 AND slot_label = $3
         ORDER BY game_index ASC
         LIMIT 1",
    )
    .bind(season)
    .bind(round)
    .bind(slot_label)
    .fetch_one(&mut **tx)
    .await?;

    let (team_name, team_url) = if game.home_team_id == Some(winner) {
        (
            game.home_team_name.clone().unwrap_or_default(),
            game.home_team_url.clone().unwrap_or_default(),
        )
    } else {
        (
            game.away_team_name.clone().unwrap_or_default(),
            game.away_team_url.clone().unwrap_or_default(),
        )
    };

    let current = slot_labels(season, round, &mut **tx).await?;

    // A decisive win in the final crowns the champion; there is no
    // downstream slot to fill.
    if current.len() == 1 {
        return Ok(());
    }

    let position = current
        .iter()
        .position(|label| label == slot_label)
        .ok_or_else(|| PlayoffsError::NoSuchGame {
            season: season.to_string(),
            round,
            slot_label: slot_label.to_string(),
        })?;

    let (target_label, side) = if current.len() == 2 {
        let side = if position == 0 { Side::Home } else { Side::Away };
        (FINAL_LABEL.to_string(), side)
    } else {
        let next = slot_labels(season, round + 1, &mut **tx).await?;
        downstream_of(position, &next).ok_or_else(|| PlayoffsError::PromotionTargetMissing {
            season: season.to_string(),
            round: round + 1,
        })?
    };

    let sql = match side {
        Side::Home => {
            "UPDATE playoffs
             SET home_team_id = $1, home_team_name = $2, home_team_url = $3
             WHERE season = $4 AND round = $5 AND slot_label = $6"
        }
        Side::Away => {
            "UPDATE playoffs
             SET away_team_id = $1, away_team_name = $2, away_team_url = $3
             WHERE season = $4 AND round = $5 AND slot_label = $6"
        }
    };
    let promoted = sqlx::query(sql)
        .bind(winner)
        .bind(&team_name)
        .bind(&team_url)
        .bind(season)
        .bind(round + 1)
        .bind(&target_label)
        .execute(&mut **tx)
        .await?;
    if promoted.rows_affected() == 0 {
        return Err(PlayoffsError::PromotionTargetMissing {
            season: season.to_string(),
            round: round + 1,
        });
    }

    Ok(())
}
