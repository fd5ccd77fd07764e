use sqlx::PgPool;

use crate::domains::playoffs::errors::PlayoffsError;
use crate::domains::playoffs::models::game::PlayoffGame;

/// Reconstruct the persisted bracket as rounds -> slots -> games.
///
/// Rounds ascend; slots within a round sort numerically with the FINAL label
/// last; games keep their creation order. One ordered query, grouped in
/// memory. An unknown season yields an empty list, not an error.
pub async fn list_bracket(
    season: &str,
    pool: &PgPool,
) -> Result<Vec<Vec<Vec<PlayoffGame>>>, PlayoffsError> {
    let rows = sqlx::query_as::<_, PlayoffGame>(
        r#"
        SELECT * FROM playoffs
        WHERE season = $1
        ORDER BY round ASC,
                 CASE WHEN slot_label ~ '^\d+$' THEN CAST(slot_label AS integer) END ASC,
                 slot_label ASC,
                 game_index ASC
        "#,
    )
    .bind(season)
    .fetch_all(pool)
    .await?;

    let mut rounds: Vec<Vec<Vec<PlayoffGame>>> = Vec::new();
    let mut current_round: Option<i32> = None;
    let mut current_slot: Option<String> = None;

    for game in rows {
        if current_round != Some(game.round) {
            rounds.push(Vec::new());
            current_round = Some(game.round);
            current_slot = None;
        }
        if let Some(slots) = rounds.last_mut() {
            if current_slot.as_deref() != Some(game.slot_label.as_str()) {
                slots.push(Vec::new());
                current_slot = Some(game.slot_label.clone());
            }
            if let Some(games) = slots.last_mut() {
                games.push(game);
            }
        }
    }

    Ok(rounds)
}
