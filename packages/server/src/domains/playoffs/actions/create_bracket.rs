use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;
use uuid::Uuid;

use crate::domains::playoffs::errors::PlayoffsError;
use crate::domains::playoffs::models::game::FINAL_LABEL;
use crate::domains::playoffs::seeding::{interleave, pair_pools, Pairing, Seed};
use crate::domains::standings::Standing;

/// Create the full playoff bracket for a season, all rounds at once.
///
/// Seeding pulls ranked standings per conference; the league runs on 1, 2, 4
/// or 8 conferences. Round 1 slots are fully resolved; every later round is
/// pre-materialized as placeholder slots that promotions fill in. The whole
/// creation is one transaction, so a failed precondition or insert leaves no
/// rows behind.
pub async fn create_bracket(
    conferences: &[String],
    season: &str,
    limit: i64,
    pool: &PgPool,
) -> Result<(), PlayoffsError> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM playoffs WHERE season = $1")
        .bind(season)
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Err(PlayoffsError::DuplicateSeason(season.to_string()));
    }

    let pairings = match conferences.len() {
        1 => single_conference_pairings(&mut tx, &conferences[0], season, limit).await?,
        2 | 4 | 8 => paired_conference_pairings(&mut tx, conferences, season, limit).await?,
        n => return Err(PlayoffsError::InvalidTopology(n)),
    };

    // A lone pairing is the final itself; no earlier rounds exist.
    if pairings.len() == 1 {
        insert_slot_games(&mut tx, season, 1, FINAL_LABEL, Some(&pairings[0])).await?;
        tx.commit().await?;
        info!(season, "playoff bracket created as a single final");
        return Ok(());
    }

    let mut slots_in_round = pairings.len();
    let mut round = 1i32;
    let mut label_base = 0usize;

    for (i, pairing) in pairings.iter().enumerate() {
        let label = (i + 1).to_string();
        insert_slot_games(&mut tx, season, round, &label, Some(pairing)).await?;
    }
    label_base += slots_in_round;
    slots_in_round /= 2;
    round += 1;

    // Halve the slot count each round until one slot remains. Labels keep
    // incrementing across rounds so they never collide.
    while slots_in_round > 1 {
        for i in 0..slots_in_round {
            let label = (label_base + i + 1).to_string();
            insert_slot_games(&mut tx, season, round, &label, None).await?;
        }
        label_base += slots_in_round;
        slots_in_round /= 2;
        round += 1;
    }

    insert_slot_games(&mut tx, season, round, FINAL_LABEL, None).await?;

    tx.commit().await?;
    info!(season, rounds = round, pairings = pairings.len(), "playoff bracket created");
    Ok(())
}

/// One conference seeds both sides of the bracket: the top half of the table
/// is the home pool, the next half the away pool.
async fn single_conference_pairings(
    tx: &mut Transaction<'_, Postgres>,
    conference: &str,
    season: &str,
    limit: i64,
) -> Result<Vec<Pairing>, PlayoffsError> {
    let teams = Standing::find_ranked(conference, season, limit, &mut **tx).await?;
    let partition_limit = (limit / 2) as usize;
    if partition_limit == 0 {
        return Err(PlayoffsError::InsufficientTeams {
            conference: conference.to_string(),
            found: teams.len(),
            required: 2,
        });
    }

    let seeds: Vec<Seed> = teams.into_iter().map(Seed::from).collect();
    let home: Vec<Seed> = seeds.iter().take(partition_limit).cloned().collect();
    let away: Vec<Seed> = seeds
        .iter()
        .skip(partition_limit)
        .take(partition_limit)
        .cloned()
        .collect();

    if home.len() < partition_limit {
        return Err(PlayoffsError::InsufficientTeams {
            conference: conference.to_string(),
            found: home.len(),
            required: partition_limit,
        });
    }
    if away.len() < partition_limit {
        return Err(PlayoffsError::InsufficientTeams {
            conference: conference.to_string(),
            found: home.len() + away.len(),
            required: partition_limit * 2,
        });
    }

    Ok(pair_pools(home, away))
}

/// Two, four or eight conferences pair off (c0 hosts c1, c2 hosts c3, ...);
/// each pair is seeded independently and the pairings are interleaved per
/// rank index in conference order.
async fn paired_conference_pairings(
    tx: &mut Transaction<'_, Postgres>,
    conferences: &[String],
    season: &str,
    limit: i64,
) -> Result<Vec<Pairing>, PlayoffsError> {
    let mut expected: Option<usize> = None;
    let mut groups = Vec::with_capacity(conferences.len() / 2);

    for pair in conferences.chunks(2) {
        let home = conference_pool(tx, &pair[0], season, limit, &mut expected).await?;
        let away = conference_pool(tx, &pair[1], season, limit, &mut expected).await?;
        groups.push(pair_pools(home, away));
    }

    Ok(interleave(groups))
}

async fn conference_pool(
    tx: &mut Transaction<'_, Postgres>,
    conference: &str,
    season: &str,
    limit: i64,
    expected: &mut Option<usize>,
) -> Result<Vec<Seed>, PlayoffsError> {
    let teams = Standing::find_ranked(conference, season, limit, &mut **tx).await?;

    if teams.len() < limit as usize {
        return Err(PlayoffsError::InsufficientTeams {
            conference: conference.to_string(),
            found: teams.len(),
            required: limit as usize,
        });
    }
    ensure_balanced(conference, teams.len(), expected)?;

    Ok(teams.into_iter().map(Seed::from).collect())
}

/// Every conference pool in a pairing topology must carry the same number of
/// teams; the first pool latches the expected size.
fn ensure_balanced(
    conference: &str,
    found: usize,
    expected: &mut Option<usize>,
) -> Result<(), PlayoffsError> {
    match *expected {
        Some(count) if found != count => Err(PlayoffsError::UnbalancedConferences {
            conference: conference.to_string(),
            found,
            expected: count,
        }),
        Some(_) => Ok(()),
        None => {
            *expected = Some(found);
            Ok(())
        }
    }
}

/// Insert the three best-of-three game rows for one slot. With a pairing the
/// slot is created resolved (round 1 and the direct-final case); without one
/// it is created as a placeholder slot awaiting promotion.
async fn insert_slot_games(
    tx: &mut Transaction<'_, Postgres>,
    season: &str,
    round: i32,
    slot_label: &str,
    pairing: Option<&Pairing>,
) -> Result<(), sqlx::Error> {
    for game_index in 1..=3 {
        sqlx::query(
            r#"
            INSERT INTO playoffs (
                playoffs_id, season, round, slot_label, game_index,
                home_team_id, home_team_name, home_team_url, home_placeholder_id,
                away_team_id, away_team_name, away_team_url, away_placeholder_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(season)
        .bind(round)
        .bind(slot_label)
        .bind(game_index.to_string())
        .bind(pairing.map(|p| p.home.team_id))
        .bind(pairing.map(|p| p.home.team_name.as_str()))
        .bind(pairing.map(|p| p.home.team_url.as_str()))
        .bind(Uuid::new_v4())
        .bind(pairing.map(|p| p.away.team_id))
        .bind(pairing.map(|p| p.away.team_name.as_str()))
        .bind(pairing.map(|p| p.away.team_url.as_str()))
        .bind(Uuid::new_v4())
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_guard_latches_the_first_pool_size() {
        let mut expected = None;
        ensure_balanced("East", 4, &mut expected).unwrap();
        assert_eq!(expected, Some(4));
        ensure_balanced("West", 4, &mut expected).unwrap();
    }

    #[test]
    fn balance_guard_rejects_a_pool_of_a_different_size() {
        let mut expected = Some(4);
        let err = ensure_balanced("West", 3, &mut expected).unwrap_err();
        assert!(matches!(
            err,
            PlayoffsError::UnbalancedConferences {
                found: 3,
                expected: 4,
                ..
            }
        ));
    }
}
