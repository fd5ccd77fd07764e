use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Standing model - SQL persistence layer
///
/// One row per team per season. `position` is not stored; it is computed
/// server-side by ranking teams within a conference on points descending
/// (ties broken by storage order).
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Standing {
    pub standings_id: Uuid,
    pub team_id: Uuid,
    pub team_name: String,
    pub acronym: String,
    pub team_pic_url: String,
    pub gp: i32,
    pub w: i32,
    pub l: i32,
    pub win_percentage: f64,
    pub gf: i32,
    pub pts: i32,
    pub conference: String,
    pub season: String,
    pub created_at: DateTime<Utc>,

    /// Rank within the conference, 1 = best
    pub position: i64,
}

impl Standing {
    /// Fetch up to `limit` ranked teams for one conference of a season.
    ///
    /// Generic over the executor so bracket creation can run it inside its
    /// own transaction.
    pub async fn find_ranked<'e, E>(
        conference: &str,
        season: &str,
        limit: i64,
        executor: E,
    ) -> Result<Vec<Self>, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT *,
                   RANK() OVER (PARTITION BY conference ORDER BY pts DESC) AS position
            FROM standings
            WHERE conference = $1 AND season = $2
            ORDER BY pts DESC
            LIMIT $3
            "#,
        )
        .bind(conference)
        .bind(season)
        .bind(limit)
        .fetch_all(executor)
        .await
    }
}
