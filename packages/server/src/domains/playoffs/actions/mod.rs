//! Playoff actions - business logic functions, one per operation
//!
//! Each mutating action runs as a single transaction: either the whole
//! operation commits or every change is rolled back.

mod clear_result;
mod create_bracket;
mod delete_bracket;
mod list_bracket;
mod report_result;

pub use clear_result::clear_result;
pub use create_bracket::create_bracket;
pub use delete_bracket::delete_bracket;
pub use list_bracket::list_bracket;
pub use report_result::report_result;

/// Distinct slot labels of one round, in bracket order: numeric labels
/// ascending by integer value, the non-numeric FINAL label last (the CASE
/// yields NULL for it, and Postgres sorts NULLS LAST under ASC).
pub(crate) async fn slot_labels<'e, E>(
    season: &str,
    round: i32,
    executor: E,
) -> Result<Vec<String>, sqlx::Error>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_scalar(
        r#"
        SELECT slot_label FROM playoffs
        WHERE season = $1 AND round = $2
        GROUP BY slot_label
        ORDER BY CASE WHEN slot_label ~ '^\d+$' THEN CAST(slot_label AS integer) END ASC,
                 slot_label ASC
        "#,
    )
    .bind(season)
    .bind(round)
    .fetch_all(executor)
    .await
}
