use thiserror::Error;

/// Failure taxonomy for the playoff bracket operations
///
/// Every variant aborts and rolls back the enclosing transaction. Zero rows
/// affected on an update or delete is always surfaced as one of these, never
/// swallowed as a no-op.
#[derive(Error, Debug)]
pub enum PlayoffsError {
    #[error("a playoff bracket already exists for season {0}")]
    DuplicateSeason(String),

    #[error("invalid number of conferences: {0} (valid counts are 1, 2, 4 or 8)")]
    InvalidTopology(usize),

    #[error("conference {conference} has {found} qualified teams, {required} required")]
    InsufficientTeams {
        conference: String,
        found: usize,
        required: usize,
    },

    #[error("conference {conference} has {found} qualified teams, the other conferences have {expected}")]
    UnbalancedConferences {
        conference: String,
        found: usize,
        expected: usize,
    },

    #[error("no game matches season {season}, round {round}, slot {slot_label} for that team")]
    NoSuchGame {
        season: String,
        round: i32,
        slot_label: String,
    },

    #[error("no slot in round {round} of season {season} can receive the promoted winner")]
    PromotionTargetMissing { season: String, round: i32 },

    #[error("no playoff records exist for season {0}")]
    NothingToDelete(String),

    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}
