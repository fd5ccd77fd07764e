use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Slot label reserved for the last round of every bracket.
pub const FINAL_LABEL: &str = "FINAL";

/// PlayoffGame model - SQL persistence layer
///
/// One leg of a best-of-three series. The three rows sharing
/// `(season, round, slot_label)` form one slot. Home/away team columns stay
/// NULL until the side is resolved; the placeholder ids anchor an unresolved
/// side until a promotion binds a real team.
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffGame {
    pub playoffs_id: Uuid,
    pub season: String,
    pub round: i32,
    pub slot_label: String,
    pub game_index: String,

    pub home_team_id: Option<Uuid>,
    pub home_team_name: Option<String>,
    pub home_team_url: Option<String>,
    pub home_placeholder_id: Uuid,

    pub away_team_id: Option<Uuid>,
    pub away_team_name: Option<String>,
    pub away_team_url: Option<String>,
    pub away_placeholder_id: Uuid,

    pub winner: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// One side of a slot as a first-class state
///
/// Either bound to a real team or still waiting on a promotion from the
/// previous round. There is no sentinel team id: an unresolved side carries
/// only its placeholder occupant reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SlotSide {
    Resolved {
        team_id: Uuid,
        team_name: String,
        team_url: String,
    },
    Unresolved {
        placeholder_id: Uuid,
    },
}

impl PlayoffGame {
    /// The home side of this game as a tagged state.
    pub fn home_side(&self) -> SlotSide {
        match self.home_team_id {
            Some(team_id) => SlotSide::Resolved {
                team_id,
                team_name: self.home_team_name.clone().unwrap_or_default(),
                team_url: self.home_team_url.clone().unwrap_or_default(),
            },
            None => SlotSide::Unresolved {
                placeholder_id: self.home_placeholder_id,
            },
        }
    }

    /// The away side of this game as a tagged state.
    pub fn away_side(&self) -> SlotSide {
        match self.away_team_id {
            Some(team_id) => SlotSide::Resolved {
                team_id,
                team_name: self.away_team_name.clone().unwrap_or_default(),
                team_url: self.away_team_url.clone().unwrap_or_default(),
            },
            None => SlotSide::Unresolved {
                placeholder_id: self.away_placeholder_id,
            },
        }
    }

    /// Is this the final slot of the bracket?
    pub fn is_final(&self) -> bool {
        self.slot_label == FINAL_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(home_team_id: Option<Uuid>) -> PlayoffGame {
        PlayoffGame {
            playoffs_id: Uuid::new_v4(),
            season: "2024-2025".to_string(),
            round: 2,
            slot_label: FINAL_LABEL.to_string(),
            game_index: "1".to_string(),
            home_team_id,
            home_team_name: home_team_id.map(|_| "Team One".to_string()),
            home_team_url: home_team_id.map(|_| "https://cdn/logo1.png".to_string()),
            home_placeholder_id: Uuid::new_v4(),
            away_team_id: None,
            away_team_name: None,
            away_team_url: None,
            away_placeholder_id: Uuid::new_v4(),
            winner: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn side_is_unresolved_until_a_team_is_bound() {
        let g = game(None);
        assert_eq!(
            g.home_side(),
            SlotSide::Unresolved {
                placeholder_id: g.home_placeholder_id
            }
        );
    }

    #[test]
    fn side_is_resolved_once_a_team_is_bound() {
        let team = Uuid::new_v4();
        let g = game(Some(team));
        match g.home_side() {
            SlotSide::Resolved { team_id, team_name, .. } => {
                assert_eq!(team_id, team);
                assert_eq!(team_name, "Team One");
            }
            other => panic!("expected resolved side, got {:?}", other),
        }
    }
}
