//! Pure seeding and pairing math for bracket generation and promotion.
//!
//! No queries here: bracket creation feeds ranked pools in, promotion feeds
//! sorted slot labels in. Keeping this pure lets the pairing rules and the
//! downstream-slot function be tested without a database.

use uuid::Uuid;

use crate::domains::standings::Standing;

/// The identity a bracket carries for one seeded team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub team_id: Uuid,
    pub team_name: String,
    pub team_url: String,
}

impl From<Standing> for Seed {
    fn from(s: Standing) -> Self {
        Self {
            team_id: s.team_id,
            team_name: s.team_name,
            team_url: s.team_pic_url,
        }
    }
}

/// One round-1 match-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub home: Seed,
    pub away: Seed,
}

/// Which side of a slot a promotion writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Pair two ranked pools: the away pool is reversed so rank 1 meets rank N,
/// rank 2 meets rank N-1, and so on.
pub fn pair_pools(home: Vec<Seed>, mut away: Vec<Seed>) -> Vec<Pairing> {
    away.reverse();
    home.into_iter()
        .zip(away)
        .map(|(home, away)| Pairing { home, away })
        .collect()
}

/// Interleave independently paired conference groups per rank index: for
/// rank i, emit group 0's i-th pairing, then group 1's, and so on. This is
/// the fixed emission order for the 4- and 8-conference topologies.
pub fn interleave(groups: Vec<Vec<Pairing>>) -> Vec<Pairing> {
    let per_group = groups.first().map(Vec::len).unwrap_or(0);
    let mut pairings = Vec::with_capacity(per_group * groups.len());
    for rank in 0..per_group {
        for group in &groups {
            if let Some(pairing) = group.get(rank) {
                pairings.push(pairing.clone());
            }
        }
    }
    pairings
}

/// The downstream slot a decided series feeds, given the slot's position in
/// its round's sorted label order and the next round's sorted labels.
///
/// Consecutive slot pairs collapse into one next-round slot: pair `i/2`,
/// first of the pair on the home side, second on the away side.
pub fn downstream_of(position: usize, next_round_labels: &[String]) -> Option<(String, Side)> {
    let label = next_round_labels.get(position / 2)?.clone();
    let side = if position % 2 == 0 { Side::Home } else { Side::Away };
    Some((label, side))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(name: &str) -> Seed {
        Seed {
            team_id: Uuid::new_v4(),
            team_name: name.to_string(),
            team_url: format!("https://cdn/{name}.png"),
        }
    }

    fn pool(names: &[&str]) -> Vec<Seed> {
        names.iter().map(|n| seed(n)).collect()
    }

    #[test]
    fn pairing_matches_best_against_worst() {
        // Home pool [T1, T2] against away pool [T3, T4]: classic 1-vs-N
        // seeding pairs T1 with T4 and T2 with T3.
        let pairings = pair_pools(pool(&["T1", "T2"]), pool(&["T3", "T4"]));

        assert_eq!(pairings.len(), 2);
        assert_eq!(pairings[0].home.team_name, "T1");
        assert_eq!(pairings[0].away.team_name, "T4");
        assert_eq!(pairings[1].home.team_name, "T2");
        assert_eq!(pairings[1].away.team_name, "T3");
    }

    #[test]
    fn interleave_emits_groups_per_rank_index() {
        let group_a = pair_pools(pool(&["A1", "A2"]), pool(&["B1", "B2"]));
        let group_b = pair_pools(pool(&["C1", "C2"]), pool(&["D1", "D2"]));

        let pairings = interleave(vec![group_a, group_b]);

        let homes: Vec<&str> = pairings.iter().map(|p| p.home.team_name.as_str()).collect();
        assert_eq!(homes, vec!["A1", "C1", "A2", "C2"]);
    }

    #[test]
    fn downstream_pairs_consecutive_slots() {
        let next = vec!["5".to_string(), "6".to_string()];

        assert_eq!(downstream_of(0, &next), Some(("5".to_string(), Side::Home)));
        assert_eq!(downstream_of(1, &next), Some(("5".to_string(), Side::Away)));
        assert_eq!(downstream_of(2, &next), Some(("6".to_string(), Side::Home)));
        assert_eq!(downstream_of(3, &next), Some(("6".to_string(), Side::Away)));
    }

    #[test]
    fn downstream_is_missing_when_next_round_is_short() {
        assert_eq!(downstream_of(2, &["5".to_string()]), None);
        assert_eq!(downstream_of(0, &[]), None);
    }
}
