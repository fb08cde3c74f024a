//! Roster reconciliation against a fresh scores response.

use std::collections::HashMap;

use cardtable_protocol::PlayerScore;

use crate::types::Player;

/// Merges the authoritative scores list into the locally held roster.
///
/// One output entry per score entry, in score order:
/// - an id already present in `prior` keeps its record as-is, preserving
///   the fetched hand;
/// - an unknown id is synthesized from the score's id/name with an empty
///   hand;
/// - prior players absent from `scores` are dropped.
///
/// This is the only path by which a removed player leaves the local view.
pub fn reconcile_roster(prior: Vec<Player>, scores: &[PlayerScore]) -> Vec<Player> {
    let mut by_id: HashMap<String, Player> =
        prior.into_iter().map(|p| (p.id.clone(), p)).collect();

    scores
        .iter()
        .map(|score| {
            by_id
                .remove(&score.player_id)
                .unwrap_or_else(|| Player::new(&score.player_id, &score.player_name))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use cardtable_protocol::{Card, Rank, Suit};

    use super::*;

    fn score(id: &str, name: &str, value: i32) -> PlayerScore {
        PlayerScore {
            player_id: id.into(),
            player_name: name.into(),
            total_value: value,
        }
    }

    #[test]
    fn synthesizes_unknown_players_with_empty_hands() {
        let roster = reconcile_roster(vec![], &[score("p1", "Alice", 20), score("p2", "Bob", 23)]);

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0], Player::new("p1", "Alice"));
        assert_eq!(roster[1], Player::new("p2", "Bob"));
    }

    #[test]
    fn preserves_fetched_hand_for_persisting_ids() {
        let mut alice = Player::new("p1", "Alice");
        alice.hand = vec![Card::new(Suit::Hearts, Rank::Ace)];

        let roster = reconcile_roster(
            vec![alice.clone(), Player::new("p2", "Bob")],
            &[score("p1", "Alice", 11), score("p2", "Bob", 0)],
        );

        assert_eq!(roster[0], alice, "hand must survive the refetch");
        assert!(roster[1].hand.is_empty());
    }

    #[test]
    fn drops_players_absent_from_scores() {
        let roster = reconcile_roster(
            vec![Player::new("p1", "Alice"), Player::new("p2", "Bob")],
            &[score("p2", "Bob", 23)],
        );

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "p2");
    }

    #[test]
    fn output_follows_score_order() {
        let roster = reconcile_roster(
            vec![Player::new("p1", "Alice"), Player::new("p2", "Bob")],
            &[score("p2", "Bob", 23), score("p1", "Alice", 20)],
        );

        let ids: Vec<&str> = roster.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p1"]);
    }

    #[test]
    fn empty_scores_empties_roster() {
        let roster = reconcile_roster(vec![Player::new("p1", "Alice")], &[]);
        assert!(roster.is_empty());
    }
}
