fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use cardtable_protocol::{
        AddPlayerRequest, Card, DealRequest, DeckInfo, GameCreated, GameSummary, PlayerCreated,
        PlayerScore,
    };

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and
    /// compares the JSON values (key-order independent).
    ///
    /// The fixtures are bodies captured as the service emits them: camelCase
    /// keys, uppercase enum strings, UUID ids as plain strings.
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  service: {fixture}\n  client:  {reserialized}"
        );
    }

    #[test]
    fn fixture_game_summary_list() {
        roundtrip_test::<Vec<GameSummary>>("game_summary_list.json");
    }

    #[test]
    fn fixture_game_created() {
        roundtrip_test::<GameCreated>("game_created.json");
    }

    #[test]
    fn fixture_deck_info() {
        roundtrip_test::<DeckInfo>("deck_info.json");
    }

    #[test]
    fn fixture_player_scores() {
        roundtrip_test::<Vec<PlayerScore>>("player_scores.json");
    }

    #[test]
    fn fixture_player_created() {
        roundtrip_test::<PlayerCreated>("player_created.json");
    }

    #[test]
    fn fixture_player_hand() {
        roundtrip_test::<Vec<Card>>("player_hand.json");
    }

    #[test]
    fn fixture_add_player_request() {
        roundtrip_test::<AddPlayerRequest>("add_player_request.json");
    }

    #[test]
    fn fixture_deal_request() {
        roundtrip_test::<DealRequest>("deal_request.json");
    }

    #[test]
    fn deck_info_fixture_is_consistent() {
        let deck: DeckInfo = serde_json::from_value(load_fixture("deck_info.json")).unwrap();
        let suit_total: u32 = deck.suit_counts.values().sum();
        assert_eq!(deck.total_cards, suit_total);
        assert_eq!(deck.total_cards as usize, deck.sorted_cards.len());
    }
}
