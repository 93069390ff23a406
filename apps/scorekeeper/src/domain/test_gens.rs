// Proptest generators for domain inputs.
// Score tables are player-count × round-count matrices of plausible values.

use proptest::prelude::*;

/// Raw score inputs as typed by an operator: plain numbers, padded
/// numbers, digit-prefixed junk, blanks, and garbage.
pub fn raw_score_input() -> impl Strategy<Value = String> {
    prop_oneof![
        (-300i32..300).prop_map(|n| n.to_string()),
        (-300i32..300).prop_map(|n| format!("  {n} ")),
        (0i32..300).prop_map(|n| format!("{n}abc")),
        Just(String::new()),
        "[a-z]{0,8}",
    ]
}

pub fn player_count() -> impl Strategy<Value = usize> {
    2usize..=5
}

/// One round's numeric scores for `players` players.
pub fn round_scores(players: usize) -> impl Strategy<Value = Vec<i32>> {
    proptest::collection::vec(-25i32..=120, players)
}

/// Up to a full game of rounds for `players` players.
pub fn score_table(players: usize) -> impl Strategy<Value = Vec<Vec<i32>>> {
    proptest::collection::vec(round_scores(players), 1..=11)
}
