use crate::domain::achievements::Achievement;
use crate::domain::test_state_helpers::{play_round, player_id, state_with_players};
use crate::domain::views::{
    achievement_list, predicted_final_ranking, round_history, sorted_round_scores, standings,
};

#[test]
fn standings_sort_ascending_with_stable_ties() {
    let mut state = state_with_players(&["Alice", "Bob", "Cara"]);
    play_round(&mut state, &[9, 4, 4]);

    let rows = standings(&state);
    assert_eq!(rows[0].name, "Bob", "tied totals keep insertion order");
    assert_eq!(rows[1].name, "Cara");
    assert_eq!(rows[2].name, "Alice");
}

#[test]
fn round_history_is_newest_first() {
    let mut state = state_with_players(&["Alice", "Bob"]);
    play_round(&mut state, &[1, 2]);
    play_round(&mut state, &[3, 4]);

    let history = round_history(&state);
    assert_eq!(history[0].round_no, 2);
    assert_eq!(history[1].round_no, 1);
}

#[test]
fn round_scores_sort_by_round_score() {
    let mut state = state_with_players(&["Alice", "Bob", "Cara"]);
    play_round(&mut state, &[20, 5, 11]);

    let lines = sorted_round_scores(&state.rounds[0]);
    let names: Vec<&str> = lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Bob", "Cara", "Alice"]);
}

#[test]
fn achievement_list_joins_the_catalog() {
    let mut state = state_with_players(&["Alice", "Bob"]);
    play_round(&mut state, &[0, 5]);

    let list = achievement_list(&state.players[0]);
    let perfect = list
        .iter()
        .find(|v| v.achievement == Achievement::PerfectRound)
        .expect("perfect round unlocked");
    assert_eq!(perfect.title, "Perfect Round");
    assert_eq!(perfect.icon, "🎯");
    assert!(!perfect.description.is_empty());
}

#[test]
fn prediction_needs_three_rounds() {
    let mut state = state_with_players(&["Alice", "Bob"]);
    play_round(&mut state, &[10, 5]);
    play_round(&mut state, &[10, 5]);
    assert!(predicted_final_ranking(&state).is_none());

    play_round(&mut state, &[10, 5]);
    assert!(predicted_final_ranking(&state).is_some());
}

#[test]
fn prediction_extrapolates_recent_form() {
    let mut state = state_with_players(&["Alice", "Bob"]);
    // Alice's last three rounds average 20; Bob's average 5.
    play_round(&mut state, &[100, 100]);
    play_round(&mut state, &[10, 5]);
    play_round(&mut state, &[20, 5]);
    play_round(&mut state, &[30, 5]);

    let rows = predicted_final_ranking(&state).expect("four rounds recorded");
    // Seven rounds remain.
    let bob = rows.iter().find(|r| r.name == "Bob").expect("bob present");
    assert_eq!(bob.current_total, 115);
    assert_eq!(bob.predicted_total, 115 + 5 * 7);

    let alice = rows.iter().find(|r| r.name == "Alice").expect("alice present");
    assert_eq!(alice.predicted_total, 160 + 20 * 7);

    assert_eq!(rows[0].name, "Bob", "ascending by predicted total");

    let ids: Vec<_> = rows.iter().map(|r| r.player_id).collect();
    assert!(ids.contains(&player_id(&state, 0)));
}
