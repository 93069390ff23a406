use crate::domain::test_state_helpers::{play_round, state_with_players};

#[test]
fn averages_and_extremes_track_the_history() {
    let mut state = state_with_players(&["Alice", "Bob"]);
    play_round(&mut state, &[10, 30]);
    play_round(&mut state, &[20, 0]);
    play_round(&mut state, &[0, 15]);

    let alice = &state.players[0].stats;
    assert_eq!(alice.avg_score, 10.0);
    assert_eq!(alice.best_round, Some(0));
    assert_eq!(alice.worst_round, Some(20));
    assert_eq!(alice.max_round_score, Some(20));
    assert_eq!(alice.rounds_played, 3);
    assert_eq!(alice.last_round_score, Some(0));
}

#[test]
fn fresh_players_have_no_data_yet() {
    let state = state_with_players(&["Alice", "Bob"]);
    let stats = &state.players[0].stats;
    assert_eq!(stats.avg_score, 0.0, "empty history averages to 0, not NaN");
    assert_eq!(stats.best_round, None);
    assert_eq!(stats.worst_round, None);
    assert_eq!(stats.max_round_score, None);
    assert_eq!(stats.last_round_score, None);
}

#[test]
fn low_streaks_and_rounds_won_count_ties_for_everyone() {
    let mut state = state_with_players(&["Alice", "Bob", "Cara"]);
    play_round(&mut state, &[0, 0, 0]);

    for player in &state.players {
        assert_eq!(player.stats.current_low_streak, 1);
        assert_eq!(player.stats.rounds_won, 1);
        assert_eq!(player.stats.perfect_rounds, 1);
        // An all-tied round is everyone's maximum too.
        assert!(player.stats.had_highest_score);
    }
}

#[test]
fn streaks_reset_when_the_condition_breaks() {
    let mut state = state_with_players(&["Alice", "Bob"]);
    play_round(&mut state, &[1, 9]);
    play_round(&mut state, &[1, 9]);
    play_round(&mut state, &[9, 1]);

    let alice = &state.players[0].stats;
    assert_eq!(alice.current_low_streak, 0);
    assert_eq!(alice.low_streak, 2, "the longest streak is kept");
    assert_eq!(alice.current_high_streak, 1);
    assert_eq!(alice.rounds_won, 2);

    let bob = &state.players[1].stats;
    assert_eq!(bob.current_low_streak, 1);
    assert_eq!(bob.high_streak, 2);
}

#[test]
fn improvement_run_counts_rounds_and_resets_on_non_decrease() {
    let mut state = state_with_players(&["Alice", "Bob"]);
    play_round(&mut state, &[15, 1]);
    assert_eq!(state.players[0].stats.current_improvement_streak, 0);

    play_round(&mut state, &[10, 1]);
    assert_eq!(state.players[0].stats.current_improvement_streak, 2);

    play_round(&mut state, &[4, 1]);
    assert_eq!(state.players[0].stats.current_improvement_streak, 3);

    play_round(&mut state, &[4, 1]);
    let alice = &state.players[0].stats;
    assert_eq!(alice.current_improvement_streak, 0, "equal score breaks the run");
    assert_eq!(alice.improvement_streak, 3);
}

#[test]
fn last_place_flag_needs_a_unique_leader() {
    let mut state = state_with_players(&["Alice", "Bob", "Cara"]);
    play_round(&mut state, &[5, 5, 1]);
    assert!(
        !state.players[0].stats.was_in_last_place,
        "a shared maximum total sets nobody's flag"
    );
    assert!(!state.players[1].stats.was_in_last_place);

    play_round(&mut state, &[9, 1, 1]);
    assert!(state.players[0].stats.was_in_last_place);

    // Sticky: dropping out of last place does not clear it.
    play_round(&mut state, &[0, 50, 50]);
    assert!(state.players[0].stats.was_in_last_place);
    assert!(state.players[1].stats.was_in_last_place, "new unique leader");
}

#[test]
fn highest_score_flag_is_sticky() {
    let mut state = state_with_players(&["Alice", "Bob"]);
    play_round(&mut state, &[9, 1]);
    play_round(&mut state, &[1, 9]);

    assert!(state.players[0].stats.had_highest_score);
    assert!(state.players[1].stats.had_highest_score);
}
