use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use super::utils::{randrange_pow, random_cell, round_to};

fn running_round() -> (Round, Vec<DisplayEvent>) {
    let mut round = Round::new(GameConfig::default());
    let mut events = Vec::new();
    assert!(round.start(&mut events));
    events.clear();
    (round, events)
}

/// Puts the cat up and returns where it landed.
fn show(round: &mut Round, rng: &mut StdRng) -> Position {
    let mut events = Vec::new();
    round.show_target(rng, &mut events).expect("round should be hidden")
}

#[test]
fn test_score_tracks_hits_minus_misses() {
    let mut state = GameState::new();
    let ops = [true, false, false, true, true, false, false, false, true];
    for hit in ops {
        if hit {
            state.register_hit();
        } else {
            state.register_miss(true);
        }
        assert_eq!(state.score, i64::from(state.hit_count) - i64::from(state.miss_count));
    }
    assert_eq!(state.score, -1);
}

#[test]
fn test_accuracy_zero_without_denominator() {
    let mut state = GameState::new();
    state.register_hit();
    assert_eq!(state.shown_count + state.miss_count, 0);
    assert_eq!(state.accuracy, 0.0);
}

#[test]
fn test_uncounted_miss_only_refreshes() {
    let mut state = GameState::new();
    state.hit_count = 2;
    state.shown_count = 3;
    state.register_miss(false);
    assert_eq!(state.miss_count, 0);
    assert_eq!(state.score, 2);
    assert_eq!(state.accuracy, 0.67);
}

#[test]
fn test_reset_clears_everything() {
    let mut state = GameState::new();
    state.shown_count = 4;
    state.register_hit();
    state.register_miss(true);
    state.round.is_target_active = true;
    state.round.target_position = Position::new(1, 2);

    state.reset();

    assert_eq!((state.hit_count, state.miss_count, state.shown_count), (0, 0, 0));
    assert_eq!(state.score, 0);
    assert_eq!(state.accuracy, 0.0);
    assert!(!state.round.is_target_active);
    assert_eq!(state.round.target_position, Position::new(0, 0));
}

#[test]
fn test_hit_then_miss_scores_zero() {
    let mut state = GameState::new();
    state.reset();
    state.register_hit();
    state.register_miss(true);
    assert_eq!(state.score, 0);
    assert_eq!(state.hit_count, 1);
    assert_eq!(state.miss_count, 1);
}

#[test]
fn test_accuracy_half() {
    let mut state = GameState::new();
    state.shown_count = 1;
    state.miss_count = 1;
    state.hit_count = 1;
    state.recompute();
    assert_eq!(state.accuracy, 0.5);
}

#[test]
fn test_round_to_two_places() {
    assert_eq!(round_to(1.0 / 3.0, 2), 0.33);
    assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
    assert_eq!(round_to(1.0, 2), 1.0);
}

#[test]
fn test_accuracy_rounds_exact_binary_value() {
    // 3/200 is stored just below 0.015.
    let mut state = GameState::new();
    state.hit_count = 3;
    state.shown_count = 200;
    state.recompute();
    assert_eq!(state.accuracy, 0.01);
}

#[test]
fn test_durations_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = GameConfig::default();
    for _ in 0..500 {
        let hidden = randrange_pow(&mut rng, &config.hidden).as_secs_f64();
        assert!((0.5..=10.0).contains(&hidden), "hidden wait {hidden}");
        let shown = randrange_pow(&mut rng, &config.shown).as_secs_f64();
        assert!((0.6..=1.0).contains(&shown), "shown duration {shown}");
    }
}

#[test]
fn test_hidden_wait_skews_short() {
    let mut rng = StdRng::seed_from_u64(11);
    let hidden = GameConfig::default().hidden;
    let samples = 2000;
    let short = (0..samples)
        .filter(|_| randrange_pow(&mut rng, &hidden).as_secs_f64() < 5.25)
        .count();
    // P(u^3 < 0.5) = 0.79
    assert!(short > samples * 7 / 10, "only {short} short waits");
}

#[test]
fn test_random_cell_within_grid() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..300 {
        let pos = random_cell(&mut rng, 2, 3);
        assert!(pos.row < 2 && pos.col < 3);
        seen.insert(pos);
    }
    assert_eq!(seen.len(), 6);
}

#[test]
fn test_start_resets_and_enters_hidden() {
    let mut round = Round::new(GameConfig::default());
    let mut events = Vec::new();
    round.select_cell(0, 0, &mut events);
    assert_eq!(round.state().miss_count, 1);

    events.clear();
    assert!(round.start(&mut events));
    assert_eq!(round.phase(), Phase::Hidden);
    assert_eq!(round.state(), &GameState::new());
    assert_eq!(
        events,
        vec![
            DisplayEvent::GameStatus { running: true },
            DisplayEvent::GridCleared,
            DisplayEvent::StatsUpdated { score: 0, accuracy: 0.0 },
        ]
    );
}

#[test]
fn test_start_ignored_while_running() {
    let (mut round, mut events) = running_round();
    let mut rng = StdRng::seed_from_u64(1);
    show(&mut round, &mut rng);
    assert!(!round.start(&mut events));
    assert!(events.is_empty());
    assert_eq!(round.phase(), Phase::Shown);
    assert_eq!(round.state().shown_count, 1);
}

#[test]
fn test_show_target_activates_random_cell() {
    let (mut round, mut events) = running_round();
    let mut rng = StdRng::seed_from_u64(5);
    let pos = round.show_target(&mut rng, &mut events).unwrap();

    assert_eq!(round.phase(), Phase::Shown);
    assert_eq!(round.state().shown_count, 1);
    assert!(round.state().round.is_target_active);
    assert_eq!(round.state().round.target_position, pos);
    assert_eq!(events, vec![DisplayEvent::TargetShown { row: pos.row, col: pos.col }]);
}

#[test]
fn test_transitions_rejected_out_of_phase() {
    let mut round = Round::new(GameConfig::default());
    let mut rng = StdRng::seed_from_u64(5);
    let mut events = Vec::new();
    assert!(round.show_target(&mut rng, &mut events).is_none());
    assert!(!round.hide_target(&mut events));

    round.start(&mut events);
    assert!(!round.hide_target(&mut events));
    round.show_target(&mut rng, &mut events).unwrap();
    assert!(round.show_target(&mut rng, &mut events).is_none());
    assert_eq!(round.state().shown_count, 1);
}

#[test]
fn test_hit_clears_target_and_second_click_misses() {
    let (mut round, mut events) = running_round();
    let mut rng = StdRng::seed_from_u64(9);
    let pos = show(&mut round, &mut rng);

    assert_eq!(round.select_cell(pos.row, pos.col, &mut events), SelectOutcome::Hit);
    assert!(!round.state().round.is_target_active);
    assert_eq!(events[0], DisplayEvent::GridCleared);

    assert_eq!(round.select_cell(pos.row, pos.col, &mut events), SelectOutcome::Miss);
    assert_eq!(round.state().hit_count, 1);
    assert_eq!(round.state().miss_count, 1);
}

#[test]
fn test_wrong_cell_keeps_target_active() {
    let (mut round, mut events) = running_round();
    let mut rng = StdRng::seed_from_u64(2);
    let pos = show(&mut round, &mut rng);
    let wrong = Position::new((pos.row + 1) % 2, (pos.col + 1) % 3);

    assert_eq!(round.select_cell(wrong.row, wrong.col, &mut events), SelectOutcome::Miss);
    assert!(round.state().round.is_target_active);
    assert_eq!(round.state().miss_count, 1);
    assert!(!events.contains(&DisplayEvent::GridCleared));

    assert_eq!(round.select_cell(pos.row, pos.col, &mut events), SelectOutcome::Hit);
}

#[test]
fn test_click_while_hidden_is_miss() {
    let (mut round, mut events) = running_round();
    assert_eq!(round.select_cell(1, 2, &mut events), SelectOutcome::Miss);
    assert_eq!(round.state().miss_count, 1);
    assert_eq!(round.state().score, -1);
    assert_eq!(events, vec![DisplayEvent::StatsUpdated { score: -1, accuracy: 0.0 }]);
}

#[test]
fn test_out_of_bounds_selection_ignored() {
    let (mut round, mut events) = running_round();
    assert_eq!(round.select_cell(2, 0, &mut events), SelectOutcome::Ignored);
    assert_eq!(round.select_cell(0, 3, &mut events), SelectOutcome::Ignored);
    assert_eq!(round.state(), &GameState::new());
    assert!(events.is_empty());
}

#[test]
fn test_expired_target_is_not_penalized() {
    let (mut round, mut events) = running_round();
    let mut rng = StdRng::seed_from_u64(4);
    show(&mut round, &mut rng);

    assert!(round.hide_target(&mut events));
    assert_eq!(round.phase(), Phase::Hidden);
    assert_eq!(round.state().miss_count, 0);
    assert_eq!(round.state().shown_count, 1);
    assert!(!round.state().round.is_target_active);
    assert_eq!(
        events,
        vec![
            DisplayEvent::GridCleared,
            DisplayEvent::StatsUpdated { score: 0, accuracy: 0.0 },
        ]
    );
}

#[test]
fn test_full_rounds_accuracy() {
    let (mut round, mut events) = running_round();
    let mut rng = StdRng::seed_from_u64(8);

    // Round 1: whacked.
    let pos = show(&mut round, &mut rng);
    round.select_cell(pos.row, pos.col, &mut events);
    round.hide_target(&mut events);

    // Round 2: missed once, then expired.
    let pos = show(&mut round, &mut rng);
    let wrong = Position::new((pos.row + 1) % 2, pos.col);
    round.select_cell(wrong.row, wrong.col, &mut events);
    round.hide_target(&mut events);

    let state = round.state();
    assert_eq!((state.hit_count, state.miss_count, state.shown_count), (1, 1, 2));
    assert_eq!(state.score, 0);
    assert_eq!(state.accuracy, 0.33);
}

#[test]
fn test_stop_returns_to_idle() {
    let (mut round, mut events) = running_round();
    let mut rng = StdRng::seed_from_u64(6);
    show(&mut round, &mut rng);

    round.stop(&mut events);
    assert_eq!(round.phase(), Phase::Idle);
    assert!(!round.state().round.is_target_active);
    assert_eq!(
        events,
        vec![DisplayEvent::GridCleared, DisplayEvent::GameStatus { running: false }]
    );

    assert!(round.start(&mut events));
    assert_eq!(round.state().shown_count, 0);
}

#[test]
fn test_display_event_json_shape() {
    let json = serde_json::to_string(&DisplayEvent::TargetShown { row: 1, col: 2 }).unwrap();
    assert_eq!(json, r#"{"action":"TargetShown","data":{"row":1,"col":2}}"#);
    let json = serde_json::to_string(&DisplayEvent::GridCleared).unwrap();
    assert_eq!(json, r#"{"action":"GridCleared"}"#);
}
