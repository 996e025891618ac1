//! Turn reducer scenarios played through the public API.

use im::Vector;

use word_grid::board::ValidationState;
use word_grid::cards::{CardRegistry, Category, WordCard};
use word_grid::core::{GameConfig, GameError, PlayerId, PlayerMap};
use word_grid::game::{ActionOutcome, CardSource, GameAction, GameState};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

fn card(text: &str, category: Category) -> WordCard {
    WordCard::new(text.to_lowercase(), text, [category])
}

fn to_cards(words: &[(&str, Category)]) -> Vector<WordCard> {
    words.iter().map(|&(t, c)| card(t, c)).collect()
}

fn deal(p0: &[(&str, Category)], p1: &[(&str, Category)], deck: &[(&str, Category)]) -> GameState {
    let mut hands: PlayerMap<Vector<WordCard>> = PlayerMap::with_default(2);
    hands[P0] = to_cards(p0);
    hands[P1] = to_cards(p1);
    GameState::from_deal(GameConfig::default(), hands, to_cards(deck))
}

/// Place the hand card whose text is `text`.
fn play(state: &mut GameState, text: &str, row: usize, col: usize) -> ActionOutcome {
    let index = state
        .hand(state.current_player())
        .iter()
        .position(|c| c.text == text)
        .unwrap_or_else(|| panic!("{text} not in hand"));
    state
        .apply(GameAction::Place {
            source: CardSource::Hand { index },
            row,
            col,
        })
        .unwrap()
}

// ============================================================================
// Full Games
// ============================================================================

/// Test a short game where the second player wins.
#[test]
fn test_two_turn_game() {
    use Category::*;

    let mut state = deal(
        &[("Dogs", Noun), ("Bark", Verb), ("Loudly", Adverb)],
        &[("And", Conjunction), ("Cats", Noun), ("Meow", Verb)],
        &[("Quiet", Adjective)],
    );

    // Player 1 builds a sentence and keeps a card
    play(&mut state, "Dogs", 0, 0);
    play(&mut state, "Bark", 0, 1);
    assert_eq!(state.apply(GameAction::EndTurn), Ok(ActionOutcome::TurnEnded { next: P1 }));

    // Player 2 extends it with a second clause and empties their hand
    play(&mut state, "And", 0, 2);
    assert_eq!(state.cell_state(0, 0), Some(ValidationState::Invalid));
    play(&mut state, "Cats", 0, 3);
    play(&mut state, "Meow", 0, 4);
    assert_eq!(state.cell_state(0, 0), Some(ValidationState::Valid));
    assert!(state.issues().is_empty());

    assert_eq!(state.apply(GameAction::EndTurn), Ok(ActionOutcome::Won { winner: P1 }));
    assert_eq!(state.winner(), Some(P1));
    assert_eq!(
        state.board().to_string().lines().next(),
        Some("Dogs(N) Bark(V) And(C) Cats(N) Meow(V) _ _ _")
    );
}

/// Test fixing a blocked turn by taking the offending card back.
#[test]
fn test_blocked_then_fixed() {
    use Category::*;

    let mut state = deal(
        &[("I", Pronoun), ("Sing", Verb), ("The", Article)],
        &[("Cake", Noun)],
        &[],
    );

    play(&mut state, "I", 1, 0);
    play(&mut state, "Sing", 1, 1);
    play(&mut state, "The", 1, 2);

    let outcome = state.apply(GameAction::EndTurn).unwrap();
    assert!(matches!(outcome, ActionOutcome::TurnBlocked { ref issues } if issues.len() == 1));
    assert_eq!(state.current_player(), P0);

    state.apply(GameAction::Remove { row: 1, col: 2 }).unwrap();
    assert_eq!(state.actions_this_turn(), 2);
    assert_eq!(state.apply(GameAction::EndTurn), Ok(ActionOutcome::TurnEnded { next: P1 }));
    assert_eq!(state.hand_text(P0), "The");
}

/// Test that drawing counts as an action but leaves the board alone.
#[test]
fn test_draw_then_end_turn() {
    use Category::*;

    let mut state = deal(&[("Run", Verb)], &[("Walk", Verb)], &[("Up", Preposition)]);

    assert_eq!(state.apply(GameAction::EndTurn), Err(GameError::NoActionTaken));
    assert_eq!(state.apply(GameAction::Draw), Ok(ActionOutcome::Drawn));
    assert_eq!(state.hand_text(P0), "Run, Up");
    assert_eq!(state.apply(GameAction::EndTurn), Ok(ActionOutcome::TurnEnded { next: P1 }));

    assert_eq!(state.apply(GameAction::Draw), Err(GameError::DeckEmpty));
}

// ============================================================================
// Rejected Actions
// ============================================================================

/// Test that rejected actions never change the state.
#[test]
fn test_rejections_leave_state_untouched() {
    use Category::*;

    let mut state = deal(&[("I", Pronoun), ("Run", Verb)], &[("Cat", Noun)], &[]);
    play(&mut state, "I", 0, 0);

    let hand_before = state.hand(P0).clone();
    let board_before = state.board().clone();
    let issues_before = state.issues().to_vec();

    let rejected = [
        GameAction::Place {
            source: CardSource::Hand { index: 0 },
            row: 0,
            col: 0,
        },
        GameAction::Place {
            source: CardSource::Hand { index: 0 },
            row: 0,
            col: 8,
        },
        GameAction::Place {
            source: CardSource::Board { row: 4, col: 4 },
            row: 0,
            col: 1,
        },
        GameAction::Remove { row: 3, col: 3 },
        GameAction::Draw,
    ];

    for action in rejected {
        assert!(state.apply(action).is_err(), "{action:?} should be rejected");
        assert_eq!(state.hand(P0), &hand_before);
        assert_eq!(state.board(), &board_before);
        assert_eq!(state.issues(), issues_before.as_slice());
        assert_eq!(state.actions_this_turn(), 1);
    }
}

// ============================================================================
// Dealing
// ============================================================================

/// Test that the stock deck deals the same game for the same seed.
#[test]
fn test_seeded_deal_is_reproducible() {
    let registry = CardRegistry::standard();
    let a = GameState::new(GameConfig::default(), registry.iter().cloned(), 2024);
    let b = GameState::new(GameConfig::default(), registry.iter().cloned(), 2024);

    assert_eq!(a.hand_text(P0), b.hand_text(P0));
    assert_eq!(a.hand_text(P1), b.hand_text(P1));
    assert_eq!(a.deck_len(), b.deck_len());
}

/// Test that snapshots are independent of the live game.
#[test]
fn test_snapshot_is_independent() {
    let registry = CardRegistry::standard();
    let mut state = GameState::new(GameConfig::default(), registry.iter().cloned(), 5);
    let snapshot = state.clone();

    state.apply(GameAction::Draw).unwrap();
    assert_eq!(snapshot.hand(P0).len(), 14);
    assert_eq!(state.hand(P0).len(), 15);
    assert_eq!(snapshot.deck_len(), state.deck_len() + 1);
}
