//! Game state and the turn reducer.
//!
//! ## Turn Flow
//!
//! 1. The current player places, moves, swaps, removes or draws cards.
//!    Each accepted action bumps (or, for a removal, lowers) the turn's
//!    action count.
//! 2. Every board change re-runs validation; the issues and per-cell
//!    verdicts are kept for highlighting.
//! 3. `EndTurn` validates the board. An invalid board blocks the turn; a
//!    valid board with an empty hand wins; otherwise play passes on.
//!
//! Hands and the deck are `im::Vector`s, so snapshots clone in O(1).

use im::Vector;

use super::action::{ActionOutcome, CardSource, GameAction};
use crate::board::{AnnotatedBoard, Board, GridCell, ValidationState};
use crate::cards::WordCard;
use crate::core::{GameConfig, GameError, GameRng, PlayerId, PlayerMap};
use crate::rules::{BoardValidator, ValidationIssue};

type Outcome = std::result::Result<ActionOutcome, GameError>;

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    validator: BoardValidator,
    board: Board,
    hands: PlayerMap<Vector<WordCard>>,
    deck: Vector<WordCard>,
    current: PlayerId,
    actions_this_turn: u32,
    turn_number: u32,
    winner: Option<PlayerId>,
    issues: Vec<ValidationIssue>,
    annotated: Option<AnnotatedBoard>,
}

impl GameState {
    /// Shuffle `deck` with `seed` and deal `config.hand_size` cards to each
    /// player from the top. Player 0 starts.
    ///
    /// ```
    /// use word_grid::cards::CardRegistry;
    /// use word_grid::core::{GameConfig, PlayerId};
    /// use word_grid::game::GameState;
    ///
    /// let registry = CardRegistry::standard();
    /// let state = GameState::new(GameConfig::default(), registry.iter().cloned(), 42);
    ///
    /// assert_eq!(state.hand(PlayerId::new(0)).len(), 14);
    /// assert_eq!(state.deck_len(), registry.len() - 28);
    /// ```
    #[must_use]
    pub fn new(config: GameConfig, deck: impl IntoIterator<Item = WordCard>, seed: u64) -> Self {
        let mut cards: Vec<WordCard> = deck.into_iter().collect();
        GameRng::new(seed).shuffle(&mut cards);

        let mut deck: Vector<WordCard> = cards.into_iter().collect();
        let mut hands: PlayerMap<Vector<WordCard>> = PlayerMap::with_default(config.player_count);
        for player in PlayerId::all(config.player_count) {
            let rest = deck.split_off(config.hand_size.min(deck.len()));
            hands[player] = std::mem::replace(&mut deck, rest);
        }

        tracing::debug!(seed, deck = deck.len(), "dealt new game");
        Self::from_deal(config, hands, deck)
    }

    /// Start a game from hands and a deck dealt elsewhere.
    ///
    /// Panics if `config.player_count` is zero or differs from the number
    /// of hands.
    #[must_use]
    pub fn from_deal(config: GameConfig, hands: PlayerMap<Vector<WordCard>>, deck: Vector<WordCard>) -> Self {
        assert!(config.player_count > 0, "Must have at least 1 player");
        assert_eq!(
            hands.player_count(),
            config.player_count,
            "Dealt {} hands for {} players",
            hands.player_count(),
            config.player_count
        );

        Self {
            validator: BoardValidator::with_config(config.board.clone()),
            board: Board::from_config(&config.board),
            config,
            hands,
            deck,
            current: PlayerId::new(0),
            actions_this_turn: 0,
            turn_number: 1,
            winner: None,
            issues: Vec::new(),
            annotated: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// A player's hand, in draw order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Vector<WordCard> {
        &self.hands[player]
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn actions_this_turn(&self) -> u32 {
        self.actions_this_turn
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Issues from the latest validation, for highlighting.
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Per-cell verdicts from the latest validation, if any this turn.
    #[must_use]
    pub fn annotated(&self) -> Option<&AnnotatedBoard> {
        self.annotated.as_ref()
    }

    /// Highlight state of a cell: `None` if empty, `Neutral` if nothing
    /// has been validated since the last hand-off.
    #[must_use]
    pub fn cell_state(&self, row: usize, col: usize) -> Option<ValidationState> {
        self.board.get(row, col)?;
        Some(
            self.annotated
                .as_ref()
                .and_then(|a| a.state(row, col))
                .unwrap_or_default(),
        )
    }

    /// Comma-separated texts of a player's hand.
    #[must_use]
    pub fn hand_text(&self, player: PlayerId) -> String {
        self.hands[player]
            .iter()
            .map(|card| card.text.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    // === Reducer ===

    /// Apply one action for the current player.
    ///
    /// On error the state is left exactly as it was.
    pub fn apply(&mut self, action: GameAction) -> Outcome {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }

        let player = self.current;
        let result = match action {
            GameAction::Place { source, row, col } => self.place(source, row, col),
            GameAction::Remove { row, col } => self.remove(row, col),
            GameAction::Draw => self.draw(),
            GameAction::EndTurn => self.end_turn(),
        };

        match &result {
            Ok(outcome) => tracing::debug!(%player, ?action, ?outcome, "action applied"),
            Err(err) => tracing::debug!(%player, ?action, %err, "action rejected"),
        }
        result
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GameError> {
        if self.board.in_bounds(row, col) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds { row, col })
        }
    }

    fn place(&mut self, source: CardSource, row: usize, col: usize) -> Outcome {
        self.check_bounds(row, col)?;
        let player = self.current;
        let mut board = self.board.clone();
        let mut hand = self.hands[player].clone();

        let outcome = match source {
            CardSource::Hand { index } => {
                if board.is_occupied(row, col) {
                    return Err(GameError::CellOccupied { row, col });
                }
                if index >= hand.len() {
                    return Err(GameError::HandIndexOutOfRange {
                        index,
                        len: hand.len(),
                    });
                }
                board.place(row, col, GridCell::new(hand.remove(index), player));
                ActionOutcome::Placed
            }
            CardSource::Board {
                row: from_row,
                col: from_col,
            } => {
                self.check_bounds(from_row, from_col)?;
                if !board.is_occupied(from_row, from_col) {
                    return Err(GameError::EmptyCell {
                        row: from_row,
                        col: from_col,
                    });
                }
                if (from_row, from_col) == (row, col) {
                    return Err(GameError::CellOccupied { row, col });
                }

                let Some(moved) = board.take(from_row, from_col) else {
                    return Err(GameError::EmptyCell {
                        row: from_row,
                        col: from_col,
                    });
                };
                match board.place(row, col, GridCell::new(moved.card, player)) {
                    None => ActionOutcome::Placed,
                    Some(mut displaced) => {
                        displaced.new_this_turn = true;
                        board.place(from_row, from_col, displaced);
                        ActionOutcome::Swapped
                    }
                }
            }
        };

        self.commit(board, hand, self.actions_this_turn + 1)?;
        Ok(outcome)
    }

    fn remove(&mut self, row: usize, col: usize) -> Outcome {
        self.check_bounds(row, col)?;
        let player = self.current;
        let mut board = self.board.clone();

        let cell = board.take(row, col).ok_or(GameError::EmptyCell { row, col })?;
        if !cell.new_this_turn || cell.placed_by != player {
            return Err(GameError::CannotRemove { row, col });
        }

        let mut hand = self.hands[player].clone();
        hand.push_back(cell.card);

        self.commit(board, hand, self.actions_this_turn.saturating_sub(1))?;
        Ok(ActionOutcome::Removed)
    }

    fn draw(&mut self) -> Outcome {
        let card = self.deck.pop_back().ok_or(GameError::DeckEmpty)?;
        self.hands[self.current].push_back(card);
        self.actions_this_turn += 1;
        Ok(ActionOutcome::Drawn)
    }

    fn end_turn(&mut self) -> Outcome {
        if self.actions_this_turn == 0 {
            return Err(GameError::NoActionTaken);
        }

        let result = self.validator.validate(&self.board)?;
        let player = self.current;

        if !result.is_valid {
            self.issues = result.issues.clone();
            self.annotated = Some(result.annotated);
            return Ok(ActionOutcome::TurnBlocked {
                issues: result.issues,
            });
        }

        if self.hands[player].is_empty() {
            self.winner = Some(player);
            self.issues.clear();
            self.annotated = Some(result.annotated);
            tracing::info!(winner = %player, turn = self.turn_number, "game won");
            return Ok(ActionOutcome::Won { winner: player });
        }

        self.board.clear_turn_flags();
        self.issues.clear();
        self.annotated = None;
        self.current = player.next(self.config.player_count);
        self.actions_this_turn = 0;
        self.turn_number += 1;

        tracing::info!(next = %self.current, turn = self.turn_number, "turn handed off");
        Ok(ActionOutcome::TurnEnded { next: self.current })
    }

    /// Validate `board` and, only if that succeeds, make it current along
    /// with the current player's new hand.
    fn commit(&mut self, board: Board, hand: Vector<WordCard>, actions: u32) -> Result<(), GameError> {
        let result = self.validator.validate(&board)?;

        self.board = board;
        self.hands[self.current] = hand;
        self.actions_this_turn = actions;
        self.issues = result.issues;
        self.annotated = Some(result.annotated);
        Ok(())
    }
}
