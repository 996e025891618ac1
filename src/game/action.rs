//! Reducer actions and their outcomes.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::ValidationIssue;

/// Where a card being placed comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSource {
    /// Position in the current player's hand.
    Hand { index: usize },
    /// A card already on the board.
    Board { row: usize, col: usize },
}

/// One player action.
///
/// ```
/// use word_grid::game::{CardSource, GameAction};
///
/// let play = GameAction::Place {
///     source: CardSource::Hand { index: 0 },
///     row: 2,
///     col: 3,
/// };
/// assert!(play.touches_board());
/// assert!(!GameAction::Draw.touches_board());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Place, move or swap a card onto `(row, col)`.
    Place {
        source: CardSource,
        row: usize,
        col: usize,
    },
    /// Take back a card placed this turn.
    Remove { row: usize, col: usize },
    /// Draw the top card of the deck.
    Draw,
    /// Finish the turn.
    EndTurn,
}

impl GameAction {
    /// Whether the action can change the board.
    #[must_use]
    pub fn touches_board(&self) -> bool {
        matches!(self, GameAction::Place { .. } | GameAction::Remove { .. })
    }
}

/// What an accepted action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// Card placed on an empty cell (from hand or board).
    Placed,
    /// Two board cards exchanged.
    Swapped,
    /// Card returned to hand.
    Removed,
    /// Card drawn into hand.
    Drawn,
    /// End of turn refused: the board has invalid runs.
    TurnBlocked { issues: Vec<ValidationIssue> },
    /// Turn handed to `next`.
    TurnEnded { next: PlayerId },
    /// `winner` emptied their hand on a valid board.
    Won { winner: PlayerId },
}
