//! Cells on the board.

use serde::{Deserialize, Serialize};

use crate::cards::WordCard;
use crate::core::PlayerId;

/// Per-cell validation verdict.
///
/// `Neutral` is the state of a card nobody has validated yet (freshly
/// dealt boards, or after a turn hand-off clears highlighting). The
/// validator itself only ever produces `Valid` or `Invalid`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationState {
    Valid,
    Invalid,
    #[default]
    Neutral,
}

/// A word card placed on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// The card occupying the cell.
    pub card: WordCard,

    /// Placed (or moved) during the current turn.
    pub new_this_turn: bool,

    /// Player who placed it.
    pub placed_by: PlayerId,
}

impl GridCell {
    /// A card placed this turn by `player`.
    #[must_use]
    pub fn new(card: WordCard, placed_by: PlayerId) -> Self {
        Self {
            card,
            new_this_turn: true,
            placed_by,
        }
    }

    /// A card that has been on the board since an earlier turn.
    #[must_use]
    pub fn settled(card: WordCard, placed_by: PlayerId) -> Self {
        Self {
            card,
            new_this_turn: false,
            placed_by,
        }
    }

    /// Display text of the card.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.card.text
    }
}
