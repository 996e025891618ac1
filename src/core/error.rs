//! Error types.
//!
//! An invalid run on the board is a validation *result*, never an error.
//! `ValidationError` only covers malformed input handed to the validator;
//! `GameError` covers moves the turn reducer refuses.

use thiserror::Error;

use crate::cards::CardId;

/// Malformed board handed to the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Board dimensions differ from the configured grid, or rows are ragged.
    #[error("Invalid board shape: expected {expected_rows}x{expected_cols}, got {rows}x{cols}")]
    InvalidBoardShape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// Serialized board whose slot list does not fill its grid.
    #[error("Invalid board shape: {rows}x{cols} grid given {slots} slots")]
    SlotCount { rows: usize, cols: usize, slots: usize },

    /// An occupied cell holds a card with no categories.
    #[error("Invalid card data at ({row}, {col}): card {card} has no categories")]
    InvalidCardData { row: usize, col: usize, card: CardId },
}

/// A move rejected by the turn reducer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is occupied; only board cards can be swapped")]
    CellOccupied { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is empty")]
    EmptyCell { row: usize, col: usize },

    #[error("Hand index {index} out of range (hand has {len} cards)")]
    HandIndexOutOfRange { index: usize, len: usize },

    #[error("Cannot remove card at ({row}, {col}): not placed by the current player this turn")]
    CannotRemove { row: usize, col: usize },

    #[error("Deck empty: no more cards to draw")]
    DeckEmpty,

    #[error("No action taken: place, move, or draw a card before ending the turn")]
    NoActionTaken,

    #[error("Game is over")]
    GameOver,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_message() {
        let err = ValidationError::InvalidBoardShape {
            expected_rows: 5,
            expected_cols: 8,
            rows: 4,
            cols: 8,
        };
        assert_eq!(err.to_string(), "Invalid board shape: expected 5x8, got 4x8");
    }

    #[test]
    fn test_validation_converts_into_game_error() {
        let err: GameError = ValidationError::InvalidCardData {
            row: 0,
            col: 1,
            card: CardId::new("w1"),
        }
        .into();
        assert!(matches!(err, GameError::Validation(_)));
        assert!(err.to_string().contains("card w1 has no categories"));
    }
}
