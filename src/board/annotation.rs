//! Validation annotations, kept apart from the board they describe.
//!
//! The validator never touches cards; it produces a fresh grid of states
//! keyed by position.

use serde::{Deserialize, Serialize};

use super::cell::ValidationState;
use super::run::RunSpan;

/// Board-shaped grid of per-cell validation states.
///
/// Occupied cells carry `Some(state)`, empty cells carry `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedBoard {
    rows: usize,
    cols: usize,
    states: Vec<Option<ValidationState>>,
}

impl AnnotatedBoard {
    /// Create an annotation grid with no states set.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            states: vec![None; rows * cols],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// State at a position; `None` for empty cells or out of bounds.
    #[must_use]
    pub fn state(&self, row: usize, col: usize) -> Option<ValidationState> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.states[row * self.cols + col]
    }

    /// Mark every cell of `span` with `state`.
    pub fn mark_run(&mut self, span: RunSpan, state: ValidationState) {
        let base = span.row * self.cols;
        for col in span.columns() {
            self.states[base + col] = Some(state);
        }
    }

    /// Iterate over annotated positions as `(row, col, state)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, ValidationState)> + '_ {
        let cols = self.cols;
        self.states
            .iter()
            .enumerate()
            .filter_map(move |(i, s)| s.map(|state| (i / cols, i % cols, state)))
    }

    /// Number of cells in `state`.
    #[must_use]
    pub fn count(&self, state: ValidationState) -> usize {
        self.states.iter().filter(|s| **s == Some(state)).count()
    }
}
