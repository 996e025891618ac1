//! The board: a fixed-size grid of optional cells.
//!
//! Row-major storage. Only horizontal adjacency matters to the validator;
//! the grid offers no vertical or diagonal views.

use serde::{Deserialize, Serialize};

use super::cell::GridCell;
use super::run::{segment_row, RunSpan};
use crate::core::{BoardConfig, ValidationError};

/// Fixed `rows x cols` grid; each position holds at most one card.
///
/// ## Usage
///
/// ```
/// use word_grid::board::{Board, GridCell};
/// use word_grid::cards::{Category, WordCard};
/// use word_grid::core::PlayerId;
///
/// let mut board = Board::new(5, 8);
/// let card = WordCard::new("w1", "Dogs", [Category::Noun]);
/// board.place(0, 3, GridCell::new(card, PlayerId::new(0)));
///
/// assert_eq!(board.get(0, 3).map(|c| c.text()), Some("Dogs"));
/// assert_eq!(board.occupied_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    rows: usize,
    cols: usize,
    slots: Vec<Option<GridCell>>,
}

/// Wire form of `Board`, checked before it becomes one.
#[derive(Deserialize)]
struct RawBoard {
    rows: usize,
    cols: usize,
    slots: Vec<Option<GridCell>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ValidationError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.rows.checked_mul(raw.cols) != Some(raw.slots.len()) {
            return Err(ValidationError::SlotCount {
                rows: raw.rows,
                cols: raw.cols,
                slots: raw.slots.len(),
            });
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            slots: raw.slots,
        })
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            slots: vec![None; rows * cols],
        }
    }

    /// Create an empty board sized by `config`.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    /// Build a board from nested rows.
    ///
    /// Fails with `InvalidBoardShape` if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<Option<GridCell>>>) -> Result<Self, ValidationError> {
        let row_count = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(ValidationError::InvalidBoardShape {
                expected_rows: row_count,
                expected_cols: cols,
                rows: row_count,
                cols: bad.len(),
            });
        }

        Ok(Self {
            rows: row_count,
            cols,
            slots: rows.into_iter().flatten().collect(),
        })
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

    /// Whether `(row, col)` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn slot(&self, row: usize, col: usize) -> usize {
        assert!(
            self.in_bounds(row, col),
            "Position ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Cell at a position, `None` if empty or out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&GridCell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.slots[row * self.cols + col].as_ref()
    }

    /// Mutable cell at a position.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut GridCell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        self.slots[row * self.cols + col].as_mut()
    }

    /// Whether a position is occupied.
    #[must_use]
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Put a cell at a position, returning whatever was there.
    ///
    /// Panics if the position is out of bounds.
    pub fn place(&mut self, row: usize, col: usize, cell: GridCell) -> Option<GridCell> {
        let i = self.slot(row, col);
        self.slots[i].replace(cell)
    }

    /// Clear a position, returning its cell.
    ///
    /// Panics if the position is out of bounds.
    pub fn take(&mut self, row: usize, col: usize) -> Option<GridCell> {
        let i = self.slot(row, col);
        self.slots[i].take()
    }

    /// Exchange the contents of two positions.
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let i = self.slot(a.0, a.1);
        let j = self.slot(b.0, b.1);
        self.slots.swap(i, j);
    }

    /// One row's slots, left to right.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<GridCell>] {
        let start = row * self.cols;
        &self.slots[start..start + self.cols]
    }

    /// Runs of `row`, left to right.
    pub fn runs_in_row(&self, row: usize) -> impl Iterator<Item = RunSpan> + '_ {
        segment_row(row, self.row(row))
    }

    /// Cells covered by `span`, in order.
    ///
    /// Every position in a span produced by `runs_in_row` is occupied.
    pub fn run_cells(&self, span: RunSpan) -> impl Iterator<Item = &GridCell> + '_ {
        self.row(span.row)[span.start_col..=span.end_col]
            .iter()
            .flatten()
    }

    /// Iterate over occupied positions as `(row, col, cell)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &GridCell)> + '_ {
        let cols = self.cols;
        self.slots
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.as_ref().map(|cell| (i / cols, i % cols, cell)))
    }

    /// Number of occupied positions.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Mark every card as settled (turn hand-off).
    pub fn clear_turn_flags(&mut self) {
        for cell in self.slots.iter_mut().flatten() {
            cell.new_this_turn = false;
        }
    }
}

/// Compact text form handed to hint generators: one line per row, cards
/// as `Text(C)` with `C` the primary category's initial, empties as `_`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, slot) in self.row(row).iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match slot {
                    Some(cell) => write!(
                        f,
                        "{}({})",
                        cell.card.text,
                        cell.card.primary_category().initial()
                    )?,
                    None => f.write_str("_")?,
                }
            }
        }
        Ok(())
    }
}
