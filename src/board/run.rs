//! Run segmentation.
//!
//! A run is a maximal stretch of occupied cells in one row, bounded by
//! empty cells or the row edges. Runs are recomputed on every pass and
//! never stored on the board.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Bounds of a run: row plus inclusive column span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunSpan {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

impl RunSpan {
    /// Create a span. `start_col` must not exceed `end_col`.
    #[must_use]
    pub fn new(row: usize, start_col: usize, end_col: usize) -> Self {
        debug_assert!(start_col <= end_col, "Run span must be non-empty");
        Self {
            row,
            start_col,
            end_col,
        }
    }

    /// Number of cells in the run (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// Always false: a run holds at least one card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Columns covered.
    #[must_use]
    pub fn columns(&self) -> RangeInclusive<usize> {
        self.start_col..=self.end_col
    }

    /// Whether `col` falls inside the run.
    #[must_use]
    pub fn contains(&self, col: usize) -> bool {
        self.columns().contains(&col)
    }
}

/// Iterator over the runs of one row, left to right.
///
/// ```
/// use word_grid::board::{segment_row, RunSpan};
///
/// let row = [Some('a'), Some('b'), None, Some('c')];
/// let runs: Vec<_> = segment_row(2, &row).collect();
/// assert_eq!(runs, vec![RunSpan::new(2, 0, 1), RunSpan::new(2, 3, 3)]);
/// ```
pub struct RowRuns<'a, T> {
    row: usize,
    slots: &'a [Option<T>],
    col: usize,
}

/// Segment `slots` (one board row) into its runs.
pub fn segment_row<T>(row: usize, slots: &[Option<T>]) -> RowRuns<'_, T> {
    RowRuns { row, slots, col: 0 }
}

impl<T> Iterator for RowRuns<'_, T> {
    type Item = RunSpan;

    fn next(&mut self) -> Option<RunSpan> {
        // Skip empties
        while self.col < self.slots.len() && self.slots[self.col].is_none() {
            self.col += 1;
        }
        if self.col >= self.slots.len() {
            return None;
        }

        let start = self.col;
        while self.col < self.slots.len() && self.slots[self.col].is_some() {
            self.col += 1;
        }

        Some(RunSpan::new(self.row, start, self.col - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pattern: &str) -> Vec<Option<char>> {
        pattern.chars().map(|c| (c != '_').then_some(c)).collect()
    }

    fn spans(pattern: &str) -> Vec<(usize, usize)> {
        segment_row(0, &row(pattern))
            .map(|s| (s.start_col, s.end_col))
            .collect()
    }

    #[test]
    fn test_empty_row() {
        assert!(spans("________").is_empty());
        assert!(spans("").is_empty());
    }

    #[test]
    fn test_full_row_is_one_run() {
        assert_eq!(spans("abcdefgh"), vec![(0, 7)]);
    }

    #[test]
    fn test_runs_touching_edges() {
        assert_eq!(spans("ab____gh"), vec![(0, 1), (6, 7)]);
    }

    #[test]
    fn test_single_cell_runs() {
        assert_eq!(spans("a_b_c___"), vec![(0, 0), (2, 2), (4, 4)]);
    }

    #[test]
    fn test_span_helpers() {
        let span = RunSpan::new(1, 2, 4);
        assert_eq!(span.len(), 3);
        assert!(span.contains(3));
        assert!(!span.contains(5));
        assert_eq!(span.columns().collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}
