//! Board validation facade.
//!
//! `BoardValidator::validate` is the single entry point the turn reducer
//! calls. It is a pure function of the board: nothing is mutated and the
//! annotations come back as a fresh grid.

use serde::{Deserialize, Serialize};

use super::classifier::SequenceClassifier;
use super::issue::ValidationIssue;
use super::pattern::PatternTable;
use super::scanner::{BoardScanner, ClassifiedRun, ScanReport};
use crate::board::{AnnotatedBoard, Board};
use crate::core::{BoardConfig, Result, ValidationError};

/// Verdict for a whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `issues` is empty.
    pub is_valid: bool,
    pub issues: Vec<ValidationIssue>,
    pub annotated: AnnotatedBoard,
    pub runs: Vec<ClassifiedRun>,
}

impl From<ScanReport> for ValidationResult {
    fn from(report: ScanReport) -> Self {
        Self {
            is_valid: report.issues.is_empty(),
            issues: report.issues,
            annotated: report.annotated,
            runs: report.runs,
        }
    }
}

/// Validates boards against a fixed configuration and pattern table.
///
/// ## Example
///
/// ```
/// use word_grid::board::{Board, GridCell, ValidationState};
/// use word_grid::cards::{Category, WordCard};
/// use word_grid::core::PlayerId;
/// use word_grid::rules::BoardValidator;
///
/// let validator = BoardValidator::default();
/// let mut board = Board::new(5, 8);
/// let me = PlayerId::new(0);
/// board.place(0, 0, GridCell::new(WordCard::new("a", "I", [Category::Pronoun]), me));
/// board.place(0, 1, GridCell::new(WordCard::new("b", "Run", [Category::Verb]), me));
///
/// let result = validator.validate(&board).unwrap();
/// assert!(result.is_valid);
/// assert_eq!(result.annotated.state(0, 1), Some(ValidationState::Valid));
/// ```
#[derive(Clone, Debug)]
pub struct BoardValidator {
    config: BoardConfig,
    scanner: BoardScanner<SequenceClassifier>,
}

impl BoardValidator {
    /// Create a validator for `config` using `patterns`.
    #[must_use]
    pub fn new(config: BoardConfig, patterns: PatternTable) -> Self {
        let classifier = SequenceClassifier::new(patterns, &config);
        Self {
            config,
            scanner: BoardScanner::new(classifier),
        }
    }

    /// Create a validator for `config` with the stock pattern table.
    #[must_use]
    pub fn with_config(config: BoardConfig) -> Self {
        Self::new(config, PatternTable::standard())
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// The classifier in use.
    #[must_use]
    pub fn classifier(&self) -> &SequenceClassifier {
        self.scanner.classifier()
    }

    /// Validate `board`.
    ///
    /// Fails fast on malformed input: wrong dimensions
    /// (`InvalidBoardShape`) or an uncategorised card (`InvalidCardData`).
    pub fn validate(&self, board: &Board) -> Result<ValidationResult> {
        self.check_shape(board)?;
        self.check_cards(board)?;

        let result = ValidationResult::from(self.scanner.scan(board));

        tracing::debug!(
            runs = result.runs.len(),
            issues = result.issues.len(),
            is_valid = result.is_valid,
            "validated board"
        );

        Ok(result)
    }

    fn check_shape(&self, board: &Board) -> Result<()> {
        if board.rows() != self.config.rows || board.cols() != self.config.cols {
            return Err(ValidationError::InvalidBoardShape {
                expected_rows: self.config.rows,
                expected_cols: self.config.cols,
                rows: board.rows(),
                cols: board.cols(),
            });
        }
        Ok(())
    }

    fn check_cards(&self, board: &Board) -> Result<()> {
        match board.occupied().find(|(_, _, cell)| cell.card.categories.is_empty()) {
            Some((row, col, cell)) => Err(ValidationError::InvalidCardData {
                row,
                col,
                card: cell.card.id.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for BoardValidator {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}
