//! Board scanning: segment every row into runs and classify each one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::classifier::{Classification, RunClassifier, SequenceClassifier};
use super::issue::ValidationIssue;
use crate::board::{AnnotatedBoard, Board, RunSpan, ValidationState};
use crate::cards::WordCard;

/// A run together with its verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRun {
    pub span: RunSpan,
    pub classification: Classification,
}

/// Output of one scan.
///
/// `issues` holds exactly one entry per run classified `Unclassified`,
/// in scan order (rows top to bottom, runs left to right).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub issues: Vec<ValidationIssue>,
    pub annotated: AnnotatedBoard,
    pub runs: Vec<ClassifiedRun>,
}

/// Walks a board row by row, feeding each run to a `RunClassifier`.
#[derive(Clone, Debug, Default)]
pub struct BoardScanner<C = SequenceClassifier> {
    classifier: C,
}

impl<C: RunClassifier> BoardScanner<C> {
    /// Create a scanner around `classifier`.
    #[must_use]
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// The classifier in use.
    #[must_use]
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Scan every row of `board`.
    ///
    /// Runs are found by greedy rightward extension, so they never touch
    /// and never cross a row boundary. Cells of a valid run are marked
    /// `Valid`; cells of an invalid run are marked `Invalid` and the run
    /// gets one issue.
    #[must_use]
    pub fn scan(&self, board: &Board) -> ScanReport {
        let mut issues = Vec::new();
        let mut annotated = AnnotatedBoard::new(board.rows(), board.cols());
        let mut runs = Vec::new();

        for row in 0..board.rows() {
            for span in board.runs_in_row(row) {
                let cards: SmallVec<[&WordCard; 8]> =
                    board.run_cells(span).map(|cell| &cell.card).collect();
                let classification = self.classifier.classify(&cards);

                tracing::trace!(
                    row,
                    start_col = span.start_col,
                    end_col = span.end_col,
                    ?classification,
                    "classified run"
                );

                if classification.is_valid() {
                    annotated.mark_run(span, ValidationState::Valid);
                } else {
                    annotated.mark_run(span, ValidationState::Invalid);
                    issues.push(ValidationIssue::for_run(span, &cards));
                }

                runs.push(ClassifiedRun {
                    span,
                    classification,
                });
            }
        }

        ScanReport {
            issues,
            annotated,
            runs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GridCell;
    use crate::cards::Category::{self, *};
    use crate::core::PlayerId;
    use crate::rules::IssueKind;

    fn put(board: &mut Board, row: usize, col: usize, text: &str, category: Category) {
        let card = WordCard::new(format!("{row}-{col}"), text, [category]);
        board.place(row, col, GridCell::new(card, PlayerId::new(0)));
    }

    /// Accepts every run; checks the scanner is classifier-agnostic.
    struct AcceptAll;

    impl RunClassifier for AcceptAll {
        fn classify(&self, _cards: &[&WordCard]) -> Classification {
            Classification::LetterGroup { letter: '*' }
        }
    }

    #[test]
    fn test_empty_board() {
        let report = BoardScanner::<SequenceClassifier>::default().scan(&Board::new(5, 8));
        assert!(report.issues.is_empty());
        assert!(report.runs.is_empty());
        assert_eq!(report.annotated.iter().count(), 0);
    }

    #[test]
    fn test_mixed_row() {
        let mut board = Board::new(1, 8);
        put(&mut board, 0, 0, "I", Pronoun);
        put(&mut board, 0, 1, "Run", Verb);
        put(&mut board, 0, 3, "Cat", Noun);
        put(&mut board, 0, 5, "Run", Verb);
        put(&mut board, 0, 6, "The", Article);

        let report = BoardScanner::<SequenceClassifier>::default().scan(&board);

        assert_eq!(report.runs.len(), 3);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.issues[0].kind, IssueKind::Isolated);
        assert_eq!(report.issues[0].span(), RunSpan::new(0, 3, 3));
        assert_eq!(report.issues[1].kind, IssueKind::Pattern);
        assert_eq!(report.issues[1].span(), RunSpan::new(0, 5, 6));

        assert_eq!(report.annotated.state(0, 0), Some(ValidationState::Valid));
        assert_eq!(report.annotated.state(0, 1), Some(ValidationState::Valid));
        assert_eq!(report.annotated.state(0, 2), None);
        assert_eq!(report.annotated.state(0, 3), Some(ValidationState::Invalid));
        assert_eq!(report.annotated.state(0, 6), Some(ValidationState::Invalid));
        assert_eq!(report.annotated.state(0, 7), None);
    }

    #[test]
    fn test_runs_do_not_wrap_rows() {
        let mut board = Board::new(2, 2);
        put(&mut board, 0, 1, "I", Pronoun);
        put(&mut board, 1, 0, "Run", Verb);

        let report = BoardScanner::<SequenceClassifier>::default().scan(&board);
        assert_eq!(report.issues.len(), 2);
        assert!(report.issues.iter().all(|i| i.kind == IssueKind::Isolated));
    }

    #[test]
    fn test_custom_classifier() {
        let mut board = Board::new(1, 3);
        put(&mut board, 0, 0, "Solo", Noun);

        let report = BoardScanner::new(AcceptAll).scan(&board);
        assert!(report.issues.is_empty());
        assert_eq!(report.annotated.state(0, 0), Some(ValidationState::Valid));
    }
}
