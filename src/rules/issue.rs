//! Validation issues reported for invalid runs.

use serde::{Deserialize, Serialize};

use crate::board::RunSpan;
use crate::cards::WordCard;

/// Why a run was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// A single card with no neighbours.
    Isolated,
    /// Several cards forming no sentence or letter group.
    Pattern,
}

/// One invalid run.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub message: String,
    pub kind: IssueKind,
}

impl ValidationIssue {
    /// Issue for the unclassified run at `span` holding `cards`.
    #[must_use]
    pub fn for_run(span: RunSpan, cards: &[&WordCard]) -> Self {
        let (kind, message) = match cards {
            [card] => (
                IssueKind::Isolated,
                format!(
                    "Isolated card: '{}' is not a valid short sentence or group.",
                    card.text
                ),
            ),
            _ => {
                let text = cards
                    .iter()
                    .map(|c| c.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                (IssueKind::Pattern, format!("Invalid pattern: '{text}'"))
            }
        };

        Self {
            row: span.row,
            start_col: span.start_col,
            end_col: span.end_col,
            message,
            kind,
        }
    }

    /// The run this issue covers.
    #[must_use]
    pub fn span(&self) -> RunSpan {
        RunSpan::new(self.row, self.start_col, self.end_col)
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}, cols {}-{}: {}",
            self.row, self.start_col, self.end_col, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;

    #[test]
    fn test_isolated_issue() {
        let card = WordCard::new("1", "Cat", [Category::Noun]);
        let issue = ValidationIssue::for_run(RunSpan::new(2, 7, 7), &[&card]);

        assert_eq!(issue.kind, IssueKind::Isolated);
        assert_eq!(
            issue.message,
            "Isolated card: 'Cat' is not a valid short sentence or group."
        );
        assert_eq!(issue.span(), RunSpan::new(2, 7, 7));
    }

    #[test]
    fn test_pattern_issue() {
        let run = WordCard::new("1", "Run", [Category::Verb]);
        let the = WordCard::new("2", "The", [Category::Article]);
        let issue = ValidationIssue::for_run(RunSpan::new(0, 0, 1), &[&run, &the]);

        assert_eq!(issue.kind, IssueKind::Pattern);
        assert_eq!(issue.message, "Invalid pattern: 'Run The'");
        assert_eq!(issue.to_string(), "row 0, cols 0-1: Invalid pattern: 'Run The'");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&IssueKind::Isolated).unwrap(), "\"isolated\"");
        assert_eq!(serde_json::to_string(&IssueKind::Pattern).unwrap(), "\"pattern\"");
    }
}
