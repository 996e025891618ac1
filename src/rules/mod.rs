//! Board validation rules.
//!
//! Layered bottom-up:
//! - `pattern`: sentence patterns and the pattern table
//! - `classifier`: the `RunClassifier` trait and the stock `SequenceClassifier`
//! - `issue`: issues reported for invalid runs
//! - `scanner`: row segmentation plus per-run classification
//! - `validator`: the `BoardValidator` facade with input checks
//!
//! The scanner only knows the `RunClassifier` trait; it never interprets
//! categories itself.

pub mod classifier;
pub mod issue;
pub mod pattern;
pub mod scanner;
pub mod validator;

pub use classifier::{Classification, RunClassifier, SequenceClassifier};
pub use issue::{IssueKind, ValidationIssue};
pub use pattern::{structure_matches, PatternTable, SentencePattern, Structure};
pub use scanner::{BoardScanner, ClassifiedRun, ScanReport};
pub use validator::{BoardValidator, ValidationResult};
