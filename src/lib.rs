//! # word-grid
//!
//! Board validation engine for a two-player word-placement card game.
//!
//! Players lay word cards (nouns, verbs, articles, ...) on a fixed grid.
//! Every horizontal run of adjacent cards must read as a short sentence,
//! possibly two clauses joined by a conjunction, or as a group of at least
//! three words sharing a first letter.
//!
//! ## Design Principles
//!
//! 1. **Validation is pure**: `BoardValidator::validate` never mutates the
//!    board. Per-cell verdicts come back as a separate `AnnotatedBoard`.
//!
//! 2. **Data-driven rules**: sentence structures live in a `PatternTable`;
//!    the classifier sits behind the `RunClassifier` trait.
//!
//! 3. **Invalid runs are results, not errors**: `ValidationError` only
//!    covers malformed input.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `cards`: categories, word cards, the stock vocabulary
//! - `board`: grid, cells, runs, annotations
//! - `rules`: pattern table, classifier, scanner, validator
//! - `game`: the turn reducer

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, CategoryPolicy, GameConfig, GameError, GameRng, PlayerId, PlayerMap,
    SplitPolicy, ValidationError,
};

pub use crate::cards::{CardId, CardRegistry, Category, WordCard};

pub use crate::board::{AnnotatedBoard, Board, GridCell, RunSpan, ValidationState};

pub use crate::rules::{
    BoardValidator, Classification, IssueKind, PatternTable, RunClassifier, SentencePattern,
    SequenceClassifier, ValidationIssue, ValidationResult,
};

pub use crate::game::{ActionOutcome, CardSource, GameAction, GameState};
