//! Run classification.
//!
//! Checks, in order, first match wins:
//!
//! 1. **Direct match** - the run's categories equal some structure.
//! 2. **Conjunction split** - a card carrying `Conjunction` divides the
//!    run into two non-empty clauses that each match directly
//!    (`SingleLevel`), or into any number of such clauses (`Recursive`).
//! 3. **Letter group** - at least `letter_group_min_len` cards whose text
//!    starts with the same letter, ignoring case.
//!
//! Anything else is `Unclassified`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::pattern::PatternTable;
use crate::cards::{Category, WordCard};
use crate::core::{BoardConfig, CategoryPolicy, SplitPolicy};

/// Verdict for one run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Grammatical sentence. One pattern name per clause, left to right.
    Sentence { clauses: Vec<String> },
    /// Same-first-letter group (`letter` is lowercase).
    LetterGroup { letter: char },
    /// Neither.
    Unclassified,
}

impl Classification {
    /// Sentences and letter groups are valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Unclassified)
    }
}

/// Classifies one run of cards.
///
/// The scanner only talks to this trait, so alternative rule sets can be
/// dropped in without touching segmentation.
pub trait RunClassifier {
    /// Classify `cards`, given left to right. Never called with an empty run.
    fn classify(&self, cards: &[&WordCard]) -> Classification;
}

/// The game's classifier: pattern table plus letter-group rule.
///
/// ## Example
///
/// ```
/// use word_grid::cards::{Category, WordCard};
/// use word_grid::rules::{Classification, RunClassifier, SequenceClassifier};
///
/// let classifier = SequenceClassifier::default();
/// let i = WordCard::new("1", "I", [Category::Pronoun]);
/// let run = WordCard::new("2", "Run", [Category::Verb]);
///
/// assert_eq!(
///     classifier.classify(&[&i, &run]),
///     Classification::Sentence { clauses: vec!["Pronoun-Verb".into()] },
/// );
/// ```
#[derive(Clone, Debug)]
pub struct SequenceClassifier {
    patterns: PatternTable,
    letter_group_min_len: usize,
    category_policy: CategoryPolicy,
    split_policy: SplitPolicy,
}

impl SequenceClassifier {
    /// Create a classifier over `patterns` using the policies in `config`.
    #[must_use]
    pub fn new(patterns: PatternTable, config: &BoardConfig) -> Self {
        Self {
            patterns,
            letter_group_min_len: config.letter_group_min_len,
            category_policy: config.category_policy,
            split_policy: config.split_policy,
        }
    }

    /// The pattern table in use.
    #[must_use]
    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    /// Name of the first pattern matching `cards` as a whole.
    #[must_use]
    pub fn direct_match(&self, cards: &[&WordCard]) -> Option<&str> {
        self.patterns
            .find_match(cards, self.category_policy)
            .map(|p| p.name.as_str())
    }

    /// Clause pattern names if `cards` splits on conjunctions into clauses
    /// that each match directly.
    #[must_use]
    pub fn split_match(&self, cards: &[&WordCard]) -> Option<Vec<String>> {
        match self.split_policy {
            SplitPolicy::SingleLevel => self.split_once(cards),
            SplitPolicy::Recursive => {
                let mut memo = FxHashMap::default();
                self.split_suffix(cards, 0, &mut memo)
            }
        }
    }

    /// Lowercase shared first letter if `cards` forms a letter group.
    #[must_use]
    pub fn letter_group(&self, cards: &[&WordCard]) -> Option<char> {
        if cards.len() < self.letter_group_min_len {
            return None;
        }
        let letter = cards.first()?.first_letter()?;
        cards
            .iter()
            .all(|c| c.first_letter() == Some(letter))
            .then_some(letter)
    }

    fn split_once(&self, cards: &[&WordCard]) -> Option<Vec<String>> {
        (1..cards.len().saturating_sub(1))
            .filter(|&i| cards[i].has_category(Category::Conjunction))
            .find_map(|i| {
                let left = self.direct_match(&cards[..i])?;
                let right = self.direct_match(&cards[i + 1..])?;
                Some(vec![left.to_string(), right.to_string()])
            })
    }

    /// Clauses covering `cards[start..]` with at least one conjunction cut
    /// when `start == 0`. Memoised on `start`; the end is always the run end.
    fn split_suffix(
        &self,
        cards: &[&WordCard],
        start: usize,
        memo: &mut FxHashMap<usize, Option<Vec<String>>>,
    ) -> Option<Vec<String>> {
        if let Some(hit) = memo.get(&start) {
            return hit.clone();
        }

        let mut found = None;
        // The whole run was already tried directly by the caller.
        if start > 0 {
            found = self.direct_match(&cards[start..]).map(|name| vec![name.to_string()]);
        }

        if found.is_none() {
            for i in (start + 1)..cards.len().saturating_sub(1) {
                if !cards[i].has_category(Category::Conjunction) {
                    continue;
                }
                let Some(left) = self.direct_match(&cards[start..i]) else {
                    continue;
                };
                if let Some(rest) = self.split_suffix(cards, i + 1, memo) {
                    let mut clauses = Vec::with_capacity(rest.len() + 1);
                    clauses.push(left.to_string());
                    clauses.extend(rest);
                    found = Some(clauses);
                    break;
                }
            }
        }

        memo.insert(start, found.clone());
        found
    }
}

impl Default for SequenceClassifier {
    fn default() -> Self {
        Self::new(PatternTable::standard(), &BoardConfig::default())
    }
}

impl RunClassifier for SequenceClassifier {
    fn classify(&self, cards: &[&WordCard]) -> Classification {
        if let Some(name) = self.direct_match(cards) {
            return Classification::Sentence {
                clauses: vec![name.to_string()],
            };
        }
        if let Some(clauses) = self.split_match(cards) {
            return Classification::Sentence { clauses };
        }
        if let Some(letter) = self.letter_group(cards) {
            return Classification::LetterGroup { letter };
        }
        Classification::Unclassified
    }
}
