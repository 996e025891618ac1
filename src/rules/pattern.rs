//! Sentence patterns and the pattern table.
//!
//! A pattern is a name plus one or more structures. A structure is a
//! fixed-length category sequence; it matches a run of the same length
//! when every position names the card's category exactly. There is no
//! wildcard: `Unknown` may not appear in a structure.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Category, WordCard};
use crate::core::CategoryPolicy;

/// One acceptable category sequence.
pub type Structure = SmallVec<[Category; 6]>;

/// A named sentence pattern.
///
/// ```
/// use word_grid::cards::Category::*;
/// use word_grid::rules::SentencePattern;
///
/// let pattern = SentencePattern::new("Subject-Verb")
///     .with_structure([Noun, Verb])
///     .with_structure([Pronoun, Verb]);
/// assert_eq!(pattern.structures.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentencePattern {
    /// Diagnostic name; never matched on.
    pub name: String,

    /// Alternative phrasings.
    pub structures: Vec<Structure>,
}

impl SentencePattern {
    /// Create a pattern with no structures yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            structures: Vec::new(),
        }
    }

    /// Pattern with a single structure, named after its categories
    /// (`Article-Noun-Verb`).
    #[must_use]
    pub fn from_structure(categories: &[Category]) -> Self {
        let name = categories
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join("-");
        Self::new(name).with_structure(categories.iter().copied())
    }

    /// Add a structure (builder pattern).
    ///
    /// Panics if the structure is empty or names `Unknown`.
    #[must_use]
    pub fn with_structure(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        let structure: Structure = categories.into_iter().collect();
        assert!(!structure.is_empty(), "Pattern {} has an empty structure", self.name);
        assert!(
            structure.iter().all(|c| c.is_concrete()),
            "Pattern {} names a non-concrete category",
            self.name
        );
        self.structures.push(structure);
        self
    }
}

/// Whether `structure` matches `cards` position by position.
#[must_use]
pub fn structure_matches(structure: &[Category], cards: &[&WordCard], policy: CategoryPolicy) -> bool {
    structure.len() == cards.len()
        && structure.iter().zip(cards).all(|(&want, card)| match policy {
            CategoryPolicy::Primary => card.primary_category() == want,
            CategoryPolicy::AnyCategory => card.has_category(want),
        })
}

/// Ordered, read-only collection of sentence patterns.
///
/// Structures are indexed by length so a lookup only compares against
/// candidates that could possibly match.
#[derive(Clone, Debug, Default)]
pub struct PatternTable {
    patterns: Vec<SentencePattern>,
    by_len: FxHashMap<usize, Vec<(usize, usize)>>,
}

impl PatternTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pattern (builder pattern). See `add`.
    #[must_use]
    pub fn with_pattern(mut self, pattern: SentencePattern) -> Self {
        self.add(pattern);
        self
    }

    /// Add a pattern.
    ///
    /// A pattern whose name is already present is merged into the existing
    /// entry; structures it already has are skipped.
    ///
    /// Panics if the pattern has no structures.
    pub fn add(&mut self, pattern: SentencePattern) {
        assert!(
            !pattern.structures.is_empty(),
            "Pattern {} must have at least one structure",
            pattern.name
        );

        let p = match self.patterns.iter().position(|e| e.name == pattern.name) {
            Some(p) => p,
            None => {
                self.patterns.push(SentencePattern::new(pattern.name));
                self.patterns.len() - 1
            }
        };

        for structure in pattern.structures {
            if self.patterns[p].structures.contains(&structure) {
                continue;
            }
            let s = self.patterns[p].structures.len();
            self.by_len.entry(structure.len()).or_default().push((p, s));
            self.patterns[p].structures.push(structure);
        }
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate over patterns in table order.
    pub fn iter(&self) -> impl Iterator<Item = &SentencePattern> {
        self.patterns.iter()
    }

    /// Look up a pattern by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SentencePattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    /// First pattern (in table order) with a structure matching `cards`.
    ///
    /// Under `AnyCategory` the primary categories are tried across the
    /// whole table before falling back to secondary ones.
    #[must_use]
    pub fn find_match(&self, cards: &[&WordCard], policy: CategoryPolicy) -> Option<&SentencePattern> {
        let candidates = self.by_len.get(&cards.len())?;

        let lookup = |policy| {
            candidates
                .iter()
                .find(|&&(p, s)| structure_matches(&self.patterns[p].structures[s], cards, policy))
                .map(|&(p, _)| &self.patterns[p])
        };

        match policy {
            CategoryPolicy::Primary => lookup(CategoryPolicy::Primary),
            CategoryPolicy::AnyCategory => {
                lookup(CategoryPolicy::Primary).or_else(|| lookup(CategoryPolicy::AnyCategory))
            }
        }
    }

    /// The game's stock patterns, in table order.
    ///
    /// Repeated names (`Noun-Verb`, `Pronoun-Verb`) merge into their first
    /// entry. `Noun-Is-Adjective` and `Noun-Is-Noun` share structures with
    /// earlier patterns, so lookups report the earlier name.
    #[must_use]
    pub fn standard() -> Self {
        use Category::*;

        let entries: &[(&str, &[Category])] = &[
            // Basic
            ("Pronoun-Verb", &[Pronoun, Verb]),
            ("Article-Noun-Verb", &[Article, Noun, Verb]),
            ("Noun-Verb", &[Noun, Verb]),
            // With adjectives
            ("Pronoun-Verb-Adjective", &[Pronoun, Verb, Adjective]),
            ("Article-Adjective-Noun", &[Article, Adjective, Noun]),
            ("Noun-Verb-Adjective", &[Noun, Verb, Adjective]),
            ("Article-Noun-Verb-Adjective", &[Article, Noun, Verb, Adjective]),
            // With adverbs
            ("Pronoun-Verb-Adverb", &[Pronoun, Verb, Adverb]),
            ("Noun-Verb-Adverb", &[Noun, Verb, Adverb]),
            ("Article-Noun-Verb-Adverb", &[Article, Noun, Verb, Adverb]),
            ("Pronoun-Adverb-Verb", &[Pronoun, Adverb, Verb]),
            ("Noun-Adverb-Verb", &[Noun, Adverb, Verb]),
            // With noun objects
            ("Pronoun-Verb-Noun", &[Pronoun, Verb, Noun]),
            ("Article-Noun-Verb-Noun", &[Article, Noun, Verb, Noun]),
            ("Noun-Verb-Noun", &[Noun, Verb, Noun]),
            ("Pronoun-Verb-Article-Noun", &[Pronoun, Verb, Article, Noun]),
            ("Noun-Verb-Article-Noun", &[Noun, Verb, Article, Noun]),
            // With prepositions
            ("Pronoun-Verb-Preposition-Article-Noun", &[Pronoun, Verb, Preposition, Article, Noun]),
            ("Noun-Verb-Preposition-Noun", &[Noun, Verb, Preposition, Noun]),
            (
                "Article-Noun-Verb-Preposition-Article-Noun",
                &[Article, Noun, Verb, Preposition, Article, Noun],
            ),
            // Longer
            ("Article-Adjective-Noun-Verb-Adverb", &[Article, Adjective, Noun, Verb, Adverb]),
            ("Pronoun-Verb-Adjective-Noun", &[Pronoun, Verb, Adjective, Noun]),
            ("Article-Noun-Verb-Adjective-Noun", &[Article, Noun, Verb, Adjective, Noun]),
            // Imperatives
            ("Verb-Noun", &[Verb, Noun]),
            ("Verb-Pronoun", &[Verb, Pronoun]),
            ("Verb-Adverb", &[Verb, Adverb]),
            // Two-word sentences, repeated
            ("Noun-Verb", &[Noun, Verb]),
            ("Pronoun-Verb", &[Pronoun, Verb]),
            // Conjunctions spelled out
            ("Noun-Verb-Conjunction-Noun-Verb", &[Noun, Verb, Conjunction, Noun, Verb]),
            (
                "Pronoun-Verb-Conjunction-Pronoun-Verb",
                &[Pronoun, Verb, Conjunction, Pronoun, Verb],
            ),
            // More variety
            ("Adjective-Noun-Verb", &[Adjective, Noun, Verb]),
            ("Adverb-Adjective-Noun", &[Adverb, Adjective, Noun]),
            ("Noun-Is-Adjective", &[Noun, Verb, Adjective]),
            ("Noun-Is-Noun", &[Noun, Verb, Noun]),
        ];

        entries.iter().fold(Self::new(), |table, &(name, structure)| {
            table.with_pattern(SentencePattern::new(name).with_structure(structure.iter().copied()))
        })
    }
}
