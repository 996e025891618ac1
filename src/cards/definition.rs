//! Word cards - immutable vocabulary entries.
//!
//! A `WordCard` is owned by exactly one container at a time (deck, hand,
//! or a board cell) and never changes once created. Placement data lives
//! on `GridCell`, not here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::category::Category;

/// Unique identifier for a word card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category set of a card. Almost every word has one or two.
pub type Categories = SmallVec<[Category; 2]>;

/// A word card.
///
/// The first category is the primary one, used for colouring and (under
/// the default policy) for pattern matching.
///
/// ## Example
///
/// ```
/// use word_grid::cards::{Category, WordCard};
///
/// let dogs = WordCard::new("w1", "Dogs", [Category::Noun]);
/// assert_eq!(dogs.primary_category(), Category::Noun);
/// assert_eq!(dogs.first_letter(), Some('d'));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCard {
    /// Unique identifier.
    pub id: CardId,

    /// Display text.
    pub text: String,

    /// Categories, primary first.
    pub categories: Categories,
}

impl WordCard {
    /// Create a new card.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            id: CardId::new(id),
            text: text.into(),
            categories: categories.into_iter().collect(),
        }
    }

    /// Primary category, or `Unknown` for a card without categories.
    #[must_use]
    pub fn primary_category(&self) -> Category {
        self.categories.first().copied().unwrap_or(Category::Unknown)
    }

    /// Whether the card carries `category` anywhere in its set.
    #[must_use]
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Lowercased first character of the text.
    #[must_use]
    pub fn first_letter(&self) -> Option<char> {
        self.text.chars().next().and_then(|c| c.to_lowercase().next())
    }
}

impl std::fmt::Display for WordCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
