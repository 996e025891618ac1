//! Grammatical categories carried by word cards.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Part-of-speech tag.
///
/// `Unknown` is what a card reports when it has no category at all; it
/// never appears in a pattern structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Article,
    Preposition,
    Conjunction,
    Unknown,
}

impl Category {
    /// The eight concrete categories, in display order.
    pub const ALL: [Category; 8] = [
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Adverb,
        Category::Pronoun,
        Category::Article,
        Category::Preposition,
        Category::Conjunction,
    ];

    /// Category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Noun => "Noun",
            Category::Verb => "Verb",
            Category::Adjective => "Adjective",
            Category::Adverb => "Adverb",
            Category::Pronoun => "Pronoun",
            Category::Article => "Article",
            Category::Preposition => "Preposition",
            Category::Conjunction => "Conjunction",
            Category::Unknown => "Unknown",
        }
    }

    /// Whether this names a real part of speech.
    #[must_use]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Category::Unknown)
    }

    /// First letter of the name, used in the compact board rendering.
    #[must_use]
    pub fn initial(self) -> char {
        self.name().chars().next().unwrap_or('U')
    }

    /// Style class used by renderers to colour a card.
    #[must_use]
    pub const fn color_class(self) -> &'static str {
        match self {
            Category::Noun => "noun-gradient",
            Category::Verb => "verb-gradient",
            Category::Adjective => "adjective-gradient",
            Category::Adverb => "adverb-gradient",
            Category::Pronoun => "pronoun-gradient",
            Category::Article => "article-gradient",
            Category::Preposition => "preposition-gradient",
            Category::Conjunction => "conjunction-gradient",
            Category::Unknown => "default-gradient",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error parsing a category name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category name: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .chain(std::iter::once(Category::Unknown))
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete() {
        assert!(Category::ALL.iter().all(|c| c.is_concrete()));
        assert!(!Category::Unknown.is_concrete());
    }

    #[test]
    fn test_initials() {
        assert_eq!(Category::Noun.initial(), 'N');
        assert_eq!(Category::Adverb.initial(), 'A');
        assert_eq!(Category::Pronoun.initial(), 'P');
    }

    #[test]
    fn test_parse_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
        assert_eq!("verb".parse::<Category>(), Ok(Category::Verb));
        assert!("Interjection".parse::<Category>().is_err());
    }

    #[test]
    fn test_color_classes() {
        assert_eq!(Category::Conjunction.color_class(), "conjunction-gradient");
        assert_eq!(Category::Unknown.color_class(), "default-gradient");
    }
}
