//! Card registry for vocabulary lookup.
//!
//! The `CardRegistry` stores every word card available to a game, keeps
//! registration order (which becomes the unshuffled deck order) and offers
//! fast lookup by `CardId`.

use rustc_hash::FxHashMap;

use super::category::Category;
use super::definition::{CardId, WordCard};
use super::vocabulary::standard_deck;

/// Registry of word cards.
///
/// ## Example
///
/// ```
/// use word_grid::cards::{CardId, CardRegistry, Category, WordCard};
///
/// let mut registry = CardRegistry::new();
/// registry.register(WordCard::new("w1", "Dogs", [Category::Noun]));
///
/// let found = registry.get(&CardId::new("w1")).unwrap();
/// assert_eq!(found.text, "Dogs");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<WordCard>,
    index: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the stock vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for card in standard_deck() {
            registry.register(card);
        }
        registry
    }

    /// Register a card.
    ///
    /// Panics if a card with the same ID already exists or the card has
    /// no categories.
    pub fn register(&mut self, card: WordCard) {
        if self.index.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        assert!(
            !card.categories.is_empty(),
            "Card {} must have at least one category",
            card.id
        );
        self.index.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&WordCard> {
        self.index.get(id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCard> {
        self.cards.iter()
    }

    /// Find cards carrying `category` (in any position).
    pub fn find_by_category(&self, category: Category) -> impl Iterator<Item = &WordCard> {
        self.cards.iter().filter(move |c| c.has_category(category))
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &WordCard>
    where
        F: Fn(&WordCard) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        registry.register(WordCard::new("1", "Cat", [Category::Noun]));

        let found = registry.get(&CardId::new("1"));
        assert_eq!(found.map(|c| c.text.as_str()), Some("Cat"));
        assert!(registry.get(&CardId::new("99")).is_none());
        assert!(registry.contains(&CardId::new("1")));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut registry = CardRegistry::new();
        registry.register(WordCard::new("1", "Cat", [Category::Noun]));
        registry.register(WordCard::new("1", "Dog", [Category::Noun]));
    }

    #[test]
    #[should_panic(expected = "at least one category")]
    fn test_uncategorised_card_panics() {
        let mut registry = CardRegistry::new();
        registry.register(WordCard::new("1", "Blank", []));
    }

    #[test]
    fn test_iteration_keeps_registration_order() {
        let mut registry = CardRegistry::new();
        registry.register(WordCard::new("b", "Bark", [Category::Verb]));
        registry.register(WordCard::new("a", "And", [Category::Conjunction]));

        let texts: Vec<_> = registry.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["Bark", "And"]);
    }

    #[test]
    fn test_find_by_category() {
        let mut registry = CardRegistry::new();
        registry.register(WordCard::new("1", "Name", [Category::Verb, Category::Noun]));
        registry.register(WordCard::new("2", "Cat", [Category::Noun]));
        registry.register(WordCard::new("3", "Run", [Category::Verb]));

        assert_eq!(registry.find_by_category(Category::Noun).count(), 2);
        assert_eq!(registry.find_by_category(Category::Adverb).count(), 0);
        assert_eq!(registry.find(|c| c.text.starts_with('C')).count(), 1);
    }

    #[test]
    fn test_standard_registry() {
        let registry = CardRegistry::standard();
        assert_eq!(registry.len(), 495);
        assert_eq!(registry.find_by_category(Category::Article).count(), 3);
        assert_eq!(registry.find_by_category(Category::Conjunction).count(), 23);
    }
}
