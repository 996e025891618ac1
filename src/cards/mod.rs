//! Word cards: categories, cards, and the vocabulary registry.
//!
//! ## Key Types
//!
//! - `Category`: Part-of-speech tag
//! - `CardId`: Unique card identifier
//! - `WordCard`: Immutable card (text + ordered category set)
//! - `CardRegistry`: Vocabulary lookup, including the stock deck

pub mod category;
pub mod definition;
pub mod registry;
pub mod vocabulary;

pub use category::{Category, ParseCategoryError};
pub use definition::{CardId, Categories, WordCard};
pub use registry::CardRegistry;
pub use vocabulary::standard_deck;
