//! The stock vocabulary of the game.
//!
//! Words that belong to several parts of speech ("Clean", "Fast", "Near")
//! appear once per category, each as its own card.

use super::category::Category;
use super::definition::WordCard;

const NOUNS: &[&str] = &[
    "Apple", "Ant", "Art", "Actor", "Ball", "Book", "Bear", "Boat", "Box", "Bread", "Cat",
    "Car", "Cake", "Cloud", "Chair", "City", "Dog", "Door", "Dream", "Desk", "Day", "Duck",
    "Egg", "Earth", "Elephant", "Eye", "Fish", "Flower", "Friend", "Fire", "Forest", "Farm",
    "Game", "Goat", "Glass", "Garden", "Ghost", "Gift", "House", "Hat", "Hand", "Heart",
    "Horse", "Hill", "Idea", "Ink", "Island", "Iron", "Jam", "Jewel", "Job", "Joke", "Key",
    "King", "Kite", "Kitchen", "Lamp", "Leaf", "Lion", "Lake", "Man", "Moon", "Mouse", "Map",
    "Music", "Mountain", "Nest", "Night", "Nose", "Note", "Orange", "Owl", "Ocean", "Oil",
    "Park", "Pen", "Pig", "Pizza", "Plant", "Path", "Queen", "Quiet", "Quilt", "Quest", "Rain",
    "Ring", "Road", "Rock", "Sun", "Star", "Ship", "Shoe", "School", "Song", "Table", "Tree",
    "Train", "Time", "Tiger", "Town", "Umbrella", "Uncle", "Van", "Vase", "Violin", "Village",
    "Water", "Wind", "Wolf", "Woman", "World", "Window", "Xylophone", "Yarn", "Yak", "Yard",
    "Yacht", "Zebra", "Zoo", "Zone", "Zero",
];

const VERBS: &[&str] = &[
    "Ask", "Act", "Add", "Arrive", "Bring", "Build", "Buy", "Begin", "Bake", "Call", "Come",
    "Cook", "Clean", "Climb", "Do", "Drink", "Drive", "Draw", "Dance", "Eat", "End", "Enjoy",
    "Enter", "Explain", "Fly", "Find", "Feel", "Fight", "Follow", "Go", "Get", "Give", "Grow",
    "Guess", "Have", "Help", "Hold", "Hear", "Hope", "Is", "Imagine", "Invite", "Inform",
    "Jump", "Join", "Joke", "Judge", "Keep", "Know", "Kick", "Kiss", "Like", "Look", "Learn",
    "Listen", "Live", "Make", "Move", "Meet", "Mean", "Need", "Notice", "Name", "Open", "Order",
    "Offer", "Own", "Play", "Put", "Pass", "Pay", "Paint", "Quit", "Question", "Run", "Read",
    "Ride", "Reply", "Rest", "See", "Say", "Sing", "Sleep", "Start", "Swim", "Take", "Talk",
    "Teach", "Tell", "Think", "Travel", "Use", "Understand", "Visit", "Vote", "Wait", "Walk",
    "Want", "Watch", "Work", "Write", "Yell", "Yield", "Zip", "Zoom",
];

const ADJECTIVES: &[&str] = &[
    "Angry", "Able", "Awful", "Big", "Blue", "Bad", "Best", "Busy", "Brave", "Bright", "Cold",
    "Clean", "Clear", "Cute", "Calm", "Cool", "Dark", "Dry", "Deep", "Dead", "Easy", "Empty",
    "Early", "Evil", "Fast", "Full", "Free", "Fresh", "Fine", "Fair", "Good", "Great", "Green",
    "Gentle", "Glad", "Giant", "Happy", "Hard", "High", "Hot", "Heavy", "Huge", "Kind", "Keen",
    "Large", "Little", "Long", "Loud", "Low", "Lovely", "Mad", "Main", "Mean", "Merry", "New",
    "Nice", "Near", "Noisy", "Old", "Open", "Orange", "Other", "Poor", "Pretty", "Proud",
    "Pure", "Quick", "Quiet", "Red", "Rich", "Right", "Rough", "Round", "Real", "Small", "Sad",
    "Slow", "Soft", "Strong", "Sweet", "Sour", "Tall", "Thin", "True", "Tiny", "Tired", "Thick",
    "Ugly", "Unusual", "Vast", "Violet", "Warm", "Wet", "White", "Wide", "Wild", "Wise",
    "Wrong", "Young", "Yellow", "Yummy", "Zany",
];

const ADVERBS: &[&str] = &[
    "Always", "Almost", "Again", "Also", "Badly", "Barely", "Carefully", "Clearly", "Daily",
    "Deeply", "Early", "Easily", "Enough", "Even", "Fast", "Finally", "Freely", "Fully",
    "Gently", "Gladly", "Hard", "Here", "Highly", "However", "Inside", "Instead", "Just",
    "Kindly", "Late", "Later", "Loudly", "Low", "Maybe", "More", "Much", "Madly", "Near",
    "Nearly", "Never", "Next", "Now", "Nicely", "Often", "Once", "Only", "Outside", "Over",
    "Openly", "Politely", "Poorly", "Quickly", "Quietly", "Quite", "Rarely", "Really", "Right",
    "Roughly", "Sadly", "Seldom", "Slowly", "So", "Soon", "Still", "Surely", "Silently", "Then",
    "There", "Today", "Too", "Truly", "Thus", "Under", "Usually", "Very", "Well", "When",
    "Where", "Why", "Wisely", "Warmly", "Yesterday", "Yet", "Zestily",
];

const PRONOUNS: &[&str] = &[
    "I", "You", "He", "She", "It", "We", "They", "Me", "Him", "Her", "Us", "Them", "My", "Your",
    "His", "Its", "Our", "Their", "This", "That", "These", "Those", "Who", "What",
];

const ARTICLES: &[&str] = &[
    "A", "An", "The",
];

const PREPOSITIONS: &[&str] = &[
    "In", "On", "At", "With", "By", "For", "From", "To", "Up", "Down", "Over", "Under", "Near",
    "About", "Above", "After", "Along", "Around", "Before", "Behind", "Below", "Beside",
    "Between", "During", "Inside", "Into", "Onto", "Out", "Past", "Since", "Through", "Toward",
    "Until", "Upon",
];

const CONJUNCTIONS: &[&str] = &[
    "And", "But", "Or", "So", "For", "Nor", "Yet", "After", "Although", "As", "Because",
    "Before", "If", "Once", "Since", "Than", "That", "Though", "Unless", "Until", "When",
    "Where", "While",
];

/// Word lists in deck order, one per concrete category.
pub const STANDARD_WORDS: [(Category, &[&str]); 8] = [
    (Category::Noun, NOUNS),
    (Category::Verb, VERBS),
    (Category::Adjective, ADJECTIVES),
    (Category::Adverb, ADVERBS),
    (Category::Pronoun, PRONOUNS),
    (Category::Article, ARTICLES),
    (Category::Preposition, PREPOSITIONS),
    (Category::Conjunction, CONJUNCTIONS),
];

/// Build the stock deck, unshuffled.
///
/// Card IDs are `<category>-<n>` with `n` counting within the category,
/// so they are stable across runs.
#[must_use]
pub fn standard_deck() -> Vec<WordCard> {
    STANDARD_WORDS
        .iter()
        .flat_map(|&(category, words)| {
            let prefix = category.name().to_ascii_lowercase();
            words
                .iter()
                .enumerate()
                .map(move |(i, &text)| WordCard::new(format!("{prefix}-{i}"), text, [category]))
        })
        .collect()
}
