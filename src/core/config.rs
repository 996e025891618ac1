//! Configuration types.
//!
//! - `BoardConfig`: grid dimensions and classification policy
//! - `GameConfig`: board plus seat count and starting hand size
//!
//! Configs are built once at startup and never mutated while a game runs.

use serde::{Deserialize, Serialize};

/// Default grid height.
pub const DEFAULT_ROWS: usize = 5;

/// Default grid width.
pub const DEFAULT_COLS: usize = 8;

/// Default minimum length of a same-first-letter group.
pub const DEFAULT_LETTER_GROUP_MIN_LEN: usize = 3;

/// Which of a card's categories take part in pattern matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryPolicy {
    /// Only the primary (first) category of each card.
    #[default]
    Primary,
    /// Primary first; a structure also matches if every position names a
    /// category the card carries. Equivalent to trying every combination
    /// of secondary categories.
    AnyCategory,
}

/// How far conjunction splitting goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitPolicy {
    /// One conjunction cuts the run into exactly two clauses, each checked
    /// by direct match only.
    #[default]
    SingleLevel,
    /// Any number of conjunction cuts; every clause must match directly.
    Recursive,
}

/// Board and classifier configuration.
///
/// ```
/// use word_grid::core::{BoardConfig, SplitPolicy};
///
/// let config = BoardConfig::new(3, 6)
///     .with_letter_group_min_len(4)
///     .with_split_policy(SplitPolicy::Recursive);
///
/// assert_eq!(config.cell_count(), 18);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows.
    pub rows: usize,

    /// Number of columns.
    pub cols: usize,

    /// Shortest run accepted as a same-first-letter group.
    pub letter_group_min_len: usize,

    /// Category matching policy.
    pub category_policy: CategoryPolicy,

    /// Conjunction split depth.
    pub split_policy: SplitPolicy,
}

impl BoardConfig {
    /// Create a config for a `rows` x `cols` grid with default policies.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0, "Board must have at least 1 row");
        assert!(cols > 0, "Board must have at least 1 column");

        Self {
            rows,
            cols,
            letter_group_min_len: DEFAULT_LETTER_GROUP_MIN_LEN,
            category_policy: CategoryPolicy::default(),
            split_policy: SplitPolicy::default(),
        }
    }

    /// Set the minimum letter group length.
    #[must_use]
    pub fn with_letter_group_min_len(mut self, len: usize) -> Self {
        assert!(len > 0, "Letter group minimum must be at least 1");
        self.letter_group_min_len = len;
        self
    }

    /// Set the category matching policy.
    #[must_use]
    pub fn with_category_policy(mut self, policy: CategoryPolicy) -> Self {
        self.category_policy = policy;
        self
    }

    /// Set the conjunction split policy.
    #[must_use]
    pub fn with_split_policy(mut self, policy: SplitPolicy) -> Self {
        self.split_policy = policy;
        self
    }

    /// Total number of grid positions.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// Complete game configuration for the turn reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board and classifier settings.
    pub board: BoardConfig,

    /// Number of seats.
    pub player_count: usize,

    /// Cards dealt to each player at the start.
    pub hand_size: usize,
}

impl GameConfig {
    /// Create a two-player configuration around `board`.
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            player_count: 2,
            hand_size: 14,
        }
    }

    /// Set the number of seats.
    #[must_use]
    pub fn with_player_count(mut self, player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "Cannot have more than 255 players");
        self.player_count = player_count;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_config_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.rows, 5);
        assert_eq!(config.cols, 8);
        assert_eq!(config.letter_group_min_len, 3);
        assert_eq!(config.category_policy, CategoryPolicy::Primary);
        assert_eq!(config.split_policy, SplitPolicy::SingleLevel);
        assert_eq!(config.cell_count(), 40);
    }

    #[test]
    fn test_board_config_builder() {
        let config = BoardConfig::new(2, 4)
            .with_letter_group_min_len(2)
            .with_category_policy(CategoryPolicy::AnyCategory)
            .with_split_policy(SplitPolicy::Recursive);

        assert_eq!(config.rows, 2);
        assert_eq!(config.letter_group_min_len, 2);
        assert_eq!(config.category_policy, CategoryPolicy::AnyCategory);
        assert_eq!(config.split_policy, SplitPolicy::Recursive);
    }

    #[test]
    #[should_panic(expected = "at least 1 row")]
    fn test_zero_rows_panics() {
        let _ = BoardConfig::new(0, 8);
    }

    #[test]
    #[should_panic(expected = "Letter group minimum")]
    fn test_zero_letter_group_panics() {
        let _ = BoardConfig::default().with_letter_group_min_len(0);
    }

    #[test]
    fn test_game_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.hand_size, 14);
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_game_config_player_count() {
        let config = GameConfig::default().with_player_count(4);
        assert_eq!(config.player_count, 4);
    }

    #[test]
    #[should_panic(expected = "at least 1 player")]
    fn test_zero_players_panics() {
        let _ = GameConfig::default().with_player_count(0);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::default().with_hand_size(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
