//! Core types: players, RNG, configuration, errors.
//!
//! These are shared by the validator and the turn reducer.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{BoardConfig, CategoryPolicy, GameConfig, SplitPolicy};
pub use error::{GameError, Result, ValidationError};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
