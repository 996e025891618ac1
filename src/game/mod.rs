//! Turn reducer for the two-player game.
//!
//! `GameState::apply` takes one `GameAction` at a time and either accepts it
//! or returns a `GameError` leaving the state untouched. Validation is
//! delegated to a `BoardValidator`; the reducer only stores what it reports
//! so a front end can highlight the offending runs.

pub mod action;
pub mod state;

pub use action::{ActionOutcome, CardSource, GameAction};
pub use state::GameState;
