//! The game board and its derived views.
//!
//! ## Key Types
//!
//! - `Board`: Fixed grid of optional `GridCell`s
//! - `GridCell`: A placed card plus placement metadata
//! - `RunSpan`: Bounds of a maximal horizontal run of cards
//! - `AnnotatedBoard`: Per-position validation states

pub mod annotation;
pub mod cell;
pub mod grid;
pub mod run;

pub use annotation::AnnotatedBoard;
pub use cell::{GridCell, ValidationState};
pub use grid::Board;
pub use run::{segment_row, RowRuns, RunSpan};
