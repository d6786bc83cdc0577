//! Core data structures for nonogram (picross) puzzles.
//!
//! This crate provides the pure data model shared by the interactive play
//! and editor components:
//!
//! - [`color`]: paint colors for puzzle cells, in CSS `#rrggbb` notation
//! - [`position`]: zero-based `(x, y)` cell coordinates
//! - [`grid`]: a generic rectangular cell grid with tolerant bounds handling
//! - [`clue`]: run-length clue derivation for rows and columns
//!
//! Session state (player selections, completion, drag gestures) lives in the
//! `pixelace-game` crate; this crate has no notion of a game in progress.
//!
//! # Examples
//!
//! ```
//! use pixelace_core::{ClueSet, Color, Grid};
//!
//! let c: Color = "#1e90ff".parse().unwrap();
//! let solution = Grid::from_rows(vec![
//!     vec![Some(c), None, Some(c)],
//!     vec![None, Some(c), None],
//! ])
//! .unwrap();
//!
//! let clues = ClueSet::derive(&solution, |cell| cell.is_some());
//! assert_eq!(clues.rows()[0].runs(), [1, 1]);
//! assert_eq!(clues.columns()[1].runs(), [1]);
//! ```

pub mod clue;
pub mod color;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    clue::{ClueSet, LineClue},
    color::{Color, ParseColorError},
    grid::{Grid, RaggedRowsError},
    position::Position,
};
