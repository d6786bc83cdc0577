//! Game session state for nonogram (picross) puzzles.
//!
//! Two session types build on the `pixelace-core` data model:
//!
//! - [`Board`]: play mode — the player selects cells to match the target
//!   clues; the board tracks per-line fulfillment and locks once solved.
//! - [`Editor`]: edit mode — the user paints a multi-color grid that
//!   becomes a new puzzle's target solution.
//!
//! Both share the pointer-drag gesture machinery in [`drag`]: a press
//! opens a gesture whose effect (paint or erase) is decided once by the
//! first cell and applied consistently to every cell the drag touches.
//!
//! # Examples
//!
//! ```
//! use pixelace_core::{Color, Grid, Position};
//! use pixelace_game::{Board, PointerButtons};
//!
//! let c = Color::new(0xff, 0x45, 0x00);
//! let solution = Grid::from_rows(vec![vec![Some(c), None]]).unwrap();
//! let mut board = Board::new(solution);
//! assert_eq!(board.clues().rows()[0].runs(), [1]);
//!
//! board.pointer_down(Position::new(0, 0), PointerButtons::PRIMARY);
//! board.pointer_up();
//! assert!(board.is_completed());
//! ```

pub mod board;
pub mod drag;
pub mod editor;

// Re-export commonly used types
pub use self::{
    board::{Board, Cell, Fulfillment},
    drag::{DragState, PointerButtons},
    editor::{Editor, MAX_SIDE, MIN_SIDE},
};
