//! Edit-mode board: multi-color painting and resizing.

use pixelace_core::{Color, Grid, Position};

use crate::{DragState, PointerButtons};

/// Smallest editable side length.
pub const MIN_SIDE: usize = 5;

/// Largest editable side length.
pub const MAX_SIDE: usize = 16;

/// A puzzle editor session.
///
/// The editor paints target colors directly: a cell's color *is* the edit,
/// with no separate selection flag and no completion lock. Painting uses
/// the same drag gesture semantics as play mode, with the fill payload
/// being the brush color, or `None` to erase.
///
/// The finished grid is handed back to the host via [`rows`] or
/// [`into_rows`] to become a new puzzle's target solution.
///
/// [`rows`]: Editor::rows
/// [`into_rows`]: Editor::into_rows
///
/// # Examples
///
/// ```
/// use pixelace_core::{Color, Position};
/// use pixelace_game::{Editor, PointerButtons};
///
/// let brush = Color::new(0x32, 0xcd, 0x32);
/// let mut editor = Editor::new(5, 5);
///
/// // Paint a stroke across the top row.
/// editor.pointer_down(Position::new(0, 0), PointerButtons::PRIMARY, brush);
/// editor.pointer_enter(Position::new(1, 0), PointerButtons::PRIMARY);
/// editor.pointer_up();
///
/// assert_eq!(editor.color(Position::new(1, 0)), Some(brush));
/// assert_eq!(editor.color(Position::new(2, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    grid: Grid<Option<Color>>,
    drag: DragState<Option<Color>>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(MIN_SIDE, MIN_SIDE)
    }
}

impl Editor {
    /// Creates a blank editor of the given dimensions.
    ///
    /// Each axis is clamped to [`MIN_SIDE`]`..=`[`MAX_SIDE`].
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(clamp_side(width), clamp_side(height)),
            drag: DragState::Idle,
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the painted color at `pos`.
    ///
    /// `None` for blank cells and for out-of-bounds positions alike.
    #[must_use]
    pub fn color(&self, pos: Position) -> Option<Color> {
        self.grid.get(pos).copied().flatten()
    }

    /// Read-only view of the painted grid, for rendering.
    #[must_use]
    pub fn cells(&self) -> &Grid<Option<Color>> {
        &self.grid
    }

    /// Paints or erases one cell. Out-of-bounds positions are ignored.
    pub fn set_color(&mut self, pos: Position, color: Option<Color>) {
        self.grid.set(pos, color);
    }

    /// Handles a pointer press with the active brush color.
    ///
    /// Pressing a blank cell paints it — and every cell the drag then
    /// enters — with `brush`; pressing a painted cell erases instead,
    /// whatever its color. Non-primary presses and presses outside the
    /// grid are ignored and open no gesture.
    pub fn pointer_down(&mut self, pos: Position, buttons: PointerButtons, brush: Color) {
        let Some(cell) = self.grid.get(pos) else {
            return;
        };
        let fill = if cell.is_none() { Some(brush) } else { None };
        if let Some(fill) = self.drag.press(buttons, fill) {
            self.set_color(pos, fill);
        }
    }

    /// Handles the pointer entering a cell.
    ///
    /// Same contract as play mode: the gesture's fill applies only while
    /// the primary button remains held, and an enter with no gesture open
    /// is ignored.
    pub fn pointer_enter(&mut self, pos: Position, buttons: PointerButtons) {
        if let Some(fill) = self.drag.entered(buttons) {
            self.set_color(pos, fill);
        }
    }

    /// Handles the pointer release that ends a drag gesture.
    pub fn pointer_up(&mut self) {
        self.drag.release();
    }

    /// Resizes the canvas, clamping each axis to the editable bounds.
    ///
    /// Cells whose coordinates exist at both sizes keep their paint; added
    /// cells are blank; shrinking discards out-of-range cells. Repeating
    /// the same resize leaves the grid untouched.
    pub fn resize(&mut self, width: usize, height: usize) {
        let (width, height) = (clamp_side(width), clamp_side(height));
        if (width, height) != (self.grid.width(), self.grid.height()) {
            self.grid = self.grid.resized(width, height);
        }
    }

    /// Clears every cell, keeping the current dimensions.
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.grid.width(), self.grid.height());
    }

    /// Snapshot of the painted rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Option<Color>>> {
        self.grid.clone().into_rows()
    }

    /// Consumes the editor into its painted rows, for the host to persist.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<Option<Color>>> {
        self.grid.into_rows()
    }
}

fn clamp_side(side: usize) -> usize {
    side.clamp(MIN_SIDE, MAX_SIDE)
}
