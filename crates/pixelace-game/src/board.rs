//! Play-mode board: selection, fulfillment, and completion.

use pixelace_core::{ClueSet, Color, Grid, Position};

use crate::{DragState, PointerButtons};

/// A single cell of a play-mode board.
///
/// `value` is the cell's ground-truth color in the target solution (absent
/// when the cell must stay empty); `selected` is the player's mutable mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    value: Option<Color>,
    selected: bool,
}

impl Cell {
    /// The cell's color in the target solution, if any.
    #[must_use]
    pub const fn value(&self) -> Option<Color> {
        self.value
    }

    /// Whether the player currently has this cell selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Per-line satisfaction of the target clues.
///
/// Recomputed after every cell mutation by re-deriving the clues of the
/// current selection and comparing them to the target clues line by line.
/// Satisfaction requires exact sequence equality; a line whose selected
/// runs merely sum to the right total is not satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fulfillment {
    rows: Vec<bool>,
    columns: Vec<bool>,
}

impl Fulfillment {
    fn check(current: &ClueSet, target: &ClueSet) -> Self {
        Self {
            rows: current
                .rows()
                .iter()
                .zip(target.rows())
                .map(|(current, target)| current == target)
                .collect(),
            columns: current
                .columns()
                .iter()
                .zip(target.columns())
                .map(|(current, target)| current == target)
                .collect(),
        }
    }

    /// Row satisfaction flags, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[bool] {
        &self.rows
    }

    /// Column satisfaction flags, left to right.
    #[must_use]
    pub fn columns(&self) -> &[bool] {
        &self.columns
    }

    /// Returns `true` when every row and every column is satisfied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.rows.iter().chain(&self.columns).all(|&line| line)
    }
}

/// A nonogram play session.
///
/// Holds the target solution, the player's selection, the target clues and
/// their per-line fulfillment, and the completion flag. Pointer events flow
/// through [`pointer_down`] / [`pointer_enter`] / [`pointer_up`]; hosts
/// that resolve gestures themselves can call [`set_selected`] directly.
///
/// Loading a new puzzle means constructing a new `Board`, which replaces
/// the cell grid, clue set, and fulfillment state together — a fulfillment
/// check never observes the clues of one puzzle against the cells of
/// another.
///
/// [`pointer_down`]: Board::pointer_down
/// [`pointer_enter`]: Board::pointer_enter
/// [`pointer_up`]: Board::pointer_up
/// [`set_selected`]: Board::set_selected
///
/// # Examples
///
/// ```
/// use pixelace_core::{Color, Grid, Position};
/// use pixelace_game::{Board, PointerButtons};
///
/// let c = Color::new(0xff, 0x45, 0x00);
/// let solution = Grid::from_rows(vec![vec![Some(c), None, Some(c)]]).unwrap();
/// let mut board = Board::new(solution);
/// assert_eq!(board.clues().rows()[0].runs(), [1, 1]);
/// assert!(!board.is_completed());
///
/// // One drag across the two target cells.
/// board.pointer_down(Position::new(0, 0), PointerButtons::PRIMARY);
/// board.pointer_enter(Position::new(2, 0), PointerButtons::PRIMARY);
/// board.pointer_up();
/// assert!(board.is_completed());
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid<Cell>,
    clues: ClueSet,
    fulfillment: Fulfillment,
    completed: bool,
    drag: DragState<bool>,
}

impl Board {
    /// Creates a play session for the given target solution.
    ///
    /// Every cell starts unselected and the board starts uncompleted.
    /// Blank target lines are satisfied by the empty selection right away;
    /// completion is only ever evaluated on mutation, so even an all-blank
    /// solution does not report completed at load.
    #[must_use]
    pub fn new(solution: Grid<Option<Color>>) -> Self {
        let clues = ClueSet::derive(&solution, Option::is_some);
        let grid = solution.map(|&value| Cell {
            value,
            selected: false,
        });
        let mut board = Self {
            grid,
            clues,
            fulfillment: Fulfillment::default(),
            completed: false,
            drag: DragState::Idle,
        };
        board.fulfillment = board.check_fulfillment();
        board
    }

    /// Creates a play session from host-supplied solution rows.
    ///
    /// Ragged input is normalized to the first row's length (missing cells
    /// blank, extra cells dropped) and reported through `log::warn!`.
    /// Hosts that would rather reject malformed data can go through
    /// [`Grid::from_rows`] and [`Board::new`] instead.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Option<Color>>>) -> Self {
        let (solution, adjusted) = Grid::from_rows_lossy(rows);
        if adjusted {
            log::warn!(
                "solution rows were not rectangular; normalized to {}x{}",
                solution.width(),
                solution.height()
            );
        }
        Self::new(solution)
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

    /// Returns the cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.grid.get(pos)
    }

    /// Read-only view of all cells, for rendering.
    #[must_use]
    pub fn cells(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// The target clues derived once from the solution.
    #[must_use]
    pub fn clues(&self) -> &ClueSet {
        &self.clues
    }

    /// Per-line fulfillment of the target clues by the current selection.
    #[must_use]
    pub fn fulfillment(&self) -> &Fulfillment {
        &self.fulfillment
    }

    /// Whether the puzzle has reached its terminal completed state.
    ///
    /// Hosts use this as the read-only signal to unlock a results view.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    fn check_fulfillment(&self) -> Fulfillment {
        let current = ClueSet::derive(&self.grid, |cell| cell.selected);
        Fulfillment::check(&current, &self.clues)
    }

    fn is_solved(&self) -> bool {
        self.grid
            .rows()
            .flatten()
            .all(|cell| cell.selected == cell.value.is_some())
    }

    /// Sets the selection state of one cell.
    ///
    /// Silently does nothing when the board is completed or `pos` is out
    /// of bounds. After a mutation the fulfillment state is recomputed,
    /// and the board is promoted to completed once the selection agrees
    /// with the solution cell for cell.
    pub fn set_selected(&mut self, pos: Position, selected: bool) {
        if self.completed {
            return;
        }
        let Some(cell) = self.grid.get_mut(pos) else {
            return;
        };
        cell.selected = selected;
        self.fulfillment = self.check_fulfillment();
        if self.is_solved() {
            self.completed = true;
        }
    }

    /// Handles a pointer press on a cell.
    ///
    /// Only the primary button opens a drag gesture. The pressed cell's
    /// current state decides the gesture's fill value: pressing an
    /// unselected cell selects it and every cell the drag then enters;
    /// pressing a selected cell clears them instead. Presses outside the
    /// grid are ignored and open no gesture.
    pub fn pointer_down(&mut self, pos: Position, buttons: PointerButtons) {
        let Some(cell) = self.grid.get(pos) else {
            return;
        };
        let fill = !cell.is_selected();
        if let Some(fill) = self.drag.press(buttons, fill) {
            self.set_selected(pos, fill);
        }
    }

    /// Handles the pointer entering a cell.
    ///
    /// Applies the gesture's fill value while the primary button remains
    /// held; ignored when no gesture is open, including an enter delivered
    /// before its matching press.
    pub fn pointer_enter(&mut self, pos: Position, buttons: PointerButtons) {
        if let Some(fill) = self.drag.entered(buttons) {
            self.set_selected(pos, fill);
        }
    }

    /// Handles the pointer release that ends a drag gesture.
    ///
    /// Hosts must deliver this from a surface-global listener: a drag can
    /// end with the pointer outside the grid.
    pub fn pointer_up(&mut self) {
        self.drag.release();
    }
}
