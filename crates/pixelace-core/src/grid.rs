//! Rectangular cell grid.

use std::ops::{Index, IndexMut};

use crate::Position;

/// A rectangular grid of cells, `height` rows by `width` columns.
///
/// Rectangularity is an invariant: every row has exactly `width` cells and
/// every operation, including [`resized`], preserves that. The
/// [`get`]/[`get_mut`]/[`set`] family treats out-of-bounds positions as
/// silent no-ops rather than panicking; pointer coordinates delivered by a
/// host can race with an in-flight resize, and a stale coordinate must not
/// crash the interaction.
///
/// Cells are stored in row-major order.
///
/// [`resized`]: Grid::resized
/// [`get`]: Grid::get
/// [`get_mut`]: Grid::get_mut
/// [`set`]: Grid::set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid of the given dimensions with every cell defaulted.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelace_core::Grid;
    ///
    /// let grid: Grid<bool> = Grid::new(3, 2);
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// assert!(grid.rows().all(|row| row.iter().all(|&cell| !cell)));
    /// ```
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self
    where
        T: Default,
    {
        let mut cells = Vec::new();
        cells.resize_with(width * height, T::default);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid from rows, requiring every row to match the first
    /// row's length.
    ///
    /// # Errors
    ///
    /// Returns [`RaggedRowsError`] naming the first offending row if the
    /// input is not rectangular.
    pub fn from_rows<I>(rows: I) -> Result<Self, RaggedRowsError>
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();
        for (y, row) in rows.into_iter().enumerate() {
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(RaggedRowsError {
                    row: y,
                    expected,
                    found: row.len(),
                });
            }
            cells.extend(row);
            height += 1;
        }
        Ok(Self {
            width: width.unwrap_or(0),
            height,
            cells,
        })
    }

    /// Builds a grid from rows, normalizing ragged input instead of
    /// failing.
    ///
    /// Rows longer than the first row are truncated and shorter rows are
    /// padded with defaulted cells. The second return value is `true` when
    /// any row needed adjustment, so hosts can surface a warning for
    /// malformed puzzle data while still loading it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelace_core::Grid;
    ///
    /// let (grid, adjusted) = Grid::from_rows_lossy(vec![
    ///     vec![true, true],
    ///     vec![true],
    ///     vec![true, false, true],
    /// ]);
    /// assert!(adjusted);
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.rows().collect::<Vec<_>>(), [
    ///     [true, true],
    ///     [true, false],
    ///     [true, false],
    /// ]);
    /// ```
    #[must_use]
    pub fn from_rows_lossy<I>(rows: I) -> (Self, bool)
    where
        I: IntoIterator<Item = Vec<T>>,
        T: Default,
    {
        let mut width = None;
        let mut height = 0;
        let mut adjusted = false;
        let mut cells = Vec::new();
        for row in rows {
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                adjusted = true;
            }
            let mut pushed = 0;
            for cell in row.into_iter().take(expected) {
                cells.push(cell);
                pushed += 1;
            }
            cells.resize_with(cells.len() + (expected - pushed), T::default);
            height += 1;
        }
        (
            Self {
                width: width.unwrap_or(0),
                height,
                cells,
            },
            adjusted,
        )
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the grid contains no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn offset(&self, pos: Position) -> Option<usize> {
        (pos.x < self.width && pos.y < self.height).then(|| pos.y * self.width + pos.x)
    }

    /// Returns the cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.offset(pos).map(|i| &self.cells[i])
    }

    /// Returns the cell at `pos` mutably, or `None` when out of bounds.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        self.offset(pos).map(|i| &mut self.cells[i])
    }

    /// Replaces the cell at `pos`, reporting whether the write applied.
    ///
    /// Out-of-bounds writes are dropped and return `false`.
    pub fn set(&mut self, pos: Position, value: T) -> bool {
        match self.get_mut(pos) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Iterates over rows, top to bottom, each as a slice of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }

    /// Iterates over the cells of column `x`, top to bottom.
    ///
    /// The iterator is empty when `x` is out of bounds.
    pub fn column(&self, x: usize) -> impl Iterator<Item = &T> {
        let width = self.width;
        let rows = if x < width { self.height } else { 0 };
        (0..rows).map(move |y| &self.cells[y * width + x])
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Maps every cell through `f`, preserving dimensions.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Returns a grid of the requested dimensions, keeping every cell whose
    /// coordinates exist in both the old and new grids.
    ///
    /// Added cells are defaulted; shrinking discards out-of-range cells.
    /// Resizing to the current dimensions reproduces the grid exactly, so
    /// repeated identical resizes are idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelace_core::{Grid, Position};
    ///
    /// let mut grid: Grid<u8> = Grid::new(2, 2);
    /// grid.set(Position::new(1, 1), 7);
    ///
    /// let grown = grid.resized(3, 3);
    /// assert_eq!(grown.get(Position::new(1, 1)), Some(&7));
    /// assert_eq!(grown.get(Position::new(2, 2)), Some(&0));
    ///
    /// let shrunk = grown.resized(1, 1);
    /// assert_eq!(shrunk.get(Position::new(1, 1)), None);
    /// ```
    #[must_use]
    pub fn resized(&self, width: usize, height: usize) -> Self
    where
        T: Default + Clone,
    {
        let mut resized = Self::new(width, height);
        for y in 0..height.min(self.height) {
            for x in 0..width.min(self.width) {
                let pos = Position::new(x, y);
                resized[pos] = self[pos].clone();
            }
        }
        resized
    }

    /// Consumes the grid into its rows, top to bottom.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let mut cells = self.cells.into_iter();
        (0..self.height)
            .map(|_| cells.by_ref().take(self.width).collect())
            .collect()
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    /// Panicking access; use [`Grid::get`] for tolerant lookups.
    fn index(&self, pos: Position) -> &T {
        self.get(pos)
            .unwrap_or_else(|| panic!("position out of bounds: {pos}"))
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        self.get_mut(pos)
            .unwrap_or_else(|| panic!("position out of bounds: {pos}"))
    }
}

/// Error returned by [`Grid::from_rows`] when input rows differ in length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("row {row} has {found} cells, expected {expected}")]
pub struct RaggedRowsError {
    /// Index of the first offending row.
    pub row: usize,
    /// Cell count of the first row.
    pub expected: usize,
    /// Cell count of the offending row.
    pub found: usize,
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = Grid::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(
            result,
            Err(RaggedRowsError {
                row: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn from_rows_accepts_empty_input() {
        let grid: Grid<u8> = Grid::from_rows(Vec::new()).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn from_rows_lossy_keeps_rectangular_input_unchanged() {
        let rows = vec![vec![1, 2], vec![3, 4]];
        let (grid, adjusted) = Grid::from_rows_lossy(rows.clone());
        assert!(!adjusted);
        assert_eq!(grid.into_rows(), rows);
    }

    #[test]
    fn out_of_bounds_access_is_a_no_op() {
        let mut grid: Grid<u8> = Grid::new(3, 2);
        let before = grid.clone();

        assert!(!grid.set(Position::new(3, 0), 9));
        assert!(!grid.set(Position::new(0, 2), 9));
        assert!(!grid.set(Position::new(usize::MAX, usize::MAX), 9));
        assert_eq!(grid, before);

        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get_mut(Position::new(0, 2)), None);
    }

    #[test]
    fn column_iterates_top_to_bottom() {
        let grid = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();
        assert_eq!(grid.column(1).copied().collect::<Vec<_>>(), [2, 4, 6]);
        assert_eq!(grid.column(2).count(), 0);
    }

    #[test]
    fn resized_preserves_overlap() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let shrunk = grid.resized(2, 1);
        assert_eq!(shrunk.into_rows(), [[1, 2]]);

        let grown = grid.resized(4, 3);
        assert_eq!(grown.into_rows(), [[1, 2, 3, 0], [4, 5, 6, 0], [0, 0, 0, 0]]);
    }

    #[test]
    fn positions_cover_grid_in_row_major_order() {
        let grid: Grid<u8> = Grid::new(2, 2);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    proptest! {
        #[test]
        fn resized_is_idempotent(
            rows in proptest::collection::vec(
                proptest::collection::vec(any::<u8>(), 0..8),
                0..8,
            ),
            width in 0_usize..8,
            height in 0_usize..8,
        ) {
            let (grid, _) = Grid::from_rows_lossy(rows);
            let once = grid.resized(width, height);
            let twice = once.resized(width, height);
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.width(), width);
            prop_assert_eq!(once.height(), height);
        }

        #[test]
        fn from_rows_lossy_normalizes_to_first_row_width(
            rows in proptest::collection::vec(
                proptest::collection::vec(any::<u8>(), 0..8),
                1..8,
            ),
        ) {
            let first_len = rows[0].len();
            let (grid, _) = Grid::from_rows_lossy(rows.clone());
            prop_assert_eq!(grid.width(), first_len);
            prop_assert_eq!(grid.height(), rows.len());
            for row in grid.rows() {
                prop_assert_eq!(row.len(), first_len);
            }
        }
    }
}
