//! Run-length clues for puzzle lines.

use std::fmt::{self, Display};

use tinyvec::TinyVec;

use crate::Grid;

/// The run-length clue for a single row or column.
///
/// Each entry is the length of one maximal run of filled cells, in
/// left-to-right (rows) or top-to-bottom (columns) order. A line with no
/// filled cells has the single entry `0`, the standard nonogram blank-line
/// convention. The `[0]` form matters: fulfillment compares clue sequences
/// for exact equality, and `[0]` must not compare equal to an empty run
/// list.
///
/// Runs are stored inline for expected puzzle sizes (a 20-cell line has at
/// most ten runs) and spill to the heap beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClue {
    runs: TinyVec<[u16; 10]>,
}

impl LineClue {
    /// Derives the clue for one line of cells.
    ///
    /// Scans in iteration order, accumulating a counter while the cell is
    /// filled and emitting it on each gap. An entirely empty line derives
    /// `[0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelace_core::LineClue;
    ///
    /// let clue = LineClue::from_line([true, false, true, true]);
    /// assert_eq!(clue.runs(), [1, 2]);
    ///
    /// let blank = LineClue::from_line([false, false]);
    /// assert_eq!(blank.runs(), [0]);
    /// assert!(blank.is_blank());
    /// ```
    pub fn from_line<I>(line: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut runs = TinyVec::new();
        let mut count = 0_u16;
        for filled in line {
            if filled {
                count += 1;
            } else if count > 0 {
                runs.push(count);
                count = 0;
            }
        }
        if count > 0 {
            runs.push(count);
        }
        if runs.is_empty() {
            runs.push(0);
        }
        Self { runs }
    }

    /// Builds a clue directly from run lengths.
    ///
    /// Intended for hosts and tests that already hold clue data. Callers
    /// are responsible for the `[0]`-for-blank convention; `from_runs([])`
    /// is not equal to any derived clue.
    pub fn from_runs<I>(runs: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        Self {
            runs: runs.into_iter().collect(),
        }
    }

    /// The run lengths of this clue.
    #[must_use]
    pub fn runs(&self) -> &[u16] {
        &self.runs
    }

    /// Returns `true` for the blank-line clue `[0]`.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.runs.as_slice() == [0]
    }
}

impl Display for LineClue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{run}")?;
        }
        Ok(())
    }
}

/// Clues for a whole puzzle: one [`LineClue`] per row and per column.
///
/// A clue set is derived once from the target solution and never mutated;
/// fulfillment checking re-derives a clue set from the player's current
/// selection and compares the two line by line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueSet {
    rows: Vec<LineClue>,
    columns: Vec<LineClue>,
}

impl ClueSet {
    /// Derives clues from a grid, with `filled` deciding which cells count.
    ///
    /// Rows are scanned top to bottom and columns left to right, each line
    /// read in increasing coordinate order. A grid with zero rows yields
    /// empty clue lists on both axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelace_core::{ClueSet, Grid};
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec![true, false, true],
    ///     vec![false, true, false],
    /// ])
    /// .unwrap();
    ///
    /// let clues = ClueSet::derive(&grid, |&cell| cell);
    /// assert_eq!(clues.rows()[0].runs(), [1, 1]);
    /// assert_eq!(clues.rows()[1].runs(), [1]);
    /// assert_eq!(clues.columns()[0].runs(), [1]);
    /// ```
    pub fn derive<T, F>(grid: &Grid<T>, mut filled: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        if grid.height() == 0 {
            return Self::default();
        }
        let rows = grid
            .rows()
            .map(|row| LineClue::from_line(row.iter().map(&mut filled)))
            .collect();
        let columns = (0..grid.width())
            .map(|x| LineClue::from_line(grid.column(x).map(&mut filled)))
            .collect();
        Self { rows, columns }
    }

    /// Row clues, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[LineClue] {
        &self.rows
    }

    /// Column clues, left to right.
    #[must_use]
    pub fn columns(&self) -> &[LineClue] {
        &self.columns
    }
}
