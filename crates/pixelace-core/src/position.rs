//! Board position coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a puzzle grid.
///
/// `x` is the column (left to right) and `y` is the row (top to bottom),
/// both zero-based. A position is a plain coordinate pair; whether it is in
/// bounds depends on the grid it is used with, and grid accessors treat
/// out-of-bounds positions as silent no-ops.
///
/// # Examples
///
/// ```
/// use pixelace_core::Position;
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.x, 2);
/// assert_eq!(pos.y, 0);
/// assert_eq!(pos.to_string(), "(2, 0)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column index (0-based, left to right).
    pub x: usize,
    /// Row index (0-based, top to bottom).
    pub y: usize,
}

impl Position {
    /// Creates a position from column and row indices.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
