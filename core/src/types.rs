use core::fmt;
use serde::{Deserialize, Serialize};

/// Single grid axis used for board width, height and positions.
pub type Coord = u8;

/// Number of candidate categories requested from the trivia service.
pub type PoolSize = u16;

/// Identifier the trivia service assigns to a category.
pub type CategoryId = u32;

/// Position of a body cell on the board.
///
/// Rows run down the clues of a category, columns run across categories, so `(row, col)` addresses
/// `board[col].clues[row]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: Coord,
    pub col: Coord,
}

impl CellPos {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub const fn to_nd_index(self) -> [usize; 2] {
        [self.row as usize, self.col as usize]
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
