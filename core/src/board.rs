use alloc::string::ToString;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of categories for one game session.
///
/// Always rectangular: every category holds the same number of clues. An empty board has no categories at all.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if let Some(first) = categories.first() {
            let rows = first.clues().len();
            if rows > Coord::MAX as usize || categories.len() > Coord::MAX as usize {
                return Err(GameError::InvalidBoardShape);
            }
            if categories
                .iter()
                .any(|category| category.clues().len() != rows)
            {
                return Err(GameError::InvalidBoardShape);
            }
        }
        Ok(Self { categories })
    }

    pub const fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn cols(&self) -> Coord {
        self.categories.len() as Coord
    }

    pub fn rows(&self) -> Coord {
        self.categories
            .first()
            .map_or(0, |category| category.clues().len() as Coord)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn validate_pos(&self, pos: CellPos) -> Result<CellPos> {
        if pos.row < self.rows() && pos.col < self.cols() {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue_at(&self, pos: CellPos) -> Result<&Clue> {
        let pos = self.validate_pos(pos)?;
        Ok(&self.categories[pos.col as usize].clues()[pos.row as usize])
    }

    pub fn state_at(&self, pos: CellPos) -> Result<RevealState> {
        self.clue_at(pos).map(Clue::state)
    }

    /// Advances the clue at `pos` one step and reports what the cell should show now.
    pub fn reveal(&mut self, pos: CellPos) -> Result<RevealOutcome> {
        let pos = self.validate_pos(pos)?;
        let clue = self.categories[pos.col as usize]
            .clue_mut(pos.row as usize)
            .ok_or(GameError::InvalidCoords)?;

        Ok(match clue.advance() {
            Some(state) => RevealOutcome::Revealed {
                state,
                content: clue.showing().unwrap_or_default().to_string(),
            },
            None => RevealOutcome::NoChange,
        })
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = CellPos> + use<> {
        let (rows, cols) = (self.rows(), self.cols());
        (0..rows).flat_map(move |row| (0..cols).map(move |col| CellPos::new(row, col)))
    }
}

impl TryFrom<Vec<Category>> for Board {
    type Error = GameError;

    fn try_from(categories: Vec<Category>) -> Result<Self> {
        Self::new(categories)
    }
}

impl From<Board> for Vec<Category> {
    fn from(board: Board) -> Self {
        board.categories
    }
}
