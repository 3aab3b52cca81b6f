use jeopardy_core::{Board, CellPos, Coord};
use ndarray::Array2;

/// What a body cell shows before its clue is revealed.
pub(crate) const PLACEHOLDER: &str = "?";

/// Visible contents of the board: one header per category and one text per body cell.
///
/// The display never looks at reveal semantics, it is painted from a [`Board`] once and then patched one cell at a
/// time.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BoardDisplay {
    titles: Vec<String>,
    cells: Array2<String>,
}

impl BoardDisplay {
    pub(crate) fn new() -> Self {
        Self {
            titles: Vec::new(),
            cells: Array2::from_elem((0, 0), String::new()),
        }
    }

    /// Clears and rebuilds the grid for `board`, every body cell showing the placeholder.
    pub(crate) fn render_board(&mut self, board: &Board) {
        self.titles = board
            .categories()
            .iter()
            .map(|category| category.title().to_string())
            .collect();
        self.cells = Array2::from_elem(
            (usize::from(board.rows()), usize::from(board.cols())),
            PLACEHOLDER.to_string(),
        );
        log::debug!("rendered {}x{} board", board.rows(), board.cols());
    }

    /// Replaces the text of exactly one cell, returns whether such a cell exists.
    pub(crate) fn update_cell(&mut self, pos: CellPos, text: &str) -> bool {
        match self.cells.get_mut(pos.to_nd_index()) {
            Some(cell) => {
                log::trace!("cell {} now shows {:?}", pos, text);
                *cell = text.to_string();
                true
            }
            None => {
                log::warn!("no cell at {}", pos);
                false
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub(crate) fn titles(&self) -> &[String] {
        &self.titles
    }

    pub(crate) fn rows(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub(crate) fn cols(&self) -> Coord {
        self.cells.ncols() as Coord
    }

    pub(crate) fn text_at(&self, pos: CellPos) -> Option<&str> {
        self.cells.get(pos.to_nd_index()).map(String::as_str)
    }
}

impl Default for BoardDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jeopardy_core::{Category, Clue};

    fn board() -> Board {
        let categories = ["Math", "Literature"]
            .into_iter()
            .map(|title| {
                Category::new(
                    title,
                    vec![Clue::new("q0", "a0"), Clue::new("q1", "a1"), Clue::new("q2", "a2")],
                )
            })
            .collect();
        Board::new(categories).unwrap()
    }

    #[test]
    fn render_shows_titles_and_placeholders() {
        let mut display = BoardDisplay::new();

        display.render_board(&board());

        assert_eq!(display.titles(), ["Math", "Literature"]);
        assert_eq!((display.rows(), display.cols()), (3, 2));
        assert!(
            (0..3)
                .flat_map(|row| (0..2).map(move |col| CellPos::new(row, col)))
                .all(|pos| display.text_at(pos) == Some(PLACEHOLDER))
        );
    }

    #[test]
    fn update_touches_only_one_cell() {
        let mut display = BoardDisplay::new();
        display.render_board(&board());

        assert!(display.update_cell(CellPos::new(2, 1), "q2"));

        assert_eq!(display.text_at(CellPos::new(2, 1)), Some("q2"));
        assert_eq!(display.text_at(CellPos::new(2, 0)), Some(PLACEHOLDER));
        assert_eq!(display.text_at(CellPos::new(1, 1)), Some(PLACEHOLDER));
    }

    #[test]
    fn update_outside_grid_is_ignored() {
        let mut display = BoardDisplay::new();
        display.render_board(&board());
        let before = display.clone();

        assert!(!display.update_cell(CellPos::new(3, 0), "nope"));
        assert_eq!(display, before);
    }

    #[test]
    fn render_replaces_previous_grid() {
        let mut display = BoardDisplay::new();
        display.render_board(&board());
        display.update_cell(CellPos::new(0, 0), "q0");

        display.render_board(&board());

        assert_eq!(display.text_at(CellPos::new(0, 0)), Some(PLACEHOLDER));
        display.clear();
        assert!(display.is_empty());
        assert_eq!(display.text_at(CellPos::new(0, 0)), None);
    }
}
