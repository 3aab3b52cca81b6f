use futures_util::future::try_join_all;
use jeopardy_core::{
    self as game, Board, CellPos, Clue, GameConfig, GameError, RevealOutcome, RevealState,
};
use jeopardy_protocol::{CategoryPayload, CluePayload};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::client::TriviaSource;
use crate::render::BoardDisplay;

/// Fetches and assembles a complete board.
///
/// Category fetches are issued together and joined; the first failure aborts the whole load so a partial board is
/// never produced.
pub(crate) async fn load_board<S: TriviaSource>(
    source: &S,
    config: GameConfig,
    seed: u64,
) -> game::Result<Board> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let pool = source.fetch_category_ids(config.category_pool).await?;
    let ids = game::pick_category_ids(pool, &config, &mut rng)?;
    log::debug!("picked categories: {:?}", ids);

    let payloads = try_join_all(ids.iter().map(|&id| source.fetch_category(id))).await?;

    let categories = payloads
        .into_iter()
        .map(|payload: CategoryPayload| {
            let total = payload.clues.len();
            let (title, clues) = payload.into_usable();
            if clues.len() != total {
                log::debug!(
                    "{:?}: skipping {} blank clues",
                    title,
                    total - clues.len()
                );
            }
            let clues = clues
                .into_iter()
                .map(|CluePayload { question, answer }| Clue::new(question, answer))
                .collect();
            game::deal_category(title, clues, &config, &mut rng)
        })
        .collect::<game::Result<Vec<_>>>()?;

    Board::new(categories)
}

#[derive(Clone, Debug, PartialEq)]
enum LoadState {
    Idle,
    Loading,
    Failed(GameError),
}

/// A cell whose content changed after a click.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CellUpdate {
    pub pos: CellPos,
    pub state: RevealState,
    pub content: String,
}

/// Owns the board of the current session and keeps the display in step with it.
#[derive(Debug)]
pub(crate) struct GameController {
    board: Board,
    display: BoardDisplay,
    load_state: LoadState,
    boards_loaded: u32,
}

impl GameController {
    pub(crate) fn new() -> Self {
        Self {
            board: Board::empty(),
            display: BoardDisplay::new(),
            load_state: LoadState::Idle,
            boards_loaded: 0,
        }
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn display(&self) -> &BoardDisplay {
        &self.display
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    pub(crate) fn error(&self) -> Option<&GameError> {
        match &self.load_state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn has_loaded_before(&self) -> bool {
        self.boards_loaded > 0
    }

    /// Wipes the current board and enters the loading state.
    ///
    /// Returns `false` without touching anything when a load is already outstanding.
    pub(crate) fn begin_loading(&mut self) -> bool {
        if self.is_loading() {
            log::warn!("already loading a board, ignoring start");
            return false;
        }
        self.board = Board::empty();
        self.display.clear();
        self.load_state = LoadState::Loading;
        true
    }

    /// Publishes the result of a load, returns whether a board is now on display.
    pub(crate) fn finish_loading(&mut self, result: game::Result<Board>) -> bool {
        if !self.is_loading() {
            log::warn!("got a board without asking for one, dropping it");
            return false;
        }

        match result {
            Ok(board) => {
                log::info!("new board: {}x{}", board.rows(), board.cols());
                self.board = board;
                self.display.render_board(&self.board);
                self.load_state = LoadState::Idle;
                self.boards_loaded = self.boards_loaded.saturating_add(1);
                true
            }
            Err(err) => {
                if err.is_load_error() {
                    log::error!("failed to load board: {}", err);
                } else {
                    log::warn!("loaded board is unusable: {}", err);
                }
                self.load_state = LoadState::Failed(err);
                false
            }
        }
    }

    /// Advances the clue under `pos` and updates that one cell, `None` when nothing changed.
    pub(crate) fn on_cell_clicked(&mut self, pos: CellPos) -> Option<CellUpdate> {
        if self.is_loading() {
            return None;
        }

        match self.board.reveal(pos) {
            Ok(RevealOutcome::Revealed { state, content }) => {
                log::debug!("reveal {}: {:?}", pos, state);
                self.display.update_cell(pos, &content);
                Some(CellUpdate {
                    pos,
                    state,
                    content,
                })
            }
            Ok(RevealOutcome::NoChange) => None,
            Err(err) => {
                log::warn!("click at {}: {}", pos, err);
                None
            }
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
