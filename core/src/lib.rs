#![no_std]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use clue::*;
pub use deal::*;
pub use error::*;
pub use sample::*;
pub use types::*;

mod board;
mod clue;
mod deal;
mod error;
mod sample;
mod types;

/// Shape of one game: how many categories end up on the board, how many clues each one gets, and how large the
/// candidate pool of categories is that they are sampled from.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub categories: Coord,
    pub clues_per_category: Coord,
    pub category_pool: PoolSize,
}

impl GameConfig {
    pub const fn new_unchecked(
        categories: Coord,
        clues_per_category: Coord,
        category_pool: PoolSize,
    ) -> Self {
        Self {
            categories,
            clues_per_category,
            category_pool,
        }
    }

    pub fn new(categories: Coord, clues_per_category: Coord, category_pool: PoolSize) -> Self {
        let categories = categories.max(1);
        let clues_per_category = clues_per_category.max(1);
        let category_pool = category_pool.max(categories.into());
        Self::new_unchecked(categories, clues_per_category, category_pool)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(6, 5, 100)
    }
}

/// Result of advancing a clue.
#[derive(Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// The clue was already showing its answer.
    NoChange,
    /// The clue moved to `state` and the cell should now show `content`.
    Revealed { state: RevealState, content: String },
}

impl RevealOutcome {
    pub const fn has_update(&self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Revealed { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_six_by_five_from_a_hundred() {
        let config = GameConfig::default();

        assert_eq!(config.categories, 6);
        assert_eq!(config.clues_per_category, 5);
        assert_eq!(config.category_pool, 100);
    }

    #[test]
    fn config_clamps_to_a_usable_shape() {
        let config = GameConfig::new(0, 0, 0);
        assert_eq!(config, GameConfig::new_unchecked(1, 1, 1));

        let config = GameConfig::new(8, 5, 3);
        assert_eq!(config.category_pool, 8);
    }
}
