//! Turning what the trivia service hands out into a board of the configured shape.

use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Chooses which categories of the pool end up on the board.
pub fn pick_category_ids<R: Rng + ?Sized>(
    pool: Vec<CategoryId>,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<CategoryId>> {
    log::debug!(
        "picking {} categories out of {}",
        config.categories,
        pool.len()
    );
    sample(pool, config.categories.into(), rng)
}

/// Builds a category out of the clues the service returned, keeping `clues_per_category` of them, all hidden.
pub fn deal_category<R: Rng + ?Sized>(
    title: impl Into<String>,
    clues: Vec<Clue>,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Category> {
    let title = title.into();
    let clues = sample(clues, config.clues_per_category.into(), rng).inspect_err(|err| {
        log::warn!("category {:?} cannot be dealt: {}", title, err);
    })?;
    Ok(Category::new(title, clues))
}
