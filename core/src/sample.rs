use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Picks `k` distinct items out of `items`, uniformly and without replacement. The order of the result is
/// arbitrary.
pub fn sample<T, R: Rng + ?Sized>(items: Vec<T>, k: usize, rng: &mut R) -> Result<Vec<T>> {
    let available = items.len();
    if k > available {
        log::warn!("Cannot sample {} out of {}", k, available);
        return Err(GameError::InsufficientPool {
            required: k,
            available,
        });
    }

    let picked = rand::seq::index::sample(rng, available, k);
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    Ok(picked
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect())
}
