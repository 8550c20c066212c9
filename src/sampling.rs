// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Seeded sampling without replacement.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::error::{ExtractError, Result};

/// Draw `count` distinct items from `items`, uniformly at random.
///
/// The same `(items order, seed, count)` always yields the same selection
/// in the same order.
pub fn sample<T: Clone>(items: &[T], count: usize, seed: u64) -> Result<Vec<T>> {
    if count > items.len() {
        return Err(ExtractError::NotEnoughCandidates {
            requested: count,
            available: items.len(),
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Ok(index::sample(&mut rng, items.len(), count)
        .into_iter()
        .map(|i| items[i].clone())
        .collect())
}
