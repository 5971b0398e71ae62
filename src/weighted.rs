//! Weighted draws.
//!
//! An item is drawn with probability proportional to its weight: a uniform
//! real `x` is drawn in `[0, total)` and the cumulative weights are scanned
//! until `x` falls into the band of an item.
use rand::RngCore;
use tracing::debug;

use crate::{error::RandgenError, source};

/// sum of `weights`, after making sure they are all positive and finite
///
/// the sum itself has to be finite too, the weight that makes it overflow is
/// the one reported.
pub fn total_weight(weights: &[f64]) -> Result<f64, RandgenError> {
    if weights.is_empty() {
        return Err(RandgenError::EmptyPopulation);
    }

    let mut total = 0.0;
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(RandgenError::InvalidWeight { index, value });
        }
        total += value;
        if !total.is_finite() {
            return Err(RandgenError::InvalidWeight { index, value });
        }
    }

    Ok(total)
}

fn pick_index(weights: &[f64], total: f64, rng: &mut impl RngCore) -> usize {
    let x = source::unit(rng) * total;

    let mut cumulative = 0.0;
    for (i, w) in weights.iter().enumerate() {
        cumulative += w;
        if x < cumulative {
            return i;
        }
    }

    // rounding can leave `x` just above the last cumulative sum
    weights.len() - 1
}

/// index of one weight, drawn with probability `weights[i] / sum(weights)`
pub fn draw_weighted_index(weights: &[f64], rng: &mut impl RngCore) -> Result<usize, RandgenError> {
    let total = total_weight(weights)?;
    Ok(pick_index(weights, total, rng))
}

/// one item out of `(item, weight)` pairs
pub fn draw_weighted<'a, T>(
    items: &'a [(T, f64)],
    rng: &mut impl RngCore,
) -> Result<&'a T, RandgenError> {
    let weights: Vec<f64> = items.iter().map(|(_, w)| *w).collect();
    let i = draw_weighted_index(&weights, rng)?;
    Ok(&items[i].0)
}

/// `n` weighted draws with replacement
pub fn draw_weighted_many<T: Clone>(
    items: &[(T, f64)],
    n: usize,
    rng: &mut impl RngCore,
) -> Result<Vec<T>, RandgenError> {
    let weights: Vec<f64> = items.iter().map(|(_, w)| *w).collect();
    let total = total_weight(&weights)?;

    Ok((0..n)
        .map(|_| items[pick_index(&weights, total, rng)].0.clone())
        .collect())
}

/// `n` weighted draws without replacement
///
/// the drawn item is removed and the total weight recomputed before each next
/// draw, so drawing as many items as there are exhausts the population in a
/// weight-biased order.
pub fn draw_weighted_without_replacement<T: Clone>(
    items: &[(T, f64)],
    n: usize,
    rng: &mut impl RngCore,
) -> Result<Vec<T>, RandgenError> {
    let mut weights: Vec<f64> = items.iter().map(|(_, w)| *w).collect();
    total_weight(&weights)?;
    if n > items.len() {
        return Err(RandgenError::TooManyUnique {
            requested: n as u128,
            available: items.len() as u128,
        });
    }

    debug!("drawing {} out of {} weighted items", n, items.len());
    let mut remaining: Vec<usize> = (0..items.len()).collect();
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        let total: f64 = weights.iter().sum();
        let i = pick_index(&weights, total, rng);
        res.push(items[remaining.remove(i)].0.clone());
        weights.remove(i);
    }

    Ok(res)
}
