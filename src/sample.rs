//! Uniform sampling primitives.
//!
//! This module provides the building blocks every generator is made of:
//! - [`draw`] and [`draw_many`]: uniform integers in an inclusive range
//! - [`draw_unique`]: distinct integers by rejection sampling
//! - [`shuffle_in_place`] and [`shuffled`]: Fisher-Yates shuffle
//! - [`draw_unique_elements`]: distinct elements of a slice
//!
//! All functions check their input before touching the random source.
use std::collections::HashSet;

use rand::{Rng, RngCore};
use tracing::debug;

use crate::error::RandgenError;

/// the order in which unique values are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// the order in which the values have been drawn
    #[default]
    Insertion,
    /// increasing order
    Sorted,
}

/// number of values in `[min, max]`
///
/// fails if `min > max`.
pub fn range_size(min: i64, max: i64) -> Result<u128, RandgenError> {
    if min > max {
        return Err(RandgenError::InvalidRange { min, max });
    }
    Ok((max as i128 - min as i128 + 1) as u128)
}

/// one integer in `[min, max]`, all values being equally likely
pub fn draw(min: i64, max: i64, rng: &mut impl RngCore) -> Result<i64, RandgenError> {
    range_size(min, max)?;
    Ok(rng.gen_range(min..=max))
}

/// `count` independent integers in `[min, max]`, duplicates allowed
pub fn draw_many(
    min: i64,
    max: i64,
    count: usize,
    rng: &mut impl RngCore,
) -> Result<Vec<i64>, RandgenError> {
    range_size(min, max)?;
    Ok((0..count).map(|_| rng.gen_range(min..=max)).collect())
}

/// `count` distinct integers in `[min, max]`
///
/// values are drawn uniformly in the range and kept only when not seen before,
/// until `count` of them have been collected.
///
/// the request is rejected when `count` is larger than the number of values in
/// the range.
pub fn draw_unique(
    min: i64,
    max: i64,
    count: usize,
    order: Order,
    rng: &mut impl RngCore,
) -> Result<Vec<i64>, RandgenError> {
    let available = range_size(min, max)?;
    if count as u128 > available {
        return Err(RandgenError::TooManyUnique {
            requested: count as u128,
            available,
        });
    }

    debug!("drawing {} unique values in [{}, {}]", count, min, max);
    let mut values: Vec<i64> = unique_offsets(count, available, rng)
        .into_iter()
        .map(|offset| (min as i128 + offset as i128) as i64)
        .collect();

    if order == Order::Sorted {
        values.sort_unstable();
    }

    Ok(values)
}

/// upper bound on what [`unique_offsets`] allocates ahead of the draws
const PREALLOCATED: usize = 1 << 16;

/// `count` distinct offsets in `[0, size)` by rejection sampling, in draw order
///
/// `count <= size` must hold, otherwise this never returns.
pub(crate) fn unique_offsets(count: usize, size: u128, rng: &mut impl RngCore) -> Vec<u128> {
    let mut seen = HashSet::with_capacity(count.min(PREALLOCATED));
    let mut offsets = Vec::with_capacity(count.min(PREALLOCATED));
    let mut attempts = 0usize;
    while offsets.len() < count {
        attempts += 1;
        let offset = rng.gen_range(0..size);
        if seen.insert(offset) {
            offsets.push(offset);
        }
    }
    debug!("{} draws needed for {} unique values", attempts, count);

    offsets
}

/// shuffle `items` in place
///
/// every one of the `n!` orderings is equally likely: `i` goes from `n - 1`
/// down to `1` and element `i` is swapped with a uniformly drawn `j` in
/// `[0, i]`.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut impl RngCore) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// a shuffled copy of `items`, see [`shuffle_in_place`]
pub fn shuffled<T: Clone>(items: &[T], rng: &mut impl RngCore) -> Vec<T> {
    let mut res = items.to_vec();
    shuffle_in_place(&mut res, rng);
    res
}

/// `n` distinct indices into a collection of `len` elements, in draw order
pub fn draw_unique_indices(
    n: usize,
    len: usize,
    rng: &mut impl RngCore,
) -> Result<Vec<usize>, RandgenError> {
    if n > len {
        return Err(RandgenError::TooManyUnique {
            requested: n as u128,
            available: len as u128,
        });
    }

    Ok(unique_offsets(n, len as u128, rng)
        .into_iter()
        .map(|i| i as usize)
        .collect())
}

/// `n` elements of `things` taken at distinct positions
///
/// > **Note**
/// >
/// > positions are distinct, values are not necessarily so if `things`
/// > contains duplicates.
pub fn draw_unique_elements<T: Clone>(
    things: &[T],
    n: usize,
    rng: &mut impl RngCore,
) -> Result<Vec<T>, RandgenError> {
    Ok(draw_unique_indices(n, things.len(), rng)?
        .into_iter()
        .map(|i| things[i].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::error::RandgenError;

    use super::{
        draw, draw_many, draw_unique, draw_unique_elements, range_size, shuffle_in_place,
        shuffled, Order,
    };

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn single_draw() {
        let rng = &mut rng();

        for _ in 0..1_000 {
            let x = draw(-3, 3, rng).unwrap();
            assert!((-3..=3).contains(&x));
        }
        assert_eq!(draw(7, 7, rng), Ok(7));
        assert_eq!(
            draw(2, 1, rng),
            Err(RandgenError::InvalidRange { min: 2, max: 1 })
        );

        let x = draw(i64::MIN, i64::MAX, rng);
        assert!(x.is_ok());
        assert_eq!(range_size(i64::MIN, i64::MAX), Ok(1u128 << 64));
    }

    #[test]
    fn many_draws_allow_duplicates() {
        let rng = &mut rng();

        let values = draw_many(1, 2, 100, rng).unwrap();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (1..=2).contains(v)));
        assert!(values.contains(&1) && values.contains(&2));

        assert_eq!(draw_many(1, 6, 0, rng), Ok(vec![]));
        assert!(draw_many(6, 1, 3, rng).is_err());
    }

    #[test]
    fn unique_draws() {
        let rng = &mut rng();

        for (min, max, count) in [(1, 10, 10), (1, 100, 7), (-50, 50, 101), (0, 0, 1)] {
            let values = draw_unique(min, max, count, Order::Insertion, rng).unwrap();
            assert_eq!(values.len(), count);
            assert_eq!(values.iter().collect::<HashSet<_>>().len(), count);
            assert!(values.iter().all(|v| (min..=max).contains(v)));
        }

        let mut values = draw_unique(1, 10, 10, Order::Sorted, rng).unwrap();
        assert_eq!(values, (1..=10).collect::<Vec<_>>());
        values = draw_unique(1, 1_000, 20, Order::Sorted, rng).unwrap();
        assert!(values.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(
            draw_unique(1, 5, 6, Order::Insertion, rng),
            Err(RandgenError::TooManyUnique {
                requested: 6,
                available: 5
            })
        );

        let values = draw_unique(i64::MIN, i64::MAX, 70_000, Order::Sorted, rng).unwrap();
        assert_eq!(values.len(), 70_000);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn shapes_are_stable_across_seeds() {
        let a = draw_unique(1, 1_000, 10, Order::Insertion, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = draw_unique(1, 1_000, 10, Order::Insertion, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let rng = &mut rng();

        let items: Vec<u32> = (0..50).collect();
        let res = shuffled(&items, rng);
        assert_eq!(items, (0..50).collect::<Vec<_>>(), "input should be untouched");
        let mut sorted = res.clone();
        sorted.sort();
        assert_eq!(sorted, items);

        let mut empty: Vec<u32> = vec![];
        shuffle_in_place(&mut empty, rng);
        assert!(empty.is_empty());
        let mut one = vec!['a'];
        shuffle_in_place(&mut one, rng);
        assert_eq!(one, vec!['a']);
    }

    #[test]
    fn shuffle_reaches_every_permutation() {
        let rng = &mut rng();

        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            seen.insert(shuffled(&['A', 'B', 'C', 'D'], rng));
        }
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn unique_elements() {
        let rng = &mut rng();

        let things = ["a", "b", "c", "d", "e"];
        let res = draw_unique_elements(&things, 3, rng).unwrap();
        assert_eq!(res.len(), 3);
        assert_eq!(res.iter().collect::<HashSet<_>>().len(), 3);

        assert!(draw_unique_elements(&things, 6, rng).is_err());
        assert_eq!(draw_unique_elements(&things, 0, rng), Ok(vec![]));
    }
}
