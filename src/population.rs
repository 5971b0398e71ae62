//! Drawing from a population with a draw request.
//!
//! A [`Population`] is either an implicit integer range ([`IntRange`]) or an
//! explicit list of items ([`Items`]). A [`DrawRequest`] says how many values
//! to draw, whether they may repeat and how likely each entry is.
//!
//! Draws happen on positions into the population, which are then mapped back
//! to values, so every value of a result can be traced to its entry.
use rand::{Rng, RngCore};
use tracing::{debug, info};

use crate::{
    error::RandgenError,
    sample::{self, Order},
    weighted,
};

/// anything values can be drawn from by position
pub trait Population {
    type Item;

    /// number of entries, fails if the population is malformed
    fn size(&self) -> Result<u128, RandgenError>;

    /// entry at `index`, with `index < size()`
    fn get(&self, index: u128) -> Self::Item;
}

/// the integers of `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Population for IntRange {
    type Item = i64;

    fn size(&self) -> Result<u128, RandgenError> {
        sample::range_size(self.min, self.max)
    }

    fn get(&self, index: u128) -> i64 {
        (self.min as i128 + index as i128) as i64
    }
}

/// an explicit, ordered list of items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Items<'a, T>(pub &'a [T]);

impl<T: Clone> Population for Items<'_, T> {
    type Item = T;

    fn size(&self) -> Result<u128, RandgenError> {
        Ok(self.0.len() as u128)
    }

    fn get(&self, index: u128) -> T {
        self.0[index as usize].clone()
    }
}

/// largest number of values a single [`DrawRequest`] can ask for
pub const MAX_COUNT: usize = 1 << 24;

/// how to draw from a [`Population`]
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRequest {
    pub count: usize,
    pub allow_duplicates: bool,
    /// one positive weight per entry of the population
    pub weights: Option<Vec<f64>>,
    /// [`Order::Sorted`] returns values in population order
    pub order: Order,
}

impl Default for DrawRequest {
    fn default() -> Self {
        Self {
            count: 1,
            allow_duplicates: true,
            weights: None,
            order: Order::Insertion,
        }
    }
}

impl DrawRequest {
    pub fn new(count: usize, allow_duplicates: bool) -> Self {
        Self {
            count,
            allow_duplicates,
            ..Default::default()
        }
    }

    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn sorted(mut self) -> Self {
        self.order = Order::Sorted;
        self
    }

    /// checks the request against a population of `size` entries
    pub fn validate(&self, size: u128) -> Result<(), RandgenError> {
        if size == 0 {
            return Err(RandgenError::EmptyPopulation);
        }
        RandgenError::check_bounds("count", self.count, 0, MAX_COUNT as i64)?;
        if !self.allow_duplicates && self.count as u128 > size {
            return Err(RandgenError::TooManyUnique {
                requested: self.count as u128,
                available: size,
            });
        }
        if let Some(weights) = &self.weights {
            if weights.len() as u128 != size {
                return Err(RandgenError::WeightCountMismatch {
                    expected: usize::try_from(size).unwrap_or(usize::MAX),
                    found: weights.len(),
                });
            }
            weighted::total_weight(weights)?;
        }

        Ok(())
    }
}

/// draw from `population` as described by `request`
///
/// the result always has exactly `request.count` values.
pub fn draw<P: Population>(
    population: &P,
    request: &DrawRequest,
    rng: &mut impl RngCore,
) -> Result<Vec<P::Item>, RandgenError> {
    let size = population.size()?;
    request.validate(size)?;

    info!(
        "drawing {} values out of {} (duplicates: {}, weighted: {})",
        request.count,
        size,
        request.allow_duplicates,
        request.weights.is_some()
    );

    let mut positions: Vec<u128> = match (&request.weights, request.allow_duplicates) {
        (Some(weights), allow_duplicates) => {
            let pairs: Vec<(u128, f64)> = weights
                .iter()
                .enumerate()
                .map(|(i, w)| (i as u128, *w))
                .collect();
            if allow_duplicates {
                weighted::draw_weighted_many(&pairs, request.count, rng)?
            } else {
                weighted::draw_weighted_without_replacement(&pairs, request.count, rng)?
            }
        }
        (None, true) => (0..request.count).map(|_| rng.gen_range(0..size)).collect(),
        (None, false) => sample::unique_offsets(request.count, size, rng),
    };

    if request.order == Order::Sorted {
        debug!("sorting {} positions", positions.len());
        positions.sort_unstable();
    }

    Ok(positions.into_iter().map(|i| population.get(i)).collect())
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rand::{rngs::StdRng, SeedableRng};

    use crate::error::RandgenError;

    use super::{draw, DrawRequest, IntRange, Items, MAX_COUNT};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn range_population() {
        let rng = &mut rng();

        let res = draw(&IntRange::new(1, 10), &DrawRequest::new(10, false).sorted(), rng).unwrap();
        assert_eq!(res, (1..=10).collect::<Vec<_>>());

        let res = draw(&IntRange::new(-5, 5), &DrawRequest::new(200, true), rng).unwrap();
        assert_eq!(res.len(), 200);
        assert!(res.iter().all(|x| (-5..=5).contains(x)));

        assert_eq!(
            draw(&IntRange::new(1, 5), &DrawRequest::new(6, false), rng),
            Err(RandgenError::TooManyUnique {
                requested: 6,
                available: 5
            })
        );
        assert_eq!(
            draw(&IntRange::new(5, 1), &DrawRequest::new(1, true), rng),
            Err(RandgenError::InvalidRange { min: 5, max: 1 })
        );
    }

    #[test]
    fn huge_counts_are_rejected() {
        let rng = &mut rng();

        let everything = IntRange::new(i64::MIN, i64::MAX);
        for allow_duplicates in [true, false] {
            assert_eq!(
                draw(&everything, &DrawRequest::new(usize::MAX, allow_duplicates), rng),
                Err(RandgenError::OutOfBounds {
                    key: "count".to_string(),
                    min: 0,
                    max: MAX_COUNT as i64,
                    found: i64::MAX,
                })
            );
        }

        let res = draw(&everything, &DrawRequest::new(1_000, false), rng).unwrap();
        assert_eq!(res.iter().collect::<HashSet<_>>().len(), 1_000);
    }

    #[test]
    fn item_population() {
        let rng = &mut rng();

        let names = ["ada", "grace", "linus", "ken"];
        let res = draw(&Items(&names[..]), &DrawRequest::new(4, false), rng).unwrap();
        assert_eq!(res.iter().collect::<HashSet<_>>().len(), 4);

        let res = draw(&Items(&names[..]), &DrawRequest::new(3, false).sorted(), rng).unwrap();
        let positions: Vec<usize> = res
            .iter()
            .map(|n| names.iter().position(|m| m == n).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let empty: [&str; 0] = [];
        assert_eq!(
            draw(&Items(&empty[..]), &DrawRequest::new(1, true), rng),
            Err(RandgenError::EmptyPopulation)
        );
    }

    #[test]
    fn weighted_population() {
        let rng = &mut rng();

        let items = ["A", "B"];
        let request = DrawRequest::new(4_000, true).with_weights(vec![1.0, 3.0]);
        let mut counts = HashMap::new();
        for x in draw(&Items(&items[..]), &request, rng).unwrap() {
            *counts.entry(x).or_insert(0) += 1;
        }
        let ratio = counts["B"] as f64 / counts["A"] as f64;
        assert!((2.5..3.5).contains(&ratio), "B/A ratio is {}", ratio);

        let request = DrawRequest::new(2, false).with_weights(vec![1.0, 1_000.0]);
        let res = draw(&Items(&items[..]), &request, rng).unwrap();
        assert_eq!(res.len(), 2);
        assert_ne!(res[0], res[1]);

        assert_eq!(
            draw(
                &Items(&items[..]),
                &DrawRequest::new(1, true).with_weights(vec![1.0]),
                rng
            ),
            Err(RandgenError::WeightCountMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            draw(
                &IntRange::new(1, 2),
                &DrawRequest::new(1, true).with_weights(vec![1.0, -1.0]),
                rng
            ),
            Err(RandgenError::InvalidWeight {
                index: 1,
                value: -1.0
            })
        );
    }
}
