//! Random integers in a range.
use rand::RngCore;
use tracing::info;

use crate::{
    error::RandgenError,
    sample::{self, Order},
};

/// the largest amount of numbers generated at once
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberConfig {
    pub min: i64,
    pub max: i64,
    pub count: usize,
    pub allow_duplicates: bool,
    pub sorted: bool,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            count: 1,
            allow_duplicates: true,
            sorted: false,
        }
    }
}

impl NumberConfig {
    pub fn validate(&self) -> Result<(), RandgenError> {
        let available = sample::range_size(self.min, self.max)?;
        RandgenError::check_bounds("count", self.count, 1, MAX_COUNT as i64)?;
        if !self.allow_duplicates && self.count as u128 > available {
            return Err(RandgenError::TooManyUnique {
                requested: self.count as u128,
                available,
            });
        }
        Ok(())
    }
}

/// `config.count` integers in `[config.min, config.max]`
pub fn generate(config: &NumberConfig, rng: &mut impl RngCore) -> Result<Vec<i64>, RandgenError> {
    config.validate()?;
    info!(
        "generating {} numbers in [{}, {}]",
        config.count, config.min, config.max
    );

    let order = if config.sorted {
        Order::Sorted
    } else {
        Order::Insertion
    };

    if config.allow_duplicates {
        let mut values = sample::draw_many(config.min, config.max, config.count, rng)?;
        if order == Order::Sorted {
            values.sort_unstable();
        }
        Ok(values)
    } else {
        sample::draw_unique(config.min, config.max, config.count, order, rng)
    }
}
