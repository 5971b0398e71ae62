//! Dice rolls, with support for the `NdS` notation.
use std::{fmt, str::FromStr};

use rand::RngCore;
use tracing::info;

use crate::{error::RandgenError, sample};

pub const MAX_DICE: usize = 100;
pub const MIN_SIDES: u32 = 2;
pub const MAX_SIDES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceConfig {
    pub count: usize,
    pub sides: u32,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self { count: 1, sides: 6 }
    }
}

impl DiceConfig {
    pub fn validate(&self) -> Result<(), RandgenError> {
        RandgenError::check_bounds("count", self.count, 1, MAX_DICE as i64)?;
        RandgenError::check_bounds("sides", self.sides, MIN_SIDES as i64, MAX_SIDES as i64)
    }
}

impl fmt::Display for DiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// parse `NdS`, e.g. `3d6`, or `dS` for a single die
impl FromStr for DiceConfig {
    type Err = RandgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.trim().split(['d', 'D']).collect();
        if tokens.len() != 2 {
            return Err(RandgenError::Other(format!(
                "expected dice notation like '3d6', found '{}'",
                s
            )));
        }

        let count = if tokens[0].is_empty() {
            1
        } else {
            tokens[0].parse::<usize>().map_err(|_| {
                RandgenError::Other(format!(
                    "could not parse positive integer from '{}'",
                    tokens[0]
                ))
            })?
        };
        let sides = tokens[1].parse::<u32>().map_err(|_| {
            RandgenError::Other(format!(
                "could not parse positive integer from '{}'",
                tokens[1]
            ))
        })?;

        let config = Self { count, sides };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roll {
    pub rolls: Vec<i64>,
    pub total: i64,
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rolls = self
            .rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" + ");
        write!(f, "{} = {}", rolls, self.total)
    }
}

pub fn roll(config: &DiceConfig, rng: &mut impl RngCore) -> Result<Roll, RandgenError> {
    config.validate()?;
    info!("rolling {}", config);

    let rolls = sample::draw_many(1, config.sides as i64, config.count, rng)?;
    let total = rolls.iter().sum();

    Ok(Roll { rolls, total })
}
