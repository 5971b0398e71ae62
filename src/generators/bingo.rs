//! 75-ball bingo cards.
//!
//! Column `B` holds 1 to 15, `I` 16 to 30, `N` 31 to 45, `G` 46 to 60 and `O`
//! 61 to 75. Each column holds five distinct sorted numbers and the centre
//! square may be free.
use std::fmt;

use rand::RngCore;
use tracing::info;

use crate::{
    error::RandgenError,
    sample::{self, Order},
};

pub const SIZE: usize = 5;
pub const COLUMNS: [char; SIZE] = ['B', 'I', 'N', 'G', 'O'];
pub const NUMBERS_PER_COLUMN: i64 = 15;
pub const MAX_COUNT: usize = 100;

/// `columns[c][r]` is the square of column `c` and row `r`, `None` when free
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoCard {
    pub columns: [[Option<u8>; SIZE]; SIZE],
}

impl BingoCard {
    pub fn rows(&self) -> impl Iterator<Item = [Option<u8>; SIZE]> + '_ {
        (0..SIZE).map(|r| {
            let mut row = [None; SIZE];
            for (c, square) in row.iter_mut().enumerate() {
                *square = self.columns[c][r];
            }
            row
        })
    }
}

impl fmt::Display for BingoCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let header: Vec<String> = COLUMNS.iter().map(|c| format!("{:>4}", c)).collect();
        writeln!(f, "{}", header.join(""))?;
        for row in self.rows() {
            for square in row {
                match square {
                    Some(n) => write!(f, "{:>4}", n)?,
                    None => write!(f, "{:>4}", "*")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BingoConfig {
    pub count: usize,
    pub free_centre: bool,
}

impl Default for BingoConfig {
    fn default() -> Self {
        Self {
            count: 1,
            free_centre: true,
        }
    }
}

impl BingoConfig {
    pub fn validate(&self) -> Result<(), RandgenError> {
        RandgenError::check_bounds("count", self.count, 1, MAX_COUNT as i64)
    }
}

fn generate_card(free_centre: bool, rng: &mut impl RngCore) -> Result<BingoCard, RandgenError> {
    let mut columns = [[None; SIZE]; SIZE];
    for (c, column) in columns.iter_mut().enumerate() {
        let min = c as i64 * NUMBERS_PER_COLUMN + 1;
        let values = sample::draw_unique(
            min,
            min + NUMBERS_PER_COLUMN - 1,
            SIZE,
            Order::Sorted,
            rng,
        )?;
        for (square, value) in column.iter_mut().zip(values) {
            *square = Some(value as u8);
        }
    }
    if free_centre {
        columns[SIZE / 2][SIZE / 2] = None;
    }

    Ok(BingoCard { columns })
}

/// `config.count` independent cards
pub fn generate(
    config: &BingoConfig,
    rng: &mut impl RngCore,
) -> Result<Vec<BingoCard>, RandgenError> {
    config.validate()?;
    info!("generating {} bingo cards", config.count);

    (0..config.count)
        .map(|_| generate_card(config.free_centre, rng))
        .collect()
}
