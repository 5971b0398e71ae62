//! Passwords made of configurable character classes.
//!
//! A password always holds at least one character of every enabled class:
//! one character is drawn per class, the rest is drawn from the union of all
//! the classes and the result is shuffled.
//!
//! > **Note**
//! >
//! > this module draws from whatever source it is given, callers generating
//! > real secrets should hand it a [`crate::source::Source::Secure`] generator.
use rand::{Rng, RngCore};
use tracing::{debug, info};

use crate::{error::RandgenError, sample};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
/// characters easily mistaken for one another
pub const AMBIGUOUS: &str = "Il1O0o";

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const MAX_COUNT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    pub length: usize,
    pub count: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 16,
            count: 1,
            lowercase: true,
            uppercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordConfig {
    /// the enabled character classes, without the ambiguous characters if asked
    pub fn classes(&self) -> Vec<Vec<char>> {
        [
            (self.lowercase, LOWERCASE),
            (self.uppercase, UPPERCASE),
            (self.digits, DIGITS),
            (self.symbols, SYMBOLS),
        ]
        .iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, class)| {
            class
                .chars()
                .filter(|c| !(self.exclude_ambiguous && AMBIGUOUS.contains(*c)))
                .collect::<Vec<_>>()
        })
        .filter(|class| !class.is_empty())
        .collect()
    }

    pub fn validate(&self) -> Result<(), RandgenError> {
        RandgenError::check_bounds(
            "length",
            self.length,
            MIN_LENGTH as i64,
            MAX_LENGTH as i64,
        )?;
        RandgenError::check_bounds("count", self.count, 1, MAX_COUNT as i64)?;
        if self.classes().is_empty() {
            return Err(RandgenError::EmptyCharset("password".to_string()));
        }
        Ok(())
    }
}

fn generate_one(classes: &[Vec<char>], length: usize, rng: &mut impl RngCore) -> String {
    let charset: Vec<char> = classes.iter().flatten().copied().collect();

    let mut chars: Vec<char> = classes
        .iter()
        .map(|class| class[rng.gen_range(0..class.len())])
        .collect();
    while chars.len() < length {
        chars.push(charset[rng.gen_range(0..charset.len())]);
    }
    sample::shuffle_in_place(&mut chars, rng);

    chars.into_iter().collect()
}

/// `config.count` passwords of `config.length` characters each
pub fn generate(
    config: &PasswordConfig,
    rng: &mut impl RngCore,
) -> Result<Vec<String>, RandgenError> {
    config.validate()?;
    info!(
        "generating {} passwords of length {}",
        config.count, config.length
    );

    let classes = config.classes();
    debug!(
        "{} character classes, {} characters in total",
        classes.len(),
        classes.iter().map(|c| c.len()).sum::<usize>()
    );

    Ok((0..config.count)
        .map(|_| generate_one(&classes, config.length, rng))
        .collect())
}
