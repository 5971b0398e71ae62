//! Randgen: bounded random sampling and random generators
//!
//! The core of this crate is a small set of sampling primitives:
//! - uniform draws in an inclusive integer range, see [`sample::draw`]
//! - unique draws by rejection sampling, see [`sample::draw_unique`]
//! - Fisher-Yates shuffles, see [`sample::shuffle_in_place`]
//! - weighted draws, with or without replacement, see [`weighted`]
//!
//! [`population::draw`] ties them together: given a [`population::Population`]
//! and a [`population::DrawRequest`], it returns exactly `count` values.
//!
//! The [`generators`] are built on top of these primitives: numbers,
//! passwords, names, colors, dice, cards, bingo cards, teams, brackets and
//! weighted picks.
//!
//! Every function takes its random source as a `&mut impl RngCore`, see
//! [`source`] to pick one.
//!
//! # Example
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use randgen::sample::{draw_unique, Order};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let lottery = draw_unique(1, 49, 6, Order::Sorted, &mut rng).unwrap();
//! assert_eq!(lottery.len(), 6);
//! assert!(lottery.windows(2).all(|w| w[0] < w[1]));
//! ```
pub mod error;
pub mod generators;
pub mod population;
pub mod sample;
pub mod source;
pub mod weighted;

pub use error::RandgenError;
pub use source::Source;
