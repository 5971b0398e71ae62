//! Ready-made generators built on top of [`crate::sample`],
//! [`crate::weighted`] and [`crate::population`].
//!
//! Every generator comes with its own configuration record, checked by a
//! `validate` method before anything is drawn, and a `generate`-like function
//! taking that record and a random source.
pub mod bingo;
pub mod cards;
pub mod color;
pub mod dice;
pub mod name;
pub mod number;
pub mod password;
pub mod picker;
pub mod teams;
