//! Randgen-specific errors
//!
//! Every error is an input-validation failure detected before any sampling
//! happens.
use thiserror::Error;

/// An error that Randgen could end up producing.
///
/// There are a few families of errors in Randgen:
/// - related to the _population_ being drawn from
/// - related to _weights_ in weighted draws
/// - related to the configuration of a generator
/// - related to the random source
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RandgenError {
    #[error("invalid range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: i64, max: i64 },
    #[error("cannot draw {requested} unique values from a population of {available}")]
    TooManyUnique { requested: u128, available: u128 },
    #[error("cannot draw from an empty population")]
    EmptyPopulation,
    /// `{0}` names the generator whose character set ended up empty.
    #[error("no characters left to draw from in {0}")]
    EmptyCharset(String),
    /// `{index}` is the position of the faulty weight.
    #[error("weight at {index} should be a positive finite number, found {value}")]
    InvalidWeight { index: usize, value: f64 },
    #[error("expected {expected} weights, one per item, found {found}")]
    WeightCountMismatch { expected: usize, found: usize },
    #[error("{key} should be between {min} and {max}, found {found}")]
    OutOfBounds {
        key: String,
        min: i64,
        max: i64,
        found: i64,
    },
    #[error("could not parse seed '{input}': {reason}")]
    InvalidSeed { input: String, reason: String },
    /// `{0}` is a custom error message.
    #[error("Another error: {0}")]
    Other(String),
}

impl RandgenError {
    /// checks that `found` lies in `[min, max]` and names the offending `key` otherwise
    ///
    /// values that do not fit in an `i64` are reported as `i64::MAX`.
    pub(crate) fn check_bounds(
        key: &str,
        found: impl TryInto<i64>,
        min: i64,
        max: i64,
    ) -> Result<(), Self> {
        let found = found.try_into().unwrap_or(i64::MAX);
        if found < min || found > max {
            return Err(Self::OutOfBounds {
                key: key.to_string(),
                min,
                max,
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RandgenError;

    #[test]
    fn bounds() {
        assert_eq!(RandgenError::check_bounds("count", 3usize, 1, 10), Ok(()));
        assert_eq!(RandgenError::check_bounds("count", 10u32, 1, 10), Ok(()));

        let cases = vec![(0usize, 0), (11, 11), (usize::MAX, i64::MAX)];
        for (found, expected) in cases {
            assert_eq!(
                RandgenError::check_bounds("count", found, 1, 10),
                Err(RandgenError::OutOfBounds {
                    key: "count".to_string(),
                    min: 1,
                    max: 10,
                    found: expected,
                }),
                "found: {}",
                found,
            );
        }
    }
}
