//! Picking entries out of a user-provided list, optionally weighted.
//!
//! Coin flips and yes/no answers are simply picks out of a fixed list.
use std::str::FromStr;

use rand::RngCore;
use tracing::info;

use crate::{
    error::RandgenError,
    population::{self, DrawRequest, Items},
};

pub const COIN: &[&str] = &["Heads", "Tails"];
pub const YES_NO: &[&str] = &["Yes", "No"];
pub const MAX_COUNT: usize = 1_000;

/// one entry of the list, with its weight
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: String,
    pub weight: f64,
}

impl Entry {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            weight: 1.0,
        }
    }
}

/// parse `label` or `label:weight`
///
/// only the last `:` separates the weight, so labels may contain colons.
impl FromStr for Entry {
    type Err = RandgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (label, weight) = match s.rsplit_once(':') {
            Some((label, weight)) => {
                let weight = weight.trim().parse::<f64>().map_err(|_| {
                    RandgenError::Other(format!("could not parse weight from '{}'", weight))
                })?;
                (label.trim(), weight)
            }
            None => (s, 1.0),
        };

        if label.is_empty() {
            return Err(RandgenError::Other(format!(
                "expected a non-empty label in '{}'",
                s
            )));
        }

        Ok(Self {
            label: label.to_string(),
            weight,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerConfig {
    pub count: usize,
    pub allow_duplicates: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            count: 1,
            allow_duplicates: false,
        }
    }
}

impl PickerConfig {
    pub fn validate(&self) -> Result<(), RandgenError> {
        RandgenError::check_bounds("count", self.count, 1, MAX_COUNT as i64)
    }
}

/// pick `config.count` labels out of `entries`
///
/// entries are weighted only when at least one weight differs from the
/// others, a uniform list goes through the plain uniform draws.
pub fn pick(
    entries: &[Entry],
    config: &PickerConfig,
    rng: &mut impl RngCore,
) -> Result<Vec<String>, RandgenError> {
    config.validate()?;
    info!("picking {} out of {} entries", config.count, entries.len());

    let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
    let mut request = DrawRequest::new(config.count, config.allow_duplicates);
    if entries.windows(2).any(|w| w[0].weight != w[1].weight)
        || entries.first().is_some_and(|e| e.weight <= 0.0 || !e.weight.is_finite())
    {
        request = request.with_weights(entries.iter().map(|e| e.weight).collect());
    }

    Ok(population::draw(&Items(&labels[..]), &request, rng)?
        .into_iter()
        .map(|l| l.to_string())
        .collect())
}

/// `count` coin flips
pub fn flip_coins(count: usize, rng: &mut impl RngCore) -> Result<Vec<&'static str>, RandgenError> {
    from_preset(COIN, count, rng)
}

/// `count` yes/no answers
pub fn yes_no(count: usize, rng: &mut impl RngCore) -> Result<Vec<&'static str>, RandgenError> {
    from_preset(YES_NO, count, rng)
}

fn from_preset(
    preset: &'static [&'static str],
    count: usize,
    rng: &mut impl RngCore,
) -> Result<Vec<&'static str>, RandgenError> {
    PickerConfig {
        count,
        allow_duplicates: true,
    }
    .validate()?;
    population::draw(&Items(preset), &DrawRequest::new(count, true), rng)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::error::RandgenError;

    use super::{flip_coins, pick, yes_no, Entry, PickerConfig, COIN};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0)
    }

    #[test]
    fn entry_parsing() {
        assert_eq!("pizza".parse::<Entry>(), Ok(Entry::new("pizza")));
        assert_eq!(
            " sushi : 2.5 ".parse::<Entry>(),
            Ok(Entry {
                label: "sushi".to_string(),
                weight: 2.5
            })
        );
        assert_eq!(
            "a:b:3".parse::<Entry>(),
            Ok(Entry {
                label: "a:b".to_string(),
                weight: 3.0
            })
        );

        let cases = vec![
            ("pizza:lots", "could not parse weight from 'lots'"),
            (":2", "expected a non-empty label in ':2'"),
            ("", "expected a non-empty label in ''"),
        ];
        for (input, expected_error) in cases {
            assert_eq!(
                input.parse::<Entry>(),
                Err(RandgenError::Other(expected_error.to_string())),
                "input: {}",
                input,
            );
        }
    }

    #[test]
    fn picks() {
        let rng = &mut rng();

        let entries: Vec<Entry> = ["a", "b", "c", "d"].iter().map(|l| Entry::new(l)).collect();
        let res = pick(
            &entries,
            &PickerConfig {
                count: 4,
                allow_duplicates: false,
            },
            rng,
        )
        .unwrap();
        assert_eq!(res.iter().collect::<HashSet<_>>().len(), 4);

        assert!(matches!(
            pick(
                &entries,
                &PickerConfig {
                    count: 5,
                    allow_duplicates: false
                },
                rng
            ),
            Err(RandgenError::TooManyUnique { .. })
        ));
        assert_eq!(
            pick(&[], &PickerConfig::default(), rng),
            Err(RandgenError::EmptyPopulation)
        );
    }

    #[test]
    fn weighted_picks() {
        let rng = &mut rng();

        let entries = vec![
            Entry {
                label: "rare".to_string(),
                weight: 1.0,
            },
            Entry {
                label: "common".to_string(),
                weight: 9.0,
            },
        ];
        let res = pick(
            &entries,
            &PickerConfig {
                count: 1_000,
                allow_duplicates: true,
            },
            rng,
        )
        .unwrap();
        let common = res.iter().filter(|l| *l == "common").count();
        assert!((850..950).contains(&common), "common picked {} times", common);

        let zero = vec![Entry {
            label: "x".to_string(),
            weight: 0.0,
        }];
        assert!(matches!(
            pick(&zero, &PickerConfig::default(), rng),
            Err(RandgenError::InvalidWeight { index: 0, .. })
        ));

        let huge: Vec<Entry> = ["a:1e308", "b:1.5e308"]
            .iter()
            .map(|e| e.parse().unwrap())
            .collect();
        assert!(matches!(
            pick(&huge, &PickerConfig::default(), rng),
            Err(RandgenError::InvalidWeight { index: 1, .. })
        ));
    }

    #[test]
    fn presets() {
        let rng = &mut rng();

        let flips = flip_coins(100, rng).unwrap();
        assert_eq!(flips.len(), 100);
        assert!(flips.iter().all(|f| COIN.contains(f)));
        assert!(flips.contains(&"Heads") && flips.contains(&"Tails"));

        assert_eq!(yes_no(3, rng).unwrap().len(), 3);
        assert!(flip_coins(0, rng).is_err());
    }
}
