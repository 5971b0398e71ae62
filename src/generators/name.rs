//! Full names drawn from static tables.
use std::fmt;

use rand::RngCore;
use tracing::info;

use crate::{
    error::RandgenError,
    population::{self, DrawRequest, IntRange},
};

pub const MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Paul", "Steven", "Andrew", "Joshua",
    "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald", "Edward", "Jason", "Jeffrey",
    "Ryan", "Jacob", "Gary",
];

pub const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly", "Emily",
    "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca",
    "Sharon", "Laura", "Cynthia", "Amy",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson",
];

pub const MAX_COUNT: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Any,
}

impl Gender {
    fn first_name_count(&self) -> usize {
        match self {
            Self::Male => MALE_FIRST_NAMES.len(),
            Self::Female => FEMALE_FIRST_NAMES.len(),
            Self::Any => MALE_FIRST_NAMES.len() + FEMALE_FIRST_NAMES.len(),
        }
    }

    fn first_name(&self, index: usize) -> &'static str {
        match self {
            Self::Male => MALE_FIRST_NAMES[index],
            Self::Female => FEMALE_FIRST_NAMES[index],
            Self::Any if index < MALE_FIRST_NAMES.len() => MALE_FIRST_NAMES[index],
            Self::Any => FEMALE_FIRST_NAMES[index - MALE_FIRST_NAMES.len()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name {
    pub first: &'static str,
    pub last: &'static str,
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameConfig {
    pub count: usize,
    pub gender: Gender,
    pub unique: bool,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            count: 1,
            gender: Gender::Any,
            unique: true,
        }
    }
}

impl NameConfig {
    pub fn validate(&self) -> Result<(), RandgenError> {
        RandgenError::check_bounds("count", self.count, 1, MAX_COUNT as i64)
    }
}

/// `config.count` names, unique full names when `config.unique` is set
///
/// every (first name, last name) combination is one entry of the population,
/// which makes uniqueness a plain unique draw.
pub fn generate(config: &NameConfig, rng: &mut impl RngCore) -> Result<Vec<Name>, RandgenError> {
    config.validate()?;
    info!("generating {} {:?} names", config.count, config.gender);

    let combinations = (config.gender.first_name_count() * LAST_NAMES.len()) as i64;
    let request = DrawRequest::new(config.count, !config.unique);

    Ok(
        population::draw(&IntRange::new(0, combinations - 1), &request, rng)?
            .into_iter()
            .map(|i| {
                let i = i as usize;
                Name {
                    first: config.gender.first_name(i / LAST_NAMES.len()),
                    last: LAST_NAMES[i % LAST_NAMES.len()],
                }
            })
            .collect(),
    )
}
