//! Splitting participants into teams and seeding single-elimination brackets.
use std::fmt;

use rand::RngCore;
use tracing::{debug, info};

use crate::{error::RandgenError, sample};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamConfig {
    pub teams: usize,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self { teams: 2 }
    }
}

impl TeamConfig {
    pub fn validate(&self, participants: usize) -> Result<(), RandgenError> {
        if participants == 0 {
            return Err(RandgenError::EmptyPopulation);
        }
        RandgenError::check_bounds(
            "teams",
            self.teams,
            1,
            i64::try_from(participants).unwrap_or(i64::MAX),
        )
    }
}

/// shuffle `participants` and deal them round-robin into `config.teams` teams
///
/// team sizes differ by at most one.
pub fn make_teams<T: Clone>(
    participants: &[T],
    config: &TeamConfig,
    rng: &mut impl RngCore,
) -> Result<Vec<Vec<T>>, RandgenError> {
    config.validate(participants.len())?;
    info!(
        "splitting {} participants into {} teams",
        participants.len(),
        config.teams
    );

    let mut teams = vec![Vec::new(); config.teams];
    for (i, p) in sample::shuffled(participants, rng).into_iter().enumerate() {
        teams[i % config.teams].push(p);
    }

    Ok(teams)
}

/// a first-round match, `away` is `None` when `home` gets a bye
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<T> {
    pub home: T,
    pub away: Option<T>,
}

impl<T: fmt::Display> fmt::Display for Match<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.away {
            Some(away) => write!(f, "{} vs {}", self.home, away),
            None => write!(f, "{} (bye)", self.home),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BracketConfig {
    /// keep the given order as seeding instead of shuffling
    pub keep_order: bool,
}

/// first round of a single-elimination bracket
///
/// the field is padded to the next power of two with byes, the first
/// participants of the seeding get the byes and the others are paired in
/// order.
pub fn make_bracket<T: Clone>(
    participants: &[T],
    config: &BracketConfig,
    rng: &mut impl RngCore,
) -> Result<Vec<Match<T>>, RandgenError> {
    RandgenError::check_bounds(
        "participants",
        participants.len(),
        2,
        i64::from(u32::MAX),
    )?;

    let seeding = if config.keep_order {
        participants.to_vec()
    } else {
        sample::shuffled(participants, rng)
    };

    let size = seeding.len().next_power_of_two();
    let byes = size - seeding.len();
    info!(
        "bracket of {} for {} participants, {} byes",
        size,
        seeding.len(),
        byes
    );

    let mut matches = Vec::with_capacity(size / 2);
    let mut seeding = seeding.into_iter();
    for home in seeding.by_ref().take(byes) {
        matches.push(Match { home, away: None });
    }
    while let Some(home) = seeding.next() {
        let away = seeding.next();
        debug!("pairing match {}", matches.len());
        matches.push(Match { home, away });
    }

    Ok(matches)
}
