//! Playing cards: build a deck, shuffle it, deal hands.
use std::fmt;

use rand::RngCore;
use tracing::{debug, info};

use crate::{error::RandgenError, sample};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    fn symbol(&self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// card ranks, from 2 (`2`) to ace (`14`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(14);
    pub const KING: Rank = Rank(13);
    pub const QUEEN: Rank = Rank(12);
    pub const JACK: Rank = Rank(11);

    pub fn all() -> impl Iterator<Item = Rank> {
        (2..=14).map(Rank)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            14 => write!(f, "A"),
            13 => write!(f, "K"),
            12 => write!(f, "Q"),
            11 => write!(f, "J"),
            n => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Standard { rank: Rank, suit: Suit },
    Joker,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Standard { rank, suit } => write!(f, "{}{}", rank, suit.symbol()),
            Self::Joker => write!(f, "🃏"),
        }
    }
}

/// an ordered 52-card deck, followed by two jokers if asked
pub fn deck(jokers: bool) -> Vec<Card> {
    let mut cards: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| Card::Standard { rank, suit }))
        .collect();
    if jokers {
        cards.extend([Card::Joker, Card::Joker]);
    }
    cards
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardConfig {
    pub hands: usize,
    pub hand_size: usize,
    pub jokers: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            hands: 1,
            hand_size: 5,
            jokers: false,
        }
    }
}

impl CardConfig {
    pub fn deck_size(&self) -> usize {
        if self.jokers {
            54
        } else {
            52
        }
    }

    pub fn validate(&self) -> Result<(), RandgenError> {
        let deck_size = self.deck_size() as i64;
        RandgenError::check_bounds("hands", self.hands, 1, deck_size)?;
        RandgenError::check_bounds("hand size", self.hand_size, 1, deck_size)?;
        let needed = self.hands * self.hand_size;
        if needed > self.deck_size() {
            return Err(RandgenError::TooManyUnique {
                requested: needed as u128,
                available: self.deck_size() as u128,
            });
        }
        Ok(())
    }
}

/// shuffle a fresh deck and deal `config.hands` hands of `config.hand_size` cards
///
/// a card is dealt at most once across all hands.
pub fn deal(config: &CardConfig, rng: &mut impl RngCore) -> Result<Vec<Vec<Card>>, RandgenError> {
    config.validate()?;
    info!(
        "dealing {} hands of {} cards",
        config.hands, config.hand_size
    );

    let mut cards = deck(config.jokers);
    sample::shuffle_in_place(&mut cards, rng);
    debug!("deck shuffled, {} cards", cards.len());

    Ok(cards
        .chunks(config.hand_size)
        .take(config.hands)
        .map(|hand| hand.to_vec())
        .collect())
}
