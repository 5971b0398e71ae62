//! Where randomness comes from.
//!
//! All the samplers in this crate are generic over [`rand::RngCore`], this
//! module only helps choosing one at the boundary.
//!
//! - [`Source::Thread`] is the default, a CSPRNG local to the current thread
//!   and seeded by the operating system
//! - [`Source::Secure`] reads straight from the operating system
//! - [`Source::Seeded`] is reproducible, the same seed always gives the same
//!   draws, and must not be used for secrets
use rand::{
    rngs::{OsRng, StdRng, ThreadRng},
    Rng, RngCore, SeedableRng,
};
use tracing::debug;

use crate::error::RandgenError;

/// the kind of random source a caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Thread,
    Secure,
    Seeded([u8; 32]),
}

impl Source {
    /// `Seeded` from a decimal integer or a 64-character hex string, see [`parse_seed`]
    pub fn seeded(s: &str) -> Result<Self, RandgenError> {
        Ok(Self::Seeded(parse_seed(s)?))
    }

    pub fn is_reproducible(&self) -> bool {
        matches!(self, Self::Seeded(_))
    }

    /// instantiate the actual generator
    pub fn rng(&self) -> SourceRng {
        debug!("building random source {:?}", self);
        match self {
            Self::Thread => SourceRng::Thread(rand::thread_rng()),
            Self::Secure => SourceRng::Secure(OsRng),
            Self::Seeded(seed) => SourceRng::Seeded(StdRng::from_seed(*seed)),
        }
    }
}

/// a generator built from a [`Source`]
pub enum SourceRng {
    Thread(ThreadRng),
    Secure(OsRng),
    Seeded(StdRng),
}

impl RngCore for SourceRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            Self::Thread(r) => r.next_u32(),
            Self::Secure(r) => r.next_u32(),
            Self::Seeded(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Self::Thread(r) => r.next_u64(),
            Self::Secure(r) => r.next_u64(),
            Self::Seeded(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Self::Thread(r) => r.fill_bytes(dest),
            Self::Secure(r) => r.fill_bytes(dest),
            Self::Seeded(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Self::Thread(r) => r.try_fill_bytes(dest),
            Self::Secure(r) => r.try_fill_bytes(dest),
            Self::Seeded(r) => r.try_fill_bytes(dest),
        }
    }
}

/// one uniformly distributed float in `[0, 1)`
#[inline(always)]
pub fn unit(rng: &mut impl RngCore) -> f64 {
    rng.gen::<f64>()
}

/// parse a 32-byte seed
///
/// - a string of exactly 64 hex characters is decoded as is
/// - anything else is parsed as a decimal `u64` whose little-endian bytes fill
///   the start of the seed
pub fn parse_seed(s: &str) -> Result<[u8; 32], RandgenError> {
    let s = s.trim();
    if s.len() == 64 {
        let bytes = hex::decode(s).map_err(|e| RandgenError::InvalidSeed {
            input: s.to_string(),
            reason: format!("failed to decode hex string: {}", e),
        })?;
        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes);
        return Ok(seed);
    }

    match s.parse::<u64>() {
        Ok(n) => {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&n.to_le_bytes());
            Ok(seed)
        }
        Err(_) => Err(RandgenError::InvalidSeed {
            input: s.to_string(),
            reason: "expected a positive integer or exactly 64 hex characters".to_string(),
        }),
    }
}
