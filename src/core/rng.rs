//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injectable**: Every random draw in the game goes through a `GameRng`
//!   passed in by the caller, so tests pin outcomes with a seed
//! - **Context streams**: Independent sequences for different purposes
//!
//! ## Usage
//!
//! ```
//! use rust_rps::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Computer moves and commentary never share a stream
//! let mut moves = rng.for_context("computer");
//! let mut lines = rng.for_context("commentary");
//!
//! // Same seed and context, same sequence
//! let mut again = GameRng::new(42).for_context("computer");
//! assert_eq!(moves.gen_range_usize(0..3), again.gen_range_usize(0..3));
//! # let _ = lines.gen_range_usize(0..4);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the OS.
    ///
    /// The seed is kept so a session can be replayed from logs.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The stream seed is FNV-1a over the seed's little-endian bytes followed
    /// by the context bytes, so it is stable across builds and platforms.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let hash = self
            .seed
            .to_le_bytes()
            .iter()
            .chain(context.as_bytes())
            .fold(FNV_OFFSET, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        Self::new(hash)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
