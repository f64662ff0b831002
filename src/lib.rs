//! # rust-rps
//!
//! Rock-Paper-Scissors against the computer, with a persistent top-5
//! leaderboard of best session scores.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A `SessionState` goes into every round and the
//!    next one comes back out. Nothing is held globally.
//!
//! 2. **Injectable Randomness**: Every draw comes from a seeded `GameRng`,
//!    so any game can be replayed exactly.
//!
//! 3. **Persistence as a Capability**: The leaderboard is reached through
//!    the `LeaderboardStore` trait. Tests use `MemoryStore`; the game uses
//!    `JsonFileStore`.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, sessions, RNG, configuration, errors
//! - `players`: The computer opponent
//! - `leaderboard`: Ranking and persistence
//! - `commentary`: Result banners and commentary lines
//! - `input`: Transcript-to-move mapping
//! - `round`: Round orchestration

pub mod commentary;
pub mod core;
pub mod input;
pub mod leaderboard;
pub mod players;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    resolve, Choice, Outcome,
    PlayerName, SessionState,
    GameRng, GameConfig,
    GameError, StoreError,
};

pub use crate::leaderboard::{JsonFileStore, Leaderboard, LeaderboardEntry, LeaderboardStore, MemoryStore};

pub use crate::players::{ComputerPlayer, ScriptedComputer, UniformComputer};

pub use crate::round::{RoundController, RoundResult};
