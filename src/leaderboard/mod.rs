//! Persistent top-N leaderboard.
//!
//! - `Leaderboard`: the ranked list and its update rule
//! - `LeaderboardStore`: load/save capability with a shared `record_score`
//! - `MemoryStore`, `JsonFileStore`: backends

mod board;
mod file;
mod memory;
mod store;

pub use board::{Leaderboard, LeaderboardEntry};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{decode, encode, LeaderboardStore};
