//! Core game types: moves, outcomes, sessions, RNG, configuration, errors.
//!
//! Everything here is free of I/O. Persistence lives in `leaderboard`,
//! orchestration in `round`.

pub mod choice;
pub mod config;
pub mod error;
pub mod rng;
pub mod session;

pub use choice::{resolve, Choice, Outcome};
pub use config::{GameConfig, DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY};
pub use error::{GameError, StoreError};
pub use rng::GameRng;
pub use session::{PlayerName, SessionState};
