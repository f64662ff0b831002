//! In-memory leaderboard storage for testing.

use crate::core::{StoreError, DEFAULT_CAPACITY};

use super::board::Leaderboard;
use super::store::{decode, encode, LeaderboardStore};

/// Keeps the encoded leaderboard in a string, like a browser's local storage.
#[derive(Clone, Debug)]
pub struct MemoryStore {
    raw: Option<String>,
    capacity: usize,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "Leaderboard must hold at least 1 entry");
        Self {
            raw: None,
            capacity,
            saves: 0,
        }
    }

    /// Seed the store with raw stored text, valid or not.
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Raw stored text, if anything has been stored.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardStore for MemoryStore {
    fn load(&self) -> Leaderboard {
        match self.raw.as_deref() {
            None => Leaderboard::new(self.capacity),
            Some(raw) => decode(raw, self.capacity).unwrap_or_else(|e| {
                log::warn!("discarding malformed leaderboard: {}", e);
                Leaderboard::new(self.capacity)
            }),
        }
    }

    fn save(&mut self, board: &Leaderboard) -> Result<(), StoreError> {
        self.raw = Some(encode(board)?);
        self.saves += 1;
        Ok(())
    }
}
