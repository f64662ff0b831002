//! Player identity and per-session scoring.
//!
//! ## PlayerName
//!
//! A trimmed, non-empty display name. It is also the leaderboard key.
//!
//! ## SessionState
//!
//! Score and win streak for the player currently at the table.
//! Values are replaced, never shared: each round takes the old state
//! and hands back the new one.

use serde::{Deserialize, Serialize};

use super::choice::Outcome;
use super::error::GameError;

/// Validated player name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Trim and validate a raw name.
    ///
    /// ```
    /// use rust_rps::core::PlayerName;
    ///
    /// assert_eq!(PlayerName::new("  Alice ").unwrap().as_str(), "Alice");
    /// assert!(PlayerName::new("   ").is_err());
    /// ```
    pub fn new(raw: &str) -> Result<Self, GameError> {
        match raw.trim() {
            "" => Err(GameError::EmptyName),
            name => Ok(Self(name.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Score tracking for the current player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub player_name: PlayerName,
    pub current_score: u32,
    pub win_streak: u32,
}

impl SessionState {
    /// Start a fresh session at zero.
    #[must_use]
    pub fn new(player_name: PlayerName) -> Self {
        Self {
            player_name,
            current_score: 0,
            win_streak: 0,
        }
    }

    /// Hand the table to another player; score and streak start over.
    #[must_use]
    pub fn reset(self, player_name: PlayerName) -> Self {
        Self::new(player_name)
    }

    /// Apply a round outcome and return the updated state.
    ///
    /// - win: score and streak go up by one
    /// - lose: streak drops to zero, score stays
    /// - tie: nothing changes
    #[must_use]
    pub fn apply_outcome(mut self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => {
                self.current_score = self.current_score.saturating_add(1);
                self.win_streak = self.win_streak.saturating_add(1);
            }
            Outcome::Lose => self.win_streak = 0,
            Outcome::Tie => {}
        }
        self
    }
}
