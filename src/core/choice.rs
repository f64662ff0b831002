//! Moves, outcomes, and round resolution.
//!
//! ## Rules
//!
//! - Rock beats scissors
//! - Scissors beats paper
//! - Paper beats rock
//!
//! Identical moves tie. Outcomes are always reported from the player's side.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GameError;

/// One of the three moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// All moves in canonical order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The move this one defeats.
    #[must_use]
    pub const fn beats(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Lowercase token used at the input boundary and in storage.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
        }
    }

    /// Hand glyph shown by the front end.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Choice::Rock => "✊",
            Choice::Paper => "✋",
            Choice::Scissors => "✌️",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.token())
    }
}

impl FromStr for Choice {
    type Err = GameError;

    /// Parse an exact move token, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Choice::ALL
            .into_iter()
            .find(|c| c.token() == token)
            .ok_or_else(|| GameError::UnknownChoice(s.trim().to_string()))
    }
}

/// Result of a round, relative to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// The same round seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Tie => "tie",
        })
    }
}

/// Resolve a round from the player's point of view.
///
/// ```
/// use rust_rps::core::{resolve, Choice, Outcome};
///
/// assert_eq!(resolve(Choice::Rock, Choice::Scissors), Outcome::Win);
/// assert_eq!(resolve(Choice::Rock, Choice::Paper), Outcome::Lose);
/// assert_eq!(resolve(Choice::Paper, Choice::Paper), Outcome::Tie);
/// ```
#[must_use]
pub fn resolve(player: Choice, computer: Choice) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
