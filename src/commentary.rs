//! Result text and commentary lines.
//!
//! Each outcome has a fixed result banner and four commentary phrases.
//! One phrase is picked per round.

use std::time::Duration;

use crate::core::{GameRng, Outcome};

/// How long a front end that clears commentary keeps a line visible.
///
/// The terminal front end prints commentary inline and does not use it.
pub const COMMENTARY_DISPLAY: Duration = Duration::from_secs(3);

static WIN: [&str; 4] = [
    "Impressive move! You're on fire! 🔥",
    "The student becomes the master! 🎓",
    "You're making this look easy! 👏",
    "Three wins in a row? Are you a Rock-Paper-Scissors master? 🏆",
];

static LOSE: [&str; 4] = [
    "Oof! Tough loss — the AI saw that coming! 🤖",
    "Nice try, but the computer's got your number! 📱",
    "Don't worry, even champions have off days! 🌟",
    "The AI is learning your patterns... 🧠",
];

static TIE: [&str; 4] = [
    "Great minds think alike! 🤝",
    "A perfect match! What are the odds? 🎲",
    "Neither winner nor loser - perfectly balanced! ⚖️",
    "You're reading each other's minds! 🔮",
];

/// All commentary phrases for an outcome.
#[must_use]
pub fn phrases(outcome: Outcome) -> &'static [&'static str] {
    match outcome {
        Outcome::Win => &WIN,
        Outcome::Lose => &LOSE,
        Outcome::Tie => &TIE,
    }
}

/// Pick one phrase for an outcome.
pub fn pick(outcome: Outcome, rng: &mut GameRng) -> &'static str {
    let options = phrases(outcome);
    options[rng.gen_range_usize(0..options.len())]
}

/// Banner shown with the round result.
#[must_use]
pub fn headline(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "You Win! 🎉",
        Outcome::Lose => "You Lose! 😢",
        Outcome::Tie => "It's a Tie! 🤝",
    }
}
