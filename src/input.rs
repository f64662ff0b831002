//! Mapping spoken or typed text onto moves.
//!
//! Speech recognition itself happens elsewhere; this module only sees the
//! transcript. Matching is by substring on the literal move words, checked
//! in the order rock, paper, scissors. Text naming no move maps to `None`
//! and the caller plays no round.

use crate::core::Choice;

/// Find the move named in a transcript.
///
/// ```
/// use rust_rps::core::Choice;
/// use rust_rps::input::parse_transcript;
///
/// assert_eq!(parse_transcript("I choose PAPER!"), Some(Choice::Paper));
/// assert_eq!(parse_transcript("scissors beats paper"), Some(Choice::Paper));
/// assert_eq!(parse_transcript("hello there"), None);
/// ```
#[must_use]
pub fn parse_transcript(transcript: &str) -> Option<Choice> {
    let text = transcript.to_lowercase();
    Choice::ALL.into_iter().find(|c| text.contains(c.token()))
}
