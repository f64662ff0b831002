//! Leaderboard persistence capability.
//!
//! Backends implement `load` and `save`; ranking lives in `Leaderboard`
//! and is shared by every backend through `record_score`.
//!
//! ## Wire format
//!
//! A JSON array of at most `capacity` records, best first:
//!
//! ```json
//! [{"name":"Bob","score":5},{"name":"Alice","score":3}]
//! ```

use crate::core::{PlayerName, StoreError};

use super::board::{Leaderboard, LeaderboardEntry};

/// Persistent leaderboard storage.
///
/// ## Implementation Notes
///
/// - `load` never fails: missing or malformed data is an empty board
/// - `save` reports failures; `record_score` logs them and carries on
pub trait LeaderboardStore {
    /// Read the persisted leaderboard.
    fn load(&self) -> Leaderboard;

    /// Overwrite the persisted leaderboard.
    fn save(&mut self, board: &Leaderboard) -> Result<(), StoreError>;

    /// Record a session score and persist the resulting board.
    ///
    /// The returned board is the one just written. If writing fails the
    /// in-memory result is still returned.
    fn record_score(&mut self, name: &PlayerName, score: u32) -> Leaderboard {
        let mut board = self.load();
        if board.record(name, score) {
            log::debug!("leaderboard updated for {} ({})", name, score);
        }
        if let Err(e) = self.save(&board) {
            log::warn!("failed to persist leaderboard: {}", e);
        }
        board
    }
}

/// Parse the wire format into a normalized board.
pub fn decode(raw: &str, capacity: usize) -> Result<Leaderboard, StoreError> {
    let entries: Vec<LeaderboardEntry> = serde_json::from_str(raw)?;
    Ok(Leaderboard::from_entries(entries, capacity))
}

/// Render a board in the wire format.
pub fn encode(board: &Leaderboard) -> Result<String, StoreError> {
    Ok(serde_json::to_string(board.entries())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid() {
        let board = decode(r#"[{"name":"Bob","score":5},{"name":"Alice","score":3}]"#, 5).unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board.entries()[0].name.as_str(), "Bob");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("not json", 5).is_err());
        assert!(decode(r#"{"name":"Bob"}"#, 5).is_err());
        assert!(decode(r#"[{"name":"Bob","score":-1}]"#, 5).is_err());
        assert!(decode(r#"[{"name":"  ","score":1}]"#, 5).is_err());
    }

    #[test]
    fn test_decode_normalizes_foreign_data() {
        let raw = r#"[
            {"name":"A","score":1},
            {"name":"B","score":4},
            {"name":"A","score":6}
        ]"#;
        let board = decode(raw, 5).unwrap();
        let names: Vec<_> = board.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(board.entries()[0].score, 6);
    }

    #[test]
    fn test_encode_wire_format() {
        let mut board = Leaderboard::default();
        board.record(&PlayerName::new("Alice").unwrap(), 3);
        board.record(&PlayerName::new("Bob").unwrap(), 5);

        assert_eq!(
            encode(&board).unwrap(),
            r#"[{"name":"Bob","score":5},{"name":"Alice","score":3}]"#
        );
    }
}
