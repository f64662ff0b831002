//! Ranked best scores.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerName, DEFAULT_CAPACITY};

/// One ranked player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: PlayerName,
    /// Best score this name has ever reached in a single session.
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: PlayerName, score: u32) -> Self {
        Self { name, score }
    }
}

/// Top-N best scores, one entry per name, highest first.
///
/// Equal scores keep the order they already had; a newcomer tying an
/// existing entry ranks below it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Leaderboard must hold at least 1 entry");
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Build from stored entries, restoring the ranking invariant.
    ///
    /// Duplicate names collapse to their best score at the position of the
    /// first occurrence, then the list is re-ranked and truncated.
    pub fn from_entries(entries: impl IntoIterator<Item = LeaderboardEntry>, capacity: usize) -> Self {
        let mut board = Self::new(capacity);
        for entry in entries {
            board.upsert(entry.name, entry.score);
        }
        board.rank();
        board
    }

    /// Record a session score.
    ///
    /// Keeps the better of the stored and new score for an existing name,
    /// otherwise inserts the name. Returns `true` if the board changed.
    ///
    /// ```
    /// use rust_rps::core::PlayerName;
    /// use rust_rps::leaderboard::Leaderboard;
    ///
    /// let alice = PlayerName::new("Alice").unwrap();
    /// let mut board = Leaderboard::default();
    ///
    /// assert!(board.record(&alice, 3));
    /// assert!(!board.record(&alice, 1));
    /// assert_eq!(board.best_score(&alice), Some(3));
    /// ```
    pub fn record(&mut self, name: &PlayerName, score: u32) -> bool {
        let before = self.entries.clone();
        self.upsert(name.clone(), score);
        self.rank();
        self.entries != before
    }

    fn upsert(&mut self, name: PlayerName, score: u32) {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.score = entry.score.max(score),
            None => self.entries.push(LeaderboardEntry::new(name, score)),
        }
    }

    fn rank(&mut self) {
        // sort_by is stable, so equal scores keep their relative order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);
    }

    /// Ranked entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score recorded for a name, if ranked.
    #[must_use]
    pub fn best_score(&self, name: &PlayerName) -> Option<u32> {
        self.entries.iter().find(|e| &e.name == name).map(|e| e.score)
    }

    /// 1-indexed rank of a name, if ranked.
    #[must_use]
    pub fn rank_of(&self, name: &PlayerName) -> Option<usize> {
        self.entries.iter().position(|e| &e.name == name).map(|i| i + 1)
    }
}

impl std::fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{:>2}. {:<24} {} points", i + 1, entry.name, entry.score)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PlayerName {
        PlayerName::new(s).unwrap()
    }

    fn scores(board: &Leaderboard) -> Vec<(&str, u32)> {
        board.entries().iter().map(|e| (e.name.as_str(), e.score)).collect()
    }

    #[test]
    fn test_best_score_scenario() {
        let mut board = Leaderboard::default();

        board.record(&name("Alice"), 3);
        assert_eq!(scores(&board), vec![("Alice", 3)]);

        board.record(&name("Bob"), 5);
        assert_eq!(scores(&board), vec![("Bob", 5), ("Alice", 3)]);

        assert!(!board.record(&name("Alice"), 1));
        assert_eq!(scores(&board), vec![("Bob", 5), ("Alice", 3)]);

        board.record(&name("Alice"), 10);
        assert_eq!(scores(&board), vec![("Alice", 10), ("Bob", 5)]);
    }

    #[test]
    fn test_keeps_top_five() {
        let mut board = Leaderboard::default();
        for (i, n) in ["A", "B", "C", "D", "E", "F"].iter().enumerate() {
            board.record(&name(n), i as u32 + 1);
        }

        assert_eq!(board.len(), 5);
        assert_eq!(
            scores(&board),
            vec![("F", 6), ("E", 5), ("D", 4), ("C", 3), ("B", 2)]
        );
        assert_eq!(board.rank_of(&name("A")), None);
    }

    #[test]
    fn test_low_newcomer_on_full_board_is_noop() {
        let mut board = Leaderboard::default();
        for n in ["A", "B", "C", "D", "E"] {
            board.record(&name(n), 10);
        }
        let before = board.clone();

        assert!(!board.record(&name("Z"), 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_ties_keep_existing_order() {
        let mut board = Leaderboard::default();
        board.record(&name("First"), 2);
        board.record(&name("Second"), 2);
        board.record(&name("Third"), 2);

        assert_eq!(
            scores(&board),
            vec![("First", 2), ("Second", 2), ("Third", 2)]
        );
    }

    #[test]
    fn test_repeat_equal_score_is_idempotent() {
        let mut board = Leaderboard::default();
        board.record(&name("Alice"), 4);
        let before = board.clone();

        assert!(!board.record(&name("Alice"), 4));
        assert_eq!(board, before);
    }

    #[test]
    fn test_zero_score_newcomer_is_listed() {
        let mut board = Leaderboard::default();
        assert!(board.record(&name("Alice"), 0));
        assert_eq!(board.best_score(&name("Alice")), Some(0));
    }

    #[test]
    fn test_from_entries_normalizes() {
        let board = Leaderboard::from_entries(
            vec![
                LeaderboardEntry::new(name("Low"), 1),
                LeaderboardEntry::new(name("Dup"), 2),
                LeaderboardEntry::new(name("High"), 9),
                LeaderboardEntry::new(name("Dup"), 7),
            ],
            2,
        );

        assert_eq!(scores(&board), vec![("High", 9), ("Dup", 7)]);
    }

    #[test]
    fn test_display() {
        let mut board = Leaderboard::default();
        board.record(&name("Bob"), 5);
        board.record(&name("Alice"), 3);

        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(" 1. Bob"));
        assert!(lines[0].ends_with("5 points"));
        assert!(lines[1].starts_with(" 2. Alice"));
    }

    #[test]
    fn test_entry_wire_format() {
        let entry = LeaderboardEntry::new(name("Alice"), 3);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"name":"Alice","score":3}"#);
    }

    #[test]
    #[should_panic(expected = "Leaderboard must hold at least 1 entry")]
    fn test_zero_capacity() {
        let _ = Leaderboard::new(0);
    }
}
