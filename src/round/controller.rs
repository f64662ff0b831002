//! One round of play, start to finish.

use serde::Serialize;

use crate::commentary;
use crate::core::{resolve, Choice, GameConfig, GameError, GameRng, Outcome, PlayerName, SessionState};
use crate::leaderboard::{JsonFileStore, Leaderboard, LeaderboardStore};
use crate::players::{ComputerPlayer, UniformComputer};

/// Everything the front end needs to present a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub outcome: Outcome,
    /// Session after the round.
    pub session: SessionState,
    /// Leaderboard as persisted after the round.
    #[serde(serialize_with = "serialize_board")]
    pub leaderboard: Leaderboard,
    /// Commentary line for this round.
    pub commentary: &'static str,
}

fn serialize_board<S: serde::Serializer>(board: &Leaderboard, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(board.entries())
}

impl RoundResult {
    /// Did the player win? Wins get a celebration.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Win
    }

    /// Result banner.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        commentary::headline(self.outcome)
    }
}

/// Drives rounds for whoever is at the table.
///
/// Owns the leaderboard store, the computer opponent, and the randomness.
/// Session state is not owned: callers pass it in and get the next one
/// back in the `RoundResult`.
pub struct RoundController<S: LeaderboardStore, C: ComputerPlayer = UniformComputer> {
    store: S,
    computer: C,
    seed: u64,
    moves: GameRng,
    lines: GameRng,
    rounds_played: u64,
}

impl RoundController<JsonFileStore> {
    /// Controller backed by the JSON file named in the configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::new(JsonFileStore::from_config(config), rng)
    }
}

impl<S: LeaderboardStore> RoundController<S, UniformComputer> {
    /// Controller with a uniform random opponent.
    pub fn new(store: S, rng: GameRng) -> Self {
        Self::with_computer(store, UniformComputer, rng)
    }
}

impl<S: LeaderboardStore, C: ComputerPlayer> RoundController<S, C> {
    /// Controller with a custom opponent.
    pub fn with_computer(store: S, computer: C, rng: GameRng) -> Self {
        log::info!("{:<32}{}", "game seed", rng.seed());
        Self {
            store,
            computer,
            seed: rng.seed(),
            moves: rng.for_context("computer"),
            lines: rng.for_context("commentary"),
            rounds_played: 0,
        }
    }

    /// Validate a name and open a fresh session for it.
    pub fn start_session(&self, raw_name: &str) -> Result<SessionState, GameError> {
        let name = PlayerName::new(raw_name)?;
        log::info!("{:<32}{}", "session started for", name);
        Ok(SessionState::new(name))
    }

    /// Play one round.
    ///
    /// The computer moves, the round is resolved, the session is scored,
    /// and the session's score is recorded on the leaderboard.
    pub fn play_round(&mut self, session: SessionState, player_choice: Choice) -> RoundResult {
        let computer_choice = self.computer.choose_move(&mut self.moves);
        let outcome = resolve(player_choice, computer_choice);
        let session = session.apply_outcome(outcome);
        let leaderboard = self.store.record_score(&session.player_name, session.current_score);
        let commentary = commentary::pick(outcome, &mut self.lines);
        self.rounds_played += 1;

        log::debug!(
            "round {:<4} {:<8} vs {:<8} -> {:<4} (score {}, streak {})",
            self.rounds_played,
            player_choice,
            computer_choice,
            outcome,
            session.current_score,
            session.win_streak,
        );

        RoundResult {
            player_choice,
            computer_choice,
            outcome,
            session,
            leaderboard,
            commentary,
        }
    }

    /// Current persisted leaderboard.
    #[must_use]
    pub fn leaderboard(&self) -> Leaderboard {
        self.store.load()
    }

    /// Seed the controller's randomness was derived from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rounds played through this controller.
    #[must_use]
    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::MemoryStore;
    use crate::players::ScriptedComputer;

    fn scripted(moves: Vec<Choice>) -> RoundController<MemoryStore, ScriptedComputer> {
        RoundController::with_computer(MemoryStore::new(), ScriptedComputer::new(moves), GameRng::new(1))
    }

    #[test]
    fn test_rock_beats_mocked_scissors() {
        let mut ctl = scripted(vec![Choice::Scissors]);
        let session = ctl.start_session("Alice").unwrap();

        let result = ctl.play_round(session, Choice::Rock);

        assert_eq!(result.player_choice, Choice::Rock);
        assert_eq!(result.computer_choice, Choice::Scissors);
        assert_eq!(result.outcome, Outcome::Win);
        assert!(result.is_win());
        assert_eq!(result.session.current_score, 1);
        assert_eq!(result.session.win_streak, 1);
        assert_eq!(result.headline(), "You Win! 🎉");
        assert!(commentary::phrases(Outcome::Win).contains(&result.commentary));
    }

    #[test]
    fn test_leaderboard_follows_session() {
        let mut ctl = scripted(vec![Choice::Scissors, Choice::Scissors, Choice::Paper]);
        let mut session = ctl.start_session("Alice").unwrap();

        for _ in 0..3 {
            session = ctl.play_round(session, Choice::Rock).session;
        }

        assert_eq!(session.current_score, 2);
        assert_eq!(session.win_streak, 0);
        let board = ctl.leaderboard();
        assert_eq!(board.best_score(&session.player_name), Some(2));
        assert_eq!(ctl.rounds_played(), 3);
    }

    #[test]
    fn test_every_round_persists() {
        let mut ctl = scripted(vec![Choice::Rock]);
        let session = ctl.start_session("Tie Fan").unwrap();

        let result = ctl.play_round(session, Choice::Rock);

        assert_eq!(result.outcome, Outcome::Tie);
        assert_eq!(ctl.store().saves(), 1);
        assert_eq!(result.leaderboard.best_score(&result.session.player_name), Some(0));
    }

    #[test]
    fn test_start_session_rejects_blank_name() {
        let ctl = scripted(vec![Choice::Rock]);
        assert!(matches!(ctl.start_session("   "), Err(GameError::EmptyName)));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = RoundController::new(MemoryStore::new(), GameRng::new(99));
        let mut b = RoundController::new(MemoryStore::new(), GameRng::new(99));
        let mut sa = a.start_session("P").unwrap();
        let mut sb = b.start_session("P").unwrap();

        for choice in [Choice::Rock, Choice::Paper, Choice::Scissors, Choice::Rock] {
            let ra = a.play_round(sa, choice);
            let rb = b.play_round(sb, choice);
            assert_eq!(ra, rb);
            sa = ra.session;
            sb = rb.session;
        }
    }

    #[test]
    fn test_result_serializes_board_as_entries() {
        let mut ctl = scripted(vec![Choice::Scissors]);
        let session = ctl.start_session("Alice").unwrap();
        let result = ctl.play_round(session, Choice::Rock);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["outcome"], "win");
        assert_eq!(json["computer_choice"], "scissors");
        assert_eq!(json["leaderboard"][0]["name"], "Alice");
        assert_eq!(json["leaderboard"][0]["score"], 1);
    }
}
