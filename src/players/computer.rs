//! Computer move selection.

use crate::core::{Choice, GameRng};

/// Source of computer moves.
///
/// The RNG is always supplied by the caller so that a seeded session
/// replays exactly.
pub trait ComputerPlayer {
    /// Pick the computer's move for the next round.
    fn choose_move(&mut self, rng: &mut GameRng) -> Choice;
}

/// Uniform random opponent.
///
/// Selects uniformly from the three moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformComputer;

impl ComputerPlayer for UniformComputer {
    fn choose_move(&mut self, rng: &mut GameRng) -> Choice {
        Choice::ALL[rng.gen_range_usize(0..Choice::ALL.len())]
    }
}

/// Replays a fixed sequence of moves, cycling when exhausted.
///
/// Useful for demos and for pinning the computer's move in tests.
#[derive(Clone, Debug)]
pub struct ScriptedComputer {
    moves: Vec<Choice>,
    cursor: usize,
}

impl ScriptedComputer {
    /// Create a scripted opponent.
    pub fn new(moves: impl Into<Vec<Choice>>) -> Self {
        let moves = moves.into();
        assert!(!moves.is_empty(), "Script must contain at least 1 move");
        Self { moves, cursor: 0 }
    }

    /// Always play the same move.
    pub fn always(choice: Choice) -> Self {
        Self::new(vec![choice])
    }
}

impl ComputerPlayer for ScriptedComputer {
    fn choose_move(&mut self, _: &mut GameRng) -> Choice {
        let choice = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_is_deterministic_per_seed() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        let mut cpu = UniformComputer;

        for _ in 0..50 {
            assert_eq!(cpu.choose_move(&mut rng1), cpu.choose_move(&mut rng2));
        }
    }

    #[test]
    fn test_uniform_covers_all_moves() {
        let mut rng = GameRng::new(3);
        let mut cpu = UniformComputer;
        let mut counts = [0usize; 3];

        for _ in 0..3000 {
            let mv = cpu.choose_move(&mut rng);
            let idx = Choice::ALL.iter().position(|&c| c == mv).unwrap();
            counts[idx] += 1;
        }

        // Expected 1000 each; a loose band catches a biased draw.
        for count in counts {
            assert!((800..1200).contains(&count), "count {} out of band", count);
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = GameRng::new(0);
        let mut cpu = ScriptedComputer::new(vec![Choice::Rock, Choice::Paper]);

        assert_eq!(cpu.choose_move(&mut rng), Choice::Rock);
        assert_eq!(cpu.choose_move(&mut rng), Choice::Paper);
        assert_eq!(cpu.choose_move(&mut rng), Choice::Rock);
    }

    #[test]
    fn test_scripted_always() {
        let mut rng = GameRng::new(0);
        let mut cpu = ScriptedComputer::always(Choice::Scissors);
        for _ in 0..5 {
            assert_eq!(cpu.choose_move(&mut rng), Choice::Scissors);
        }
    }

    #[test]
    #[should_panic(expected = "Script must contain at least 1 move")]
    fn test_empty_script() {
        let _ = ScriptedComputer::new(Vec::<Choice>::new());
    }
}
