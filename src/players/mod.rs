//! The computer opponent.
//!
//! The opponent has no memory: every move is an independent uniform draw.
//! Whatever the commentary claims, it does not study the player.

mod computer;

pub use computer::{ComputerPlayer, ScriptedComputer, UniformComputer};
