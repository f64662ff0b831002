//! Round orchestration.
//!
//! `RoundController::play_round` is the single entry point the front end
//! calls. It must be driven from one thread, one round at a time.

mod controller;

pub use controller::{RoundController, RoundResult};
