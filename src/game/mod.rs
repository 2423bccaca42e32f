//! Screen Flow
//!
//! - `types`: screens, events and tick outcomes
//! - `state`: the screen state machine and its transition table
//! - `shell`: ties input, state, music, glow and background into one tick

pub mod shell;
pub mod state;
pub mod types;

pub use shell::Shell;
pub use types::{Screen, TickOutcome};
